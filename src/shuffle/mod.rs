mod generator;
mod mapping;
mod types;


pub use generator::{domain, generate, shuffle_with};
pub use mapping::{MAPPING_FILE_NAME, MappingEntry, mapping_digest, read_mapping, write_mapping};
pub use types::{Assignment, Quarter, TokenId};
