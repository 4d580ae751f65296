// Public API exports
pub mod catalog;
pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod shuffle;

// Re-export main types for convenience
pub use catalog::{Catalog, SERIALS_PER_STATE, US_STATES, slugify};
pub use config::GeneratorConfig;
pub use error::GenerateError;

pub use shuffle::{Assignment, MAPPING_FILE_NAME, Quarter, TokenId};

pub use metadata::{Attribute, AttributeValue, QuarterMetadata};

pub use emitter::{BatchEmitter, BatchRange, Batcher, EmitSummary};

pub use pipeline::{RunEvent, RunSummary, ShuffleSource, run};
