mod batcher;
mod writer;


pub use batcher::{BatchRange, Batcher, batch_dir_name};
pub use writer::{BatchEmitter, EmitSummary};
