use crate::emitter::Batcher;
use crate::error::GenerateError;
use crate::shuffle::MAPPING_FILE_NAME;
use std::path::PathBuf;

pub const DEFAULT_BATCH_SIZE: u64 = 10_000;
pub const DEFAULT_IMAGE_BASE_URL: &str = "ipfs://PLACEHOLDER";

/// Validated settings for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub batcher: Batcher,
    pub image_base_url: String,
    /// `Some(0)` is a valid seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Existing mapping to emit from instead of shuffling
    pub reuse_mapping: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn new(output: impl Into<PathBuf>, batch_size: u64) -> Result<Self, GenerateError> {
        Ok(Self {
            output: output.into(),
            batcher: Batcher::new(batch_size)?,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            seed: None,
            reuse_mapping: None,
        })
    }

    pub fn image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn reuse_mapping(mut self, path: impl Into<PathBuf>) -> Self {
        self.reuse_mapping = Some(path.into());
        self
    }

    /// `<output>/shuffle_mapping.json`
    pub fn mapping_path(&self) -> PathBuf {
        self.output.join(MAPPING_FILE_NAME)
    }
}
