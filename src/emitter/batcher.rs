// batcher.rs - staged-release slicing

use crate::error::GenerateError;
use crate::shuffle::TokenId;
use std::ops::Range;

/// Directory name for a batch index, e.g. `batch_007`
pub fn batch_dir_name(index: u32) -> String {
    format!("batch_{:03}", index)
}

/// Contiguous run of token ids written to one batch directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRange {
    pub index: u32,
    pub tokens: Range<TokenId>,
}

impl BatchRange {
    pub fn dir_name(&self) -> String {
        batch_dir_name(self.index)
    }

    /// Tokens in this batch
    pub fn size(&self) -> u32 {
        self.tokens.end - self.tokens.start
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Batcher {
    batch_size: u32,
}

impl Batcher {
    pub fn new(batch_size: u64) -> Result<Self, GenerateError> {
        if batch_size == 0 {
            return Err(GenerateError::InvalidBatchSize(batch_size));
        }
        // Anything past the identifier range behaves as one batch.
        let batch_size = u32::try_from(batch_size).unwrap_or(u32::MAX);
        Ok(Self { batch_size })
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Batch holding a token id
    pub fn batch_of(&self, token_id: TokenId) -> u32 {
        token_id / self.batch_size
    }

    /// ceil(total / batch_size)
    pub fn batch_count(&self, total: u32) -> u32 {
        total.div_ceil(self.batch_size)
    }

    pub fn split(&self, total: u32) -> Vec<BatchRange> {
        (0..self.batch_count(total))
            .map(|index| {
                let start = index * self.batch_size;
                let end = start.saturating_add(self.batch_size).min(total);
                BatchRange {
                    index,
                    tokens: start..end,
                }
            })
            .collect()
    }
}
