use crate::catalog::Catalog;
use crate::emitter::batcher::{BatchRange, Batcher, batch_dir_name};
use crate::error::GenerateError;
use crate::metadata::metadata_for;
use crate::shuffle::{Assignment, TokenId};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Result of a completed emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub batches: Vec<BatchRange>,
    pub records_written: u32,
}

impl EmitSummary {
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }
}

/// Writes one metadata file per token into `batch_NNN` directories
pub struct BatchEmitter {
    output_root: PathBuf,
    image_base_url: String,
    batcher: Batcher,
}

impl BatchEmitter {
    pub fn new(
        output_root: impl Into<PathBuf>,
        image_base_url: impl Into<String>,
        batcher: Batcher,
    ) -> Self {
        Self {
            output_root: output_root.into(),
            image_base_url: image_base_url.into(),
            batcher,
        }
    }

    /// Path of a token's metadata file
    pub fn record_path(&self, token_id: TokenId) -> PathBuf {
        self.output_root
            .join(batch_dir_name(self.batcher.batch_of(token_id)))
            .join(format!("{}.json", token_id))
    }

    /// Emit every token in id order. `on_batch` runs after each finished batch
    /// with the batch and the total batch count.
    pub fn emit<F>(
        &self,
        catalog: &Catalog,
        assignment: &Assignment,
        mut on_batch: F,
    ) -> Result<EmitSummary, GenerateError>
    where
        F: FnMut(&BatchRange, usize),
    {
        fs::create_dir_all(&self.output_root)
            .map_err(|e| GenerateError::io(&self.output_root, e))?;

        let batches = self.batcher.split(assignment.supply());
        let mut records_written = 0u32;

        for batch in &batches {
            let batch_dir = self.output_root.join(batch.dir_name());
            fs::create_dir_all(&batch_dir).map_err(|e| GenerateError::io(&batch_dir, e))?;
            tracing::debug!(dir = %batch_dir.display(), tokens = ?batch.tokens, "emitting batch");

            let span = batch.tokens.start as usize..batch.tokens.end as usize;
            let quarters = &assignment.quarters()[span];
            for (token_id, quarter) in batch.tokens.clone().zip(quarters.iter().copied()) {
                let record = metadata_for(catalog, quarter, &self.image_base_url)?;
                let path = batch_dir.join(format!("{}.json", token_id));
                write_record(&path, &record)?;
                records_written += 1;
            }

            on_batch(batch, batches.len());
        }

        Ok(EmitSummary {
            batches,
            records_written,
        })
    }
}

fn write_record<T: serde::Serialize>(path: &Path, record: &T) -> Result<(), GenerateError> {
    let file = File::create(path).map_err(|e| GenerateError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, record).map_err(|e| GenerateError::json(path, e))?;
    writer.flush().map_err(|e| GenerateError::io(path, e))
}
