use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::emitter::{BatchEmitter, BatchRange, EmitSummary};
use crate::error::GenerateError;
use crate::shuffle::{self, Assignment};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the assignment for a run came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShuffleSource {
    Generated { seed: Option<u64> },
    Reused { path: PathBuf },
}

/// Progress notifications, in the order the work happens
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// The mapping file is on disk; no batch has been written yet
    MappingReady {
        path: &'a Path,
        source: &'a ShuffleSource,
    },
    BatchWritten {
        batch: &'a BatchRange,
        total_batches: usize,
    },
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source: ShuffleSource,
    pub mapping_path: PathBuf,
    pub mapping_digest: String,
    pub total_supply: u32,
    pub emit: EmitSummary,
}

/// Build or load the assignment, persist it, then emit every batch.
pub fn run<F>(
    config: &GeneratorConfig,
    catalog: &Catalog,
    mut on_event: F,
) -> Result<RunSummary, GenerateError>
where
    F: FnMut(RunEvent<'_>),
{
    fs::create_dir_all(&config.output).map_err(|e| GenerateError::io(&config.output, e))?;

    let mapping_path = config.mapping_path();
    let (assignment, source) = prepare_assignment(config, catalog, &mapping_path)?;
    let mapping_digest = shuffle::mapping_digest(&mapping_path)?;
    on_event(RunEvent::MappingReady {
        path: &mapping_path,
        source: &source,
    });

    let emitter = BatchEmitter::new(&config.output, &config.image_base_url, config.batcher);
    let emit = emitter.emit(catalog, &assignment, |batch, total_batches| {
        on_event(RunEvent::BatchWritten {
            batch,
            total_batches,
        })
    })?;

    Ok(RunSummary {
        source,
        mapping_path,
        mapping_digest,
        total_supply: catalog.total_supply(),
        emit,
    })
}

fn prepare_assignment(
    config: &GeneratorConfig,
    catalog: &Catalog,
    mapping_path: &Path,
) -> Result<(Assignment, ShuffleSource), GenerateError> {
    match &config.reuse_mapping {
        Some(existing) => {
            let assignment = shuffle::read_mapping(existing, catalog)?;
            // Keep the output self-contained when the mapping lives elsewhere.
            if !same_file(existing, mapping_path) {
                fs::copy(existing, mapping_path).map_err(|e| GenerateError::io(mapping_path, e))?;
            }
            Ok((
                assignment,
                ShuffleSource::Reused {
                    path: existing.clone(),
                },
            ))
        }
        None => {
            let assignment = shuffle::generate(catalog, config.seed);
            shuffle::write_mapping(mapping_path, &assignment, catalog)?;
            Ok((assignment, ShuffleSource::Generated { seed: config.seed }))
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
