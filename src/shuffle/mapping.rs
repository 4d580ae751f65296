use crate::catalog::Catalog;
use crate::error::GenerateError;
use crate::shuffle::types::{Assignment, Quarter, TokenId};
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// File name of the persisted assignment inside the output directory
pub const MAPPING_FILE_NAME: &str = "shuffle_mapping.json";

/// One `{tokenId, state, serial}` row of the mapping file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingEntry<'a> {
    #[serde(rename = "tokenId")]
    pub token_id: TokenId,
    pub state: Cow<'a, str>,
    pub serial: u32,
}

/// Write the assignment as a single JSON array in token id order
pub fn write_mapping(
    path: &Path,
    assignment: &Assignment,
    catalog: &Catalog,
) -> Result<(), GenerateError> {
    let entries = assignment
        .iter()
        .map(|(token_id, quarter)| {
            let state = catalog.name(quarter.category).ok_or_else(|| {
                GenerateError::MappingMismatch(format!(
                    "token {} has unknown category index {}",
                    token_id, quarter.category
                ))
            })?;
            Ok(MappingEntry {
                token_id,
                state: Cow::Borrowed(state),
                serial: quarter.serial,
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    let file = File::create(path).map_err(|e| GenerateError::io(path, e))?;
    let mut ser = serde_json::Serializer::new(BufWriter::new(file));
    (&mut ser)
        .collect_seq(entries)
        .map_err(|e| GenerateError::json(path, e))?;

    ser.into_inner()
        .flush()
        .map_err(|e| GenerateError::io(path, e))?;

    tracing::info!(path = %path.display(), entries = assignment.supply(), "wrote shuffle mapping");
    Ok(())
}

/// Load a mapping file and check it against the catalog
pub fn read_mapping(path: &Path, catalog: &Catalog) -> Result<Assignment, GenerateError> {
    let file = File::open(path).map_err(|e| GenerateError::io(path, e))?;
    let entries: Vec<MappingEntry<'static>> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| GenerateError::json(path, e))?;

    let mut quarters = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        if entry.token_id as usize != position {
            return Err(GenerateError::MappingMismatch(format!(
                "entry {} carries tokenId {}",
                position, entry.token_id
            )));
        }
        let category = catalog.index_of(&entry.state).ok_or_else(|| {
            GenerateError::MappingMismatch(format!(
                "token {} has unknown state {:?}",
                entry.token_id, entry.state
            ))
        })?;
        quarters.push(Quarter {
            category,
            serial: entry.serial,
        });
    }

    let assignment = Assignment::from_quarters(quarters);
    assignment.verify(catalog)?;

    tracing::info!(path = %path.display(), entries = assignment.supply(), "loaded shuffle mapping");
    Ok(assignment)
}

/// Hex SHA-256 of a mapping file
pub fn mapping_digest(path: &Path) -> Result<String, GenerateError> {
    let mut file = File::open(path).map_err(|e| GenerateError::io(path, e))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|e| GenerateError::io(path, e))?;
    Ok(hex::encode(hasher.finalize()))
}
