use crate::catalog::{Catalog, CategoryIndex};
use crate::error::GenerateError;

/// Identifier assigned to an item after shuffling
pub type TokenId = u32;

/// One (category, serial) item of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quarter {
    /// Position of the category in its catalog
    pub category: CategoryIndex,
    /// 1-based serial within the category
    pub serial: u32,
}

/// Bijection from token id (position) to quarter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    quarters: Vec<Quarter>,
}

impl Assignment {
    /// Wrap an ordered sequence; index `i` becomes token id `i`
    pub fn from_quarters(quarters: Vec<Quarter>) -> Self {
        Self { quarters }
    }

    /// Number of token ids assigned
    pub fn supply(&self) -> u32 {
        self.quarters.len() as u32
    }

    pub fn quarters(&self) -> &[Quarter] {
        &self.quarters
    }

    /// Iterate `(token_id, quarter)` in token id order
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, Quarter)> + '_ {
        self.quarters
            .iter()
            .enumerate()
            .map(|(idx, quarter)| (idx as TokenId, *quarter))
    }

    /// Check that every (category, serial) pair of the catalog appears exactly once
    pub fn verify(&self, catalog: &Catalog) -> Result<(), GenerateError> {
        let total = catalog.total_supply() as usize;
        if self.quarters.len() != total {
            return Err(GenerateError::MappingMismatch(format!(
                "expected {} entries, found {}",
                total,
                self.quarters.len()
            )));
        }

        let serials = catalog.serials_per_category();
        let mut seen = vec![false; total];
        for (token_id, quarter) in self.iter() {
            if catalog.name(quarter.category).is_none() {
                return Err(GenerateError::MappingMismatch(format!(
                    "token {} has unknown category index {}",
                    token_id, quarter.category
                )));
            }
            if quarter.serial == 0 || quarter.serial > serials {
                return Err(GenerateError::MappingMismatch(format!(
                    "token {} has serial {} outside 1..={}",
                    token_id, quarter.serial, serials
                )));
            }

            let slot = quarter.category as usize * serials as usize + (quarter.serial - 1) as usize;
            if std::mem::replace(&mut seen[slot], true) {
                return Err(GenerateError::MappingMismatch(format!(
                    "token {} repeats {} #{}",
                    token_id,
                    catalog.name(quarter.category).unwrap_or("?"),
                    quarter.serial
                )));
            }
        }

        Ok(())
    }
}
