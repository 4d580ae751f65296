mod states;

#[cfg(test)]
mod tests;

pub use states::{SERIALS_PER_STATE, US_STATES};

use crate::error::GenerateError;
use std::collections::HashMap;

/// Index of a category in its catalog (rank - 1)
pub type CategoryIndex = u16;

/// Immutable, ordered set of categories and the serial count each one carries.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<String>,
    /// Name -> position lookup, built once
    positions: HashMap<String, CategoryIndex>,
    serials_per_category: u32,
    total_supply: u32,
}

impl Catalog {
    /// The full collection: 50 states, 10,000 serials each
    pub fn standard() -> Self {
        Self::new(US_STATES, SERIALS_PER_STATE)
            .unwrap_or_else(|e| unreachable!("standard catalog is valid: {e}"))
    }

    /// Build a catalog from an ordered list of category names
    pub fn new<I, S>(categories: I, serials_per_category: u32) -> Result<Self, GenerateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();

        if categories.is_empty() {
            return Err(GenerateError::InvalidCatalog(
                "at least one category is required".to_string(),
            ));
        }
        if serials_per_category == 0 {
            return Err(GenerateError::InvalidCatalog(
                "serials per category must be at least 1".to_string(),
            ));
        }
        if categories.len() > CategoryIndex::MAX as usize {
            return Err(GenerateError::InvalidCatalog(format!(
                "too many categories: {}",
                categories.len()
            )));
        }

        let total_supply = (categories.len() as u32)
            .checked_mul(serials_per_category)
            .ok_or_else(|| {
                GenerateError::InvalidCatalog(format!(
                    "{} categories x {} serials overflows the identifier range",
                    categories.len(),
                    serials_per_category
                ))
            })?;

        let mut positions = HashMap::with_capacity(categories.len());
        for (idx, name) in categories.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(GenerateError::InvalidCatalog(format!(
                    "category #{} has an empty name",
                    idx + 1
                )));
            }
            if positions.insert(name.clone(), idx as CategoryIndex).is_some() {
                return Err(GenerateError::InvalidCatalog(format!(
                    "duplicate category: {}",
                    name
                )));
            }
        }

        Ok(Self {
            categories,
            positions,
            serials_per_category,
            total_supply,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn serials_per_category(&self) -> u32 {
        self.serials_per_category
    }

    /// Number of items across all categories
    pub fn total_supply(&self) -> u32 {
        self.total_supply
    }

    /// Category name at a position
    pub fn name(&self, index: CategoryIndex) -> Option<&str> {
        self.categories.get(index as usize).map(String::as_str)
    }

    /// Position of a category by name
    pub fn index_of(&self, name: &str) -> Option<CategoryIndex> {
        self.positions.get(name).copied()
    }

    /// 1-based rank of a category by name
    pub fn rank(&self, name: &str) -> Option<u32> {
        self.index_of(name).map(|idx| idx as u32 + 1)
    }
}

/// Lower-case a category name and replace spaces with hyphens
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
