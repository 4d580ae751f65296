mod record;


pub use record::{Attribute, AttributeValue, QuarterMetadata, format_with_commas};

use crate::catalog::Catalog;
use crate::error::GenerateError;
use crate::shuffle::Quarter;

/// Record for a quarter resolved against its catalog
pub fn metadata_for(
    catalog: &Catalog,
    quarter: Quarter,
    image_base_url: &str,
) -> Result<QuarterMetadata, GenerateError> {
    let state = catalog.name(quarter.category).ok_or_else(|| {
        GenerateError::MappingMismatch(format!(
            "category index {} is outside a catalog of {}",
            quarter.category,
            catalog.category_count()
        ))
    })?;
    Ok(QuarterMetadata::new(
        state,
        quarter.serial,
        quarter.category as u32 + 1,
        catalog.serials_per_category(),
        image_base_url,
    ))
}
