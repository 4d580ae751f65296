use super::*;

#[test]
fn test_standard_catalog_shape() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.category_count(), 50);
    assert_eq!(catalog.serials_per_category(), 10_000);
    assert_eq!(catalog.total_supply(), 500_000);
}

#[test]
fn test_rank_is_statehood_order() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.rank("Delaware"), Some(1));
    assert_eq!(catalog.rank("Pennsylvania"), Some(2));
    assert_eq!(catalog.rank("Texas"), Some(28));
    assert_eq!(catalog.rank("Hawaii"), Some(50));
    assert_eq!(catalog.rank("Puerto Rico"), None);
}

#[test]
fn test_name_and_index_agree() {
    let catalog = Catalog::standard();
    for (idx, name) in catalog.categories().iter().enumerate() {
        let idx = idx as CategoryIndex;
        assert_eq!(catalog.index_of(name), Some(idx));
        assert_eq!(catalog.name(idx), Some(name.as_str()));
    }
    assert_eq!(catalog.name(50), None);
}

#[test]
fn test_custom_catalog() {
    let catalog = Catalog::new(["Delaware", "Pennsylvania"], 2).unwrap();
    assert_eq!(catalog.total_supply(), 4);
    assert_eq!(catalog.rank("Pennsylvania"), Some(2));
}

#[test]
fn test_rejects_empty_catalog() {
    let result = Catalog::new(Vec::<String>::new(), 10);
    assert!(matches!(result, Err(GenerateError::InvalidCatalog(_))));
}

#[test]
fn test_rejects_zero_serials() {
    let result = Catalog::new(["Ohio"], 0);
    assert!(result.unwrap_err().to_string().contains("serials"));
}

#[test]
fn test_rejects_duplicate_category() {
    let result = Catalog::new(["Ohio", "Iowa", "Ohio"], 5);
    assert!(result.unwrap_err().to_string().contains("duplicate category: Ohio"));
}

#[test]
fn test_rejects_blank_category() {
    let result = Catalog::new(["Ohio", "  "], 5);
    assert!(result.is_err());
}

#[test]
fn test_rejects_supply_overflow() {
    let result = Catalog::new(["Ohio", "Iowa"], u32::MAX);
    assert!(result.unwrap_err().to_string().contains("overflows"));
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("Delaware"), "delaware");
    assert_eq!(slugify("New Hampshire"), "new-hampshire");
    assert_eq!(slugify("North Carolina"), "north-carolina");
}
