use super::*;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["quarter-metadata"]).unwrap();
    assert_eq!(cli.batch_size, 10_000);
    assert_eq!(cli.output, PathBuf::from("./metadata"));
    assert_eq!(cli.image_base_url, "ipfs://PLACEHOLDER");
    assert_eq!(cli.seed, None);
    assert_eq!(cli.mapping, None);
    assert!(!cli.quiet);
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "quarter-metadata",
        "--batch-size",
        "250",
        "--output",
        "/tmp/out",
        "--image-base-url",
        "ipfs://bafy",
        "--seed",
        "0",
        "--quiet",
    ])
    .unwrap();

    let config = GeneratorConfig::try_from(&cli).unwrap();
    assert_eq!(config.batcher.batch_size(), 250);
    assert_eq!(config.output, PathBuf::from("/tmp/out"));
    assert_eq!(config.image_base_url, "ipfs://bafy");
    assert_eq!(config.seed, Some(0));
    assert_eq!(config.reuse_mapping, None);
    assert_eq!(config.mapping_path(), PathBuf::from("/tmp/out/shuffle_mapping.json"));
    assert!(cli.quiet);
}

#[test]
fn test_mapping_flag() {
    let cli = Cli::try_parse_from([
        "quarter-metadata",
        "--mapping",
        "/tmp/old/shuffle_mapping.json",
    ])
    .unwrap();

    let config = GeneratorConfig::try_from(&cli).unwrap();
    assert_eq!(config.seed, None);
    assert_eq!(
        config.reuse_mapping,
        Some(PathBuf::from("/tmp/old/shuffle_mapping.json"))
    );
}

#[test]
fn test_seed_conflicts_with_mapping() {
    let result = Cli::try_parse_from([
        "quarter-metadata",
        "--seed",
        "7",
        "--mapping",
        "/tmp/old/shuffle_mapping.json",
    ]);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_zero_batch_size_is_rejected() {
    let cli = Cli::try_parse_from(["quarter-metadata", "--batch-size", "0"]).unwrap();
    assert!(matches!(
        GeneratorConfig::try_from(&cli),
        Err(GenerateError::InvalidBatchSize(0))
    ));
}

#[test]
fn test_negative_values_do_not_parse() {
    assert!(Cli::try_parse_from(["quarter-metadata", "--batch-size", "-5"]).is_err());
    assert!(Cli::try_parse_from(["quarter-metadata", "--seed", "-1"]).is_err());
}
