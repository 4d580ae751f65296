use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quarter-metadata")]
#[command(about = "Generate shuffled Crypto Quarters metadata in release batches")]
pub struct Cli {
    #[arg(long, help = "Tokens per batch", default_value_t = 10_000)]
    pub batch_size: u64,

    #[arg(long, help = "Output directory", default_value = "./metadata")]
    pub output: PathBuf,

    #[arg(
        long,
        help = "Base URL for images and animations",
        default_value = "ipfs://PLACEHOLDER"
    )]
    pub image_base_url: String,

    #[arg(
        long,
        help = "Random seed for a reproducible shuffle",
        conflicts_with = "mapping"
    )]
    pub seed: Option<u64>,

    #[arg(
        long,
        help = "Reuse an existing shuffle mapping instead of generating a new one"
    )]
    pub mapping: Option<PathBuf>,

    #[arg(long, help = "Only print the final summary", default_value_t = false)]
    pub quiet: bool,
}

impl TryFrom<&Cli> for GeneratorConfig {
    type Error = GenerateError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let mut config = GeneratorConfig::new(&cli.output, cli.batch_size)?
            .image_base_url(cli.image_base_url.clone());
        if let Some(seed) = cli.seed {
            config = config.seed(seed);
        }
        if let Some(mapping) = &cli.mapping {
            config = config.reuse_mapping(mapping.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
