use anyhow::{Context, Result};
use clap::Parser;
use quarter_metadata::cli::Cli;
use quarter_metadata::{Catalog, GeneratorConfig, RunEvent, ShuffleSource};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::try_from(&cli).context("Invalid arguments")?;
    let catalog = Catalog::standard();
    let start_time = Instant::now();

    match &config.reuse_mapping {
        Some(path) => println!("Reusing shuffle mapping from {}...", path.display()),
        None => println!(
            "Generating shuffle for {} tokens...",
            catalog.total_supply()
        ),
    }

    let quiet = cli.quiet;
    let summary = quarter_metadata::run(&config, &catalog, |event| match event {
        RunEvent::MappingReady { path, source } => match source {
            ShuffleSource::Generated { seed } => {
                let seed = seed.map_or_else(|| "none".to_string(), |s| s.to_string());
                println!("Saved shuffle mapping to {} (seed: {})", path.display(), seed);
            }
            ShuffleSource::Reused { .. } => {
                println!("Using shuffle mapping at {}", path.display());
            }
        },
        RunEvent::BatchWritten {
            batch,
            total_batches,
        } => {
            if !quiet {
                println!(
                    "Generated batch {}/{}: tokens {}-{}",
                    batch.index + 1,
                    total_batches,
                    batch.tokens.start,
                    batch.tokens.end.saturating_sub(1)
                );
            }
        }
    })
    .with_context(|| format!("Failed to generate metadata in {}", config.output.display()))?;

    println!(
        "\n✓ Done! Metadata saved to {} [{:.2}s]",
        config.output.display(),
        start_time.elapsed().as_secs_f64()
    );
    println!("Total batches:        {}", summary.emit.batch_count());
    println!("Records written:      {}", summary.emit.records_written);
    println!("Mapping SHA-256:      {}", summary.mapping_digest);

    println!("\nNext steps:");
    println!("1. Create quarter images for each state");
    println!("2. Upload images to IPFS");
    println!("3. Update --image-base-url and regenerate metadata");
    println!("   (pass --mapping to keep the shuffle)");
    println!("4. Upload metadata batches to IPFS as you increase maxMintable");

    Ok(())
}
