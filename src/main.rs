//! siteflow binary - collect valid datasets from the random source and print
//! the grouped aggregation.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release [-- --format json]
//! ```
//!
//! ## Environment Variables
//!
//! - DATASET_COUNT - valid datasets to collect (default: 1000)
//! - INVALID_LIMIT - consecutive invalid datasets tolerated (default: 100)
//! - GENERATOR_SEED - seed for the random source (default: 0)
//! - ROWS_PER_DATASET - rows per generated dataset (default: 1000)
//! - RUST_LOG - logging level (optional, default: info)

use siteflow::{compute, output, Config, OutputFormat, RandomDatasetSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    log::info!("🚀 Starting siteflow aggregation");
    log::info!("   Dataset count: {}", config.dataset_count);
    log::info!("   Invalid limit: {}", config.invalid_limit);
    log::info!("   Generator seed: {}", config.seed);
    log::info!("   Rows per dataset: {}", config.rows_per_dataset);
    log::info!("   Output format: {}", config.format.as_str());

    let source = RandomDatasetSource::with_rows(config.seed, config.rows_per_dataset);

    // Collection failures are reported, not propagated as a crash.
    match compute(source, config.dataset_count, config.invalid_limit) {
        Ok(result) => {
            log::info!("✅ Aggregated {} (site, name) groups", result.len());
            let rendered = match config.format {
                OutputFormat::Table => output::render_table(&result),
                OutputFormat::Json => output::render_json(&result)?,
            };
            print!("{}", rendered);
        }
        Err(err) => {
            println!("Error: {}", err);
        }
    }

    Ok(())
}
