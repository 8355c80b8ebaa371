use anyhow::{Context, Result};
use clap::Parser;
use mandiprice::{fetch::records_from_body, normalize_batch, rank_by_price};
use serde_json::Value;
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Normalize and rank a saved market-data API response.
#[derive(Parser, Debug)]
struct Args {
    /// JSON file holding a `{"records": [...]}` response
    path: PathBuf,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let body: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", args.path.display()))?;

    let records = records_from_body(&body);
    info!(count = records.len(), path = %args.path.display(), "loaded records");

    let ranked = rank_by_price(normalize_batch(records));
    let approx = ranked.iter().filter(|e| e.is_approximate).count();
    let unpriced = ranked.iter().filter(|e| e.price_per_kg.is_none()).count();
    info!(approx, unpriced, "normalized");

    print!("{}", serde_yaml::to_string(&ranked)?);
    Ok(())
}
