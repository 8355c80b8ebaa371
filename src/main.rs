use anyhow::{bail, Result};
use chrono::Utc;
use clap::Parser;
use mandiprice::{
    fetch,
    normalize_batch,
    state::{AppState, LocationAction, MarketAction},
    Config, NormalizedPriceEntry,
};
use reqwest::Client;
use std::path::PathBuf;
use tokio::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Per-kg mandi prices from the data.gov.in market dataset.
#[derive(Parser, Debug)]
struct Args {
    /// District to fetch prices for (repeatable)
    #[arg(long)]
    district: Vec<String>,

    /// List districts with data in this state
    #[arg(long)]
    state: Option<String>,

    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print entries as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    let args = Args::parse();

    // ─── 2) config ───────────────────────────────────────────────────
    let cfg = Config::load(args.config.as_deref())?;
    cfg.validate()?;
    let client = Client::new();
    let mut app = AppState::default();

    if args.district.is_empty() && args.state.is_none() {
        bail!("nothing to do: pass --district and/or --state");
    }

    // ─── 3) districts for a state ────────────────────────────────────
    if let Some(state) = &args.state {
        app.dispatch(LocationAction::SetStateName(Some(state.clone())));
        let districts = match fetch::fetch_available_districts(&client, &cfg, state).await {
            Ok(d) => d,
            Err(e) => {
                warn!(state = %state, error = %e, "failed to fetch districts");
                Vec::new()
            }
        };
        println!("Districts in {}:", state);
        for d in &districts {
            println!("  {}", d);
        }
    }

    // ─── 4) one fetch task per district ──────────────────────────────
    let mut handles = Vec::with_capacity(args.district.len());
    for district in args.district.clone() {
        let client = client.clone();
        let cfg = cfg.clone();
        handles.push(tokio::spawn(async move {
            let start = Instant::now();
            let res = fetch::fetch_market_records(&client, &cfg, &district).await;
            info!(district = %district, elapsed = ?start.elapsed(), ok = res.is_ok(), "fetch finished");
            (district, res)
        }));
    }

    // ─── 5) normalize, store, print ──────────────────────────────────
    let mut failed = 0usize;
    for h in handles {
        let (district, res) = h.await?;
        app.dispatch(LocationAction::SetDistrictName(Some(district.clone())));
        app.dispatch(MarketAction::SetLoading(true));
        match res {
            Ok(records) => {
                app.dispatch(MarketAction::SetPrices(normalize_batch(records)));
                app.dispatch(MarketAction::SetLastUpdated(Utc::now()));
                app.dispatch(MarketAction::SetLoading(false));
            }
            Err(e) => {
                error!(district = %district, "market fetch failed: {:#}", e);
                app.dispatch(MarketAction::FetchFailed(format!("{:#}", e)));
                failed += 1;
            }
        }

        let ranked = app.market.ranked();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        } else {
            print_table(&district, &ranked, app.market.error.as_deref());
        }
    }

    if failed > 0 {
        bail!("{} of {} district fetches failed", failed, args.district.len());
    }
    info!("all done");
    Ok(())
}

fn print_table(district: &str, entries: &[NormalizedPriceEntry], error: Option<&str>) {
    println!("\n{}", district);
    if let Some(msg) = error {
        println!("  error: {}", msg);
    }
    if entries.is_empty() {
        println!("  no prices");
        return;
    }
    for e in entries {
        let name = match (&e.commodity, &e.variety) {
            (Some(c), Some(v)) => format!("{} ({})", c, v),
            (Some(c), None) => c.clone(),
            (None, _) => "?".to_string(),
        };
        let price = match e.price_per_kg {
            Some(p) if e.is_approximate => format!("₹{:.2}/kg approx", p),
            Some(p) => format!("₹{:.2}/kg", p),
            None => "—".to_string(),
        };
        println!("  {:<40} {}", name, price);
    }
}
