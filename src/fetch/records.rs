use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{get_json, resource_url};
use crate::{config::Config, price::RawMarketRecord};

/// Fetch raw market-price records for one district.
#[instrument(level = "info", skip(client, cfg))]
pub async fn fetch_market_records(
    client: &Client,
    cfg: &Config,
    district: &str,
) -> Result<Vec<RawMarketRecord>> {
    cfg.validate()?;
    let limit = cfg.price_limit.to_string();
    let url = resource_url(
        cfg,
        &[
            ("limit", limit.as_str()),
            ("filters[district.keyword]", district),
        ],
    )?;
    let body = get_json(client, &url, cfg).await?;
    let records = records_from_body(&body);
    info!(count = records.len(), "fetched market records");
    Ok(records)
}

/// Pull `records` out of a response body. Missing or malformed shapes give an
/// empty list; non-object items are dropped.
pub fn records_from_body(body: &Value) -> Vec<RawMarketRecord> {
    let Some(items) = body.get("records").and_then(Value::as_array) else {
        debug!("response has no records array");
        return Vec::new();
    };
    let records: Vec<RawMarketRecord> = items
        .iter()
        .filter_map(|v| v.as_object().cloned())
        .collect();
    if records.len() != items.len() {
        debug!(
            dropped = items.len() - records.len(),
            "skipped non-object records"
        );
    }
    records
}
