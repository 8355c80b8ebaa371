// src/fetch/mod.rs

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;

pub mod districts;
pub mod records;

pub use districts::fetch_available_districts;
pub use records::{fetch_market_records, records_from_body};

/// Build `{api_base}/{resource_id}?api-key=..&format=json&..` with `extra` appended.
pub fn resource_url(cfg: &Config, extra: &[(&str, &str)]) -> Result<Url> {
    let base = format!(
        "{}/{}",
        cfg.api_base.trim_end_matches('/'),
        cfg.resource_id.trim()
    );
    let mut params: Vec<(&str, &str)> = vec![("api-key", cfg.api_key.as_str()), ("format", "json")];
    params.extend_from_slice(extra);
    Url::parse_with_params(&base, &params).with_context(|| format!("building URL from {}", base))
}

/// GET `url` and decode the body as JSON.
///
/// Transport and body errors are retried up to `max_retries` attempts;
/// a non-success status is returned straight away.
pub async fn get_json(client: &Client, url: &Url, cfg: &Config) -> Result<Value> {
    let mut attempt = 0;

    loop {
        attempt += 1;

        // 1) send
        let resp = match client.get(url.clone()).send().await {
            Ok(resp) => resp,
            Err(e) if attempt < cfg.max_retries => {
                warn!(attempt, error = %e, "request failed, retrying");
                sleep(cfg.retry_delay()).await;
                continue;
            }
            Err(e) => return Err(e).context("sending market data request"),
        };

        // 2) status
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP {}", status));
        }

        // 3) body
        match resp.json::<Value>().await {
            Ok(body) => {
                debug!(attempt, "decoded response body");
                return Ok(body);
            }
            Err(e) if attempt < cfg.max_retries => {
                warn!(attempt, error = %e, "reading body failed, retrying");
                sleep(cfg.retry_delay()).await;
            }
            Err(e) => return Err(e).context("decoding market data response"),
        }
    }
}
