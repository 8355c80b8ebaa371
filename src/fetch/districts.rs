use anyhow::Result;
use reqwest::Client;
use std::collections::BTreeSet;
use tracing::{info, instrument};

use super::{get_json, records::records_from_body, resource_url};
use crate::{
    config::Config,
    price::{
        fields::{lookup_text, Field},
        RawMarketRecord,
    },
};

/// Districts with market data in `state`, de-duplicated and sorted.
#[instrument(level = "info", skip(client, cfg))]
pub async fn fetch_available_districts(
    client: &Client,
    cfg: &Config,
    state: &str,
) -> Result<Vec<String>> {
    cfg.validate()?;
    let limit = cfg.district_limit.to_string();
    let url = resource_url(
        cfg,
        &[
            ("limit", limit.as_str()),
            ("fields", "district"),
            ("filters[state.keyword]", state),
        ],
    )?;
    let body = get_json(client, &url, cfg).await?;
    let districts = distinct_districts(&records_from_body(&body));
    info!(count = districts.len(), "fetched districts");
    Ok(districts)
}

pub fn distinct_districts(records: &[RawMarketRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| lookup_text(r, Field::District))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn districts_are_unique_trimmed_and_sorted() {
        let body = json!({ "records": [
            { "district": "Nashik " },
            { "district_name": "Ahmednagar" },
            { "District": "Nashik" },
            { "district": "" },
            { "market": "Lasalgaon" }
        ]});
        let out = distinct_districts(&records_from_body(&body));
        assert_eq!(out, vec!["Ahmednagar".to_string(), "Nashik".to_string()]);
    }
}
