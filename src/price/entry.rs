use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{
    fields::{lookup, lookup_text, Field},
    parse::parse_numeric,
    unit::{effective_unit, normalize_to_per_kg, per_kg, PerKg},
    RawMarketRecord,
};

/// Unit label reported when the record carries none.
pub const DEFAULT_UNIT: &str = "kg";

/// One market record after normalization. `price_per_kg` is comparable across entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPriceEntry {
    pub commodity: Option<String>,
    pub variety: Option<String>,
    /// Unit label as found on the record.
    pub unit: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub modal_price: Option<f64>,
    pub price_per_kg: Option<f64>,
    pub is_approximate: bool,
    pub arrival_date: Option<String>,
    #[serde(skip_serializing)]
    pub raw: Arc<RawMarketRecord>,
}

/// Build a normalized entry from one raw record.
///
/// Price source, first usable wins: modal, mean of min and max, min alone.
pub fn build_normalized_entry(record: Arc<RawMarketRecord>) -> NormalizedPriceEntry {
    let unit = lookup_text(&record, Field::Unit);
    let unit_label = unit.clone().unwrap_or_default();

    let modal_raw = lookup(&record, Field::ModalPrice).unwrap_or(&Value::Null);
    let min_raw = lookup(&record, Field::MinPrice).unwrap_or(&Value::Null);
    let max_raw = lookup(&record, Field::MaxPrice).unwrap_or(&Value::Null);

    let modal_price = parse_numeric(modal_raw);
    let min_price = parse_numeric(min_raw);
    let max_price = parse_numeric(max_raw);

    let mut norm = normalize_to_per_kg(modal_raw, &unit_label, Some(&*record));
    if norm.value.is_none() {
        let fallback = match (min_price, max_price) {
            (Some(lo), Some(hi)) => Some((lo + hi) / 2.0),
            (Some(lo), None) => Some(lo),
            _ => None,
        };
        if let Some(p) = fallback {
            norm = normalize_parsed(p, &unit_label, &record);
        }
    }

    let commodity = lookup_text(&record, Field::Commodity);
    if norm.value.is_none() {
        debug!(commodity = ?commodity, "record has no usable price");
    }

    NormalizedPriceEntry {
        commodity,
        variety: lookup_text(&record, Field::Variety),
        unit: unit.unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        min_price,
        max_price,
        modal_price,
        price_per_kg: norm.value,
        is_approximate: norm.approximate,
        arrival_date: lookup_text(&record, Field::ArrivalDate),
        raw: record,
    }
}

fn normalize_parsed(price: f64, unit: &str, record: &RawMarketRecord) -> PerKg {
    per_kg(price, &effective_unit(unit, Some(record)))
}

/// Normalize a whole fetched batch, keeping input order.
pub fn normalize_batch(records: Vec<RawMarketRecord>) -> Vec<NormalizedPriceEntry> {
    records
        .into_iter()
        .map(|r| build_normalized_entry(Arc::new(r)))
        .collect()
}
