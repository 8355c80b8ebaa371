//! Field synonym tables for the open-data market records.
//!
//! Different datasets (and different vintages of the same dataset) name the same
//! column differently. Each canonical field maps to an ordered list of candidate
//! keys; the first candidate holding a non-empty value wins.

use serde_json::Value;

use super::RawMarketRecord;

/// Canonical fields we read out of a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Commodity,
    Variety,
    Unit,
    ModalPrice,
    MinPrice,
    MaxPrice,
    ArrivalDate,
    District,
}

impl Field {
    /// Candidate keys in priority order.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Field::Commodity => &["commodity", "Commodity", "commodity_name", "name"],
            Field::Variety => &["variety", "variety_name", "variety_of_commodity"],
            Field::Unit => &["unit", "unit_of_quantity", "unit_price"],
            Field::ModalPrice => &[
                "modal_price",
                "modal_price_per_quintal",
                "modal_price_per_kg",
                "modal_price_per_unit",
                "modal_price_in_rupees",
                "modal",
            ],
            Field::MinPrice => &[
                "min_price",
                "min_price_per_quintal",
                "min_price_per_kg",
                "min_price_per_unit",
            ],
            Field::MaxPrice => &[
                "max_price",
                "max_price_per_quintal",
                "max_price_per_kg",
                "max_price_per_unit",
            ],
            Field::ArrivalDate => &["arrival_date", "date", "timestamp"],
            Field::District => &["district", "district_name", "districts", "District"],
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// First non-empty raw value for `field`.
pub fn lookup<'a>(record: &'a RawMarketRecord, field: Field) -> Option<&'a Value> {
    field
        .synonyms()
        .iter()
        .filter_map(|key| record.get(*key))
        .find(|v| !is_empty(v))
}

/// First non-empty value for `field`, rendered as trimmed text.
/// Numbers and booleans are stringified; arrays and objects are skipped.
pub fn lookup_text(record: &RawMarketRecord, field: Field) -> Option<String> {
    field
        .synonyms()
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(value_text)
}

pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> RawMarketRecord {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn earlier_synonym_wins() {
        let r = record(json!({ "name": "Onion", "Commodity": "Tomato" }));
        assert_eq!(lookup_text(&r, Field::Commodity).as_deref(), Some("Tomato"));
    }

    #[test]
    fn empty_values_fall_through() {
        let r = record(json!({
            "modal_price": "",
            "modal_price_per_quintal": null,
            "modal": "2,100"
        }));
        assert_eq!(lookup(&r, Field::ModalPrice), Some(&json!("2,100")));
    }

    #[test]
    fn blank_text_is_missing() {
        let r = record(json!({ "variety": "   " }));
        assert_eq!(lookup_text(&r, Field::Variety), None);
    }

    #[test]
    fn numbers_render_as_text() {
        let r = record(json!({ "District": 42 }));
        assert_eq!(lookup_text(&r, Field::District).as_deref(), Some("42"));
    }

    #[test]
    fn zero_price_counts_as_present() {
        let r = record(json!({ "min_price": 0, "min_price_per_kg": 12 }));
        assert_eq!(lookup(&r, Field::MinPrice), Some(&json!(0)));
    }
}
