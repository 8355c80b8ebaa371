use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::trace;

use super::{fields::value_text, parse::parse_numeric, RawMarketRecord};

/// Prices above this with no unit are assumed to be quoted per quintal.
pub const UNITLESS_QUINTAL_THRESHOLD: f64 = 1000.0;

const KG_PER_QUINTAL: f64 = 100.0;
const KG_PER_TONNE: f64 = 1000.0;

static HUNDRED_KG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"100\s*kg").expect("per-100kg pattern should compile"));

/// Result of converting one price to a per-kg basis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerKg {
    pub value: Option<f64>,
    /// Set only when the unit was missing and the size heuristic picked the scale.
    pub approximate: bool,
}

impl PerKg {
    fn exact(value: f64) -> Self {
        Self {
            value: Some(value),
            approximate: false,
        }
    }

    fn guessed(value: f64) -> Self {
        Self {
            value: Some(value),
            approximate: true,
        }
    }
}

/// Normalize a raw price to per-kg.
///
/// `unit` is the label found on the record; when it is blank the record's own
/// `unit` key is consulted before falling back to the heuristic. Never fails:
/// an unparseable price simply yields `value: None`.
pub fn normalize_to_per_kg(
    price: &Value,
    unit: &str,
    record: Option<&RawMarketRecord>,
) -> PerKg {
    match parse_numeric(price) {
        Some(p) => per_kg(p, &effective_unit(unit, record)),
        None => PerKg::default(),
    }
}

pub(crate) fn effective_unit(unit: &str, record: Option<&RawMarketRecord>) -> String {
    if !unit.is_empty() {
        return unit.to_lowercase();
    }
    record
        .and_then(|r| r.get("unit"))
        .and_then(value_text)
        .unwrap_or_default()
        .to_lowercase()
}

/// Apply the unit rules to an already-parsed price. `unit` must be lower-case.
pub fn per_kg(price: f64, unit: &str) -> PerKg {
    let out = if unit.contains("kg") {
        if HUNDRED_KG.is_match(unit) {
            PerKg::exact(price / KG_PER_QUINTAL)
        } else {
            PerKg::exact(price)
        }
    } else if unit.contains("quintal") || unit.contains("qtl") {
        PerKg::exact(price / KG_PER_QUINTAL)
    } else if ["ton", "tne", "metric ton", "mt"]
        .iter()
        .any(|t| unit.contains(t))
    {
        PerKg::exact(price / KG_PER_TONNE)
    } else if ["/100kg", "per 100kg", "per100kg"]
        .iter()
        .any(|t| unit.contains(t))
    {
        PerKg::exact(price / KG_PER_QUINTAL)
    } else if unit.trim().is_empty() {
        if price > UNITLESS_QUINTAL_THRESHOLD {
            PerKg::guessed(price / KG_PER_QUINTAL)
        } else {
            PerKg::exact(price)
        }
    } else {
        // unknown label, take the number at face value
        PerKg::exact(price)
    };
    trace!(price, unit, value = ?out.value, approximate = out.approximate, "per_kg");
    out
}
