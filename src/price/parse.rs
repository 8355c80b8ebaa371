use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("number pattern should compile"));

/// Pull a number out of whatever the API handed us.
///
/// - JSON numbers come back unchanged.
/// - Strings lose their thousands separators, then the first signed decimal wins
///   (`"Rs. 1,234.5 / qtl"` → `1234.5`).
/// - Anything else (null, bools, arrays, objects, text without digits) is `None`.
pub fn parse_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        _ => None,
    }
}

pub fn parse_numeric_str(s: &str) -> Option<f64> {
    let cleaned = s.replace(',', "");
    NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
