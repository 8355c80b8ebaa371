use std::cmp::Ordering;

use super::NormalizedPriceEntry;

/// Highest per-kg price first. Entries without a price sink to the bottom.
/// The sort is stable, so ties (including all the `None`s) keep input order.
pub fn rank_by_price(mut entries: Vec<NormalizedPriceEntry>) -> Vec<NormalizedPriceEntry> {
    entries.sort_by(|a, b| by_price_desc(a.price_per_kg, b.price_per_kg));
    entries
}

fn by_price_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
