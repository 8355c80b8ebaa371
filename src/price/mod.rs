//! Market-price normalization: heterogeneous open-data records in,
//! comparable per-kg prices out.

pub mod entry;
pub mod fields;
pub mod parse;
pub mod rank;
pub mod unit;

pub use entry::{build_normalized_entry, normalize_batch, NormalizedPriceEntry};
pub use parse::parse_numeric;
pub use rank::rank_by_price;
pub use unit::{normalize_to_per_kg, PerKg};

/// A single record as returned by the market-data API. Field names are not fixed.
pub type RawMarketRecord = serde_json::Map<String, serde_json::Value>;
