pub mod config;
pub mod fetch;
pub mod price;
pub mod state;

pub use config::Config;
pub use price::{
    build_normalized_entry, normalize_batch, normalize_to_per_kg, parse_numeric, rank_by_price,
    NormalizedPriceEntry, PerKg, RawMarketRecord,
};
