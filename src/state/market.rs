use chrono::{DateTime, Utc};

use crate::price::{rank_by_price, NormalizedPriceEntry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketState {
    /// Entries from the last fetch, in API order.
    pub prices: Vec<NormalizedPriceEntry>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum MarketAction {
    /// Replaces the whole batch and clears any previous error.
    SetPrices(Vec<NormalizedPriceEntry>),
    SetLoading(bool),
    SetLastUpdated(DateTime<Utc>),
    FetchFailed(String),
}

pub fn reduce(state: MarketState, action: MarketAction) -> MarketState {
    match action {
        MarketAction::SetPrices(prices) => MarketState {
            prices,
            error: None,
            ..state
        },
        MarketAction::SetLoading(loading) => MarketState { loading, ..state },
        MarketAction::SetLastUpdated(ts) => MarketState {
            last_updated: Some(ts),
            ..state
        },
        MarketAction::FetchFailed(msg) => MarketState {
            prices: Vec::new(),
            loading: false,
            last_updated: None,
            error: Some(msg),
        },
    }
}

impl MarketState {
    /// Prices ordered for display, highest per-kg first.
    pub fn ranked(&self) -> Vec<NormalizedPriceEntry> {
        rank_by_price(self.prices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::normalize_batch;
    use serde_json::json;

    fn batch() -> Vec<NormalizedPriceEntry> {
        normalize_batch(
            vec![
                json!({ "commodity": "Potato", "modal_price": "1,500", "unit": "Quintal" }),
                json!({ "commodity": "Cardamom", "modal_price": "1800", "unit": "kg" }),
                json!({ "commodity": "Mystery" }),
            ]
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect(),
        )
    }

    #[test]
    fn set_prices_replaces_wholesale() {
        let s = reduce(
            MarketState {
                error: Some("old".into()),
                ..MarketState::default()
            },
            MarketAction::SetPrices(batch()),
        );
        assert_eq!(s.prices.len(), 3);
        assert_eq!(s.error, None);

        let s = reduce(s, MarketAction::SetPrices(Vec::new()));
        assert!(s.prices.is_empty());
    }

    #[test]
    fn failure_clears_prices() {
        let s = MarketState {
            prices: batch(),
            loading: true,
            last_updated: Some(Utc::now()),
            error: None,
        };
        let s = reduce(s, MarketAction::FetchFailed("HTTP 500".into()));
        assert!(s.prices.is_empty());
        assert!(!s.loading);
        assert_eq!(s.last_updated, None);
        assert_eq!(s.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn ranked_view_leaves_state_order_alone() {
        let s = reduce(MarketState::default(), MarketAction::SetPrices(batch()));
        let ranked: Vec<_> = s
            .ranked()
            .into_iter()
            .map(|e| e.commodity.unwrap())
            .collect();
        assert_eq!(ranked, vec!["Cardamom", "Potato", "Mystery"]);
        assert_eq!(s.prices[0].commodity.as_deref(), Some("Potato"));
    }
}
