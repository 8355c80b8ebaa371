//! Application state as plain values plus pure reducers.
//!
//! Each slice owns its state type, an action enum and a `reduce` function.
//! `AppState::dispatch` routes an `Action` to the right slice.

pub mod language;
pub mod location;
pub mod market;

pub use language::{Language, LanguageAction, LanguageState};
pub use location::{LocationAction, LocationState};
pub use market::{MarketAction, MarketState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub language: LanguageState,
    pub location: LocationState,
    pub market: MarketState,
}

#[derive(Debug, Clone)]
pub enum Action {
    Language(LanguageAction),
    Location(LocationAction),
    Market(MarketAction),
}

impl From<LanguageAction> for Action {
    fn from(a: LanguageAction) -> Self {
        Action::Language(a)
    }
}

impl From<LocationAction> for Action {
    fn from(a: LocationAction) -> Self {
        Action::Location(a)
    }
}

impl From<MarketAction> for Action {
    fn from(a: MarketAction) -> Self {
        Action::Market(a)
    }
}

pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::Language(a) => AppState {
            language: language::reduce(state.language, a),
            ..state
        },
        Action::Location(a) => AppState {
            location: location::reduce(state.location, a),
            ..state
        },
        Action::Market(a) => AppState {
            market: market::reduce(state.market, a),
            ..state
        },
    }
}

impl AppState {
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let current = std::mem::take(self);
        *self = reduce(current, action.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_touches_only_its_slice() {
        let mut app = AppState::default();
        app.dispatch(LocationAction::SetStateName(Some("Kerala".into())));
        app.dispatch(MarketAction::SetLoading(true));
        app.dispatch(LanguageAction::SetLanguage(Language::Ta));

        assert_eq!(app.location.state_name.as_deref(), Some("Kerala"));
        assert!(app.market.loading);
        assert_eq!(app.language.current, Language::Ta);
    }
}
