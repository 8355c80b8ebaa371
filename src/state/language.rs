use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageState {
    pub current: Language,
}

#[derive(Debug, Clone)]
pub enum LanguageAction {
    SetLanguage(Language),
}

pub fn reduce(_state: LanguageState, action: LanguageAction) -> LanguageState {
    match action {
        LanguageAction::SetLanguage(current) => LanguageState { current },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        assert_eq!(LanguageState::default().current, Language::En);
        let s = reduce(LanguageState::default(), LanguageAction::SetLanguage(Language::Ta));
        assert_eq!(s.current, Language::Ta);
    }

    #[test]
    fn lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Ta).unwrap(), "\"ta\"");
    }
}
