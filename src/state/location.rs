#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationState {
    pub state_name: Option<String>,
    pub district_name: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LocationAction {
    /// Changing (or clearing) the state drops the selected district.
    SetStateName(Option<String>),
    SetDistrictName(Option<String>),
}

pub fn reduce(state: LocationState, action: LocationAction) -> LocationState {
    match action {
        LocationAction::SetStateName(name) => {
            let district_name = if name.is_some() && name == state.state_name {
                state.district_name
            } else {
                None
            };
            LocationState {
                state_name: name,
                district_name,
            }
        }
        LocationAction::SetDistrictName(district_name) => LocationState {
            district_name,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked(state: &str, district: &str) -> LocationState {
        LocationState {
            state_name: Some(state.into()),
            district_name: Some(district.into()),
        }
    }

    #[test]
    fn new_state_clears_district() {
        let s = reduce(
            picked("Maharashtra", "Pune"),
            LocationAction::SetStateName(Some("Karnataka".into())),
        );
        assert_eq!(s.state_name.as_deref(), Some("Karnataka"));
        assert_eq!(s.district_name, None);
    }

    #[test]
    fn clearing_state_clears_district() {
        let s = reduce(picked("Maharashtra", "Pune"), LocationAction::SetStateName(None));
        assert_eq!(s, LocationState::default());
    }

    #[test]
    fn same_state_keeps_district() {
        let s = reduce(
            picked("Maharashtra", "Pune"),
            LocationAction::SetStateName(Some("Maharashtra".into())),
        );
        assert_eq!(s.district_name.as_deref(), Some("Pune"));
    }

    #[test]
    fn set_district() {
        let s = reduce(
            picked("Maharashtra", "Pune"),
            LocationAction::SetDistrictName(Some("Nashik".into())),
        );
        assert_eq!(s, picked("Maharashtra", "Nashik"));
    }
}
