use super::element::ElementSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidityState {
    pub value_missing: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub pattern_mismatch: bool,
    pub custom_error: bool,
}

impl ValidityState {
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.too_long
            || self.too_short
            || self.pattern_mismatch
            || self.custom_error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validity {
    pub state: ValidityState,
    pub message: String,
}

/// Constraint validation, delegated to something that behaves like a real input
/// carrying `element`'s attributes and `value`.
pub trait ValidationBackend {
    fn validate(&self, element: &ElementSnapshot, value: &str, custom_message: &str) -> Validity;

    fn will_validate(&self, element: &ElementSnapshot) -> bool {
        !(element.has_attr("disabled") || element.has_attr("readonly"))
    }
}
