use std::cell::RefCell;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::kernel::services::ports::{ElementSnapshot, ValidationBackend, Validity, ValidityState};
use crate::models::grapheme_len;

/// Built-in stand-in for a hidden native input: `required`, `minlength`,
/// `maxlength` and `pattern` constraints, plus custom validity.
#[derive(Debug, Default)]
pub struct ConstraintValidator {
    patterns: RefCell<FxHashMap<String, Option<Regex>>>,
}

impl ConstraintValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn pattern_matches(&self, pattern: &str, value: &str) -> bool {
        let mut patterns = self.patterns.borrow_mut();
        let compiled = patterns
            .entry(pattern.to_string())
            .or_insert_with(|| match Regex::new(&format!("^(?:{})$", pattern)) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(pattern, error = %e, "ignoring invalid pattern attribute");
                    None
                }
            });
        // An invalid pattern never fails validation.
        compiled.as_ref().map_or(true, |re| re.is_match(value))
    }
}

impl ValidationBackend for ConstraintValidator {
    fn validate(&self, element: &ElementSnapshot, value: &str, custom_message: &str) -> Validity {
        if !self.will_validate(element) {
            return Validity::default();
        }

        let len = grapheme_len(value);
        let mut state = ValidityState::default();
        let mut message = String::new();

        if !custom_message.is_empty() {
            state.custom_error = true;
            message = custom_message.to_string();
        }

        if value.is_empty() {
            if element.has_attr("required") {
                state.value_missing = true;
                if message.is_empty() {
                    message = "Please fill out this field.".to_string();
                }
            }
            return Validity { state, message };
        }

        if let Some(max) = element.usize_attr("maxlength") {
            if len > max {
                state.too_long = true;
                if message.is_empty() {
                    message = format!(
                        "Please shorten this text to {} characters or less (you are currently using {} characters).",
                        max, len
                    );
                }
            }
        }

        if let Some(min) = element.usize_attr("minlength") {
            if len < min {
                state.too_short = true;
                if message.is_empty() {
                    message = format!(
                        "Please lengthen this text to {} characters or more (you are currently using {} characters).",
                        min, len
                    );
                }
            }
        }

        if let Some(pattern) = element.attr("pattern") {
            if !self.pattern_matches(pattern, value) {
                state.pattern_mismatch = true;
                if message.is_empty() {
                    message = "Please match the requested format.".to_string();
                }
            }
        }

        Validity { state, message }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/validation.rs"]
mod tests;
