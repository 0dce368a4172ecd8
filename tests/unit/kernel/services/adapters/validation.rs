use super::*;

fn input() -> ElementSnapshot {
    ElementSnapshot::text_input(1)
}

#[test]
fn test_unconstrained_value_is_valid() {
    let validity = ConstraintValidator::new().validate(&input(), "anything", "");
    assert!(validity.state.valid());
    assert!(validity.message.is_empty());
}

#[test]
fn test_required_empty_value_missing() {
    let element = input().with_attr("required", "");
    let validator = ConstraintValidator::new();

    let validity = validator.validate(&element, "", "");
    assert!(validity.state.value_missing);
    assert_eq!(validity.message, "Please fill out this field.");

    assert!(validator.validate(&element, "x", "").state.valid());
}

#[test]
fn test_length_constraints_count_graphemes() {
    let element = input().with_attr("minlength", "3").with_attr("maxlength", "4");
    let validator = ConstraintValidator::new();

    assert!(validator.validate(&element, "ab", "").state.too_short);
    assert!(validator.validate(&element, "e\u{301}e\u{301}e\u{301}", "").state.valid());
    assert!(validator.validate(&element, "abcde", "").state.too_long);
    // empty values are not subject to length checks
    assert!(validator.validate(&element, "", "").state.valid());
}

#[test]
fn test_pattern_is_anchored() {
    let element = input().with_attr("pattern", "[0-9]+");
    let validator = ConstraintValidator::new();

    assert!(validator.validate(&element, "123", "").state.valid());
    let validity = validator.validate(&element, "12a", "");
    assert!(validity.state.pattern_mismatch);
    assert_eq!(validity.message, "Please match the requested format.");
}

#[test]
fn test_invalid_pattern_is_ignored() {
    let element = input().with_attr("pattern", "([");
    assert!(ConstraintValidator::new()
        .validate(&element, "x", "")
        .state
        .valid());
}

#[test]
fn test_custom_message_wins() {
    let element = input().with_attr("required", "");
    let validity = ConstraintValidator::new().validate(&element, "", "Pick a name");
    assert!(validity.state.custom_error);
    assert!(validity.state.value_missing);
    assert_eq!(validity.message, "Pick a name");
}

#[test]
fn test_disabled_elements_are_barred() {
    let element = input().with_attr("disabled", "").with_attr("required", "");
    let validator = ConstraintValidator::new();
    assert!(!validator.will_validate(&element));
    assert!(validator.validate(&element, "", "").state.valid());
}
