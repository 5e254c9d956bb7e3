//! Contact Validation Tests
//!
//! Validates the pure record rules shared by both storage backends.
//!
//! ## Test Scopes
//! - **Name rules**: presence and minimum length.
//! - **Number rules**: presence, minimum length, and the digit-hyphen-digit
//!   prefix pattern.
//! - **Aggregation**: multiple violations are reported together.

#[cfg(test)]
mod tests {
    use crate::contact::validation::{validate, Violation};

    #[test]
    fn test_valid_contact_passes() {
        assert!(validate("Arto Hellas", "040-123456").is_ok());
    }

    #[test]
    fn test_number_with_extra_hyphen_groups_passes() {
        // Only the prefix is anchored, so multi-part numbers are fine.
        assert!(validate("Mary Poppendieck", "39-23-6423122").is_ok());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let err = validate("", "040-123456").unwrap_err();
        assert_eq!(err.violations, vec![Violation::NameMissing]);
    }

    #[test]
    fn test_short_name_is_rejected() {
        let err = validate("Al", "040-123456").unwrap_err();
        assert_eq!(err.violations, vec![Violation::NameTooShort]);
    }

    #[test]
    fn test_missing_number_is_rejected() {
        let err = validate("Arto Hellas", "").unwrap_err();
        assert_eq!(err.violations, vec![Violation::NumberMissing]);
    }

    #[test]
    fn test_short_number_is_rejected() {
        // "12-4567" is 7 characters: too short, but the pattern itself is fine.
        let err = validate("Arto Hellas", "12-4567").unwrap_err();
        assert_eq!(err.violations, vec![Violation::NumberTooShort]);
    }

    #[test]
    fn test_number_without_hyphen_is_rejected() {
        let err = validate("Arto Hellas", "0401234567").unwrap_err();
        assert_eq!(err.violations, vec![Violation::NumberMalformed]);
    }

    #[test]
    fn test_number_with_long_prefix_is_rejected() {
        // Four digits before the hyphen exceed the 2-3 digit prefix.
        let err = validate("Arto Hellas", "0401-234567").unwrap_err();
        assert_eq!(err.violations, vec![Violation::NumberMalformed]);
    }

    #[test]
    fn test_number_with_short_prefix_is_rejected() {
        let err = validate("Arto Hellas", "4-01234567").unwrap_err();
        assert_eq!(err.violations, vec![Violation::NumberMalformed]);
    }

    #[test]
    fn test_multiple_violations_are_collected() {
        let err = validate("Al", "123").unwrap_err();
        assert!(err.violations.contains(&Violation::NameTooShort));
        assert!(err.violations.contains(&Violation::NumberTooShort));
        assert!(err.violations.contains(&Violation::NumberMalformed));
        assert_eq!(err.violations.len(), 3, "should report every broken rule");
    }

    #[test]
    fn test_error_message_joins_rule_messages() {
        let err = validate("Al", "040-123456").unwrap_err();
        assert_eq!(err.to_string(), "name must be at least 3 characters long");

        let err = validate("Al", "123").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("; "), "messages should be joined: {}", message);
        assert!(message.contains("number"), "should mention the number: {}", message);
    }
}
