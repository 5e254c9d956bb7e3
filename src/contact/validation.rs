use regex::Regex;
use thiserror::Error;

/// Minimum accepted length for a contact name.
pub const MIN_NAME_LEN: usize = 3;
/// Minimum accepted length for a phone number.
pub const MIN_NUMBER_LEN: usize = 8;

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("name is missing")]
    NameMissing,
    #[error("name must be at least {MIN_NAME_LEN} characters long")]
    NameTooShort,
    #[error("number is missing")]
    NumberMissing,
    #[error("number must be at least {MIN_NUMBER_LEN} characters long")]
    NumberTooShort,
    #[error("number must start with 2-3 digits followed by a hyphen and more digits")]
    NumberMalformed,
}

/// The full set of rules a candidate record violated.
///
/// Collected rather than short-circuited so a client fixing its input sees
/// every problem at once. The `Display` form joins the individual rule
/// messages with `; ` and is what ends up in the HTTP error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Checks a candidate `{name, number}` pair against the record rules.
///
/// Pure and synchronous; both storage backends call this before persisting.
/// Name uniqueness is not checked here (it needs store state) and surfaces
/// separately as `StoreError::DuplicateName`.
///
/// The number must begin with a 2-3 digit prefix, a hyphen, and at least one
/// more digit. Only the start of the string is anchored, so numbers with
/// further hyphen groups like `39-23-6423122` are accepted.
pub fn validate(name: &str, number: &str) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if name.is_empty() {
        violations.push(Violation::NameMissing);
    } else if name.chars().count() < MIN_NAME_LEN {
        violations.push(Violation::NameTooShort);
    }

    if number.is_empty() {
        violations.push(Violation::NumberMissing);
    } else {
        if number.chars().count() < MIN_NUMBER_LEN {
            violations.push(Violation::NumberTooShort);
        }
        let re = Regex::new(r"^\d{2,3}-\d+").unwrap();
        if !re.is_match(number) {
            violations.push(Violation::NumberMalformed);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}
