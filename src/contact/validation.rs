use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

const PHONE_SEPARATORS: [char; 4] = ['-', '(', ')', '+'];
const PHONE_MIN_DIGITS: usize = 10;

/// The required contact fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// Matches both the `name` attribute and the element id in the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your full name")]
    NameRequired,
    #[error("Please enter your email address")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter your phone number")]
    PhoneRequired,
    #[error("Please enter a valid phone number (minimum 10 digits)")]
    PhoneInvalid,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameRequired => Field::Name,
            ValidationError::EmailRequired | ValidationError::EmailInvalid => Field::Email,
            ValidationError::PhoneRequired | ValidationError::PhoneInvalid => Field::Phone,
        }
    }

    /// Short machine-readable reason, used in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name required",
            ValidationError::EmailRequired => "email required",
            ValidationError::EmailInvalid => "email invalid",
            ValidationError::PhoneRequired => "phone required",
            ValidationError::PhoneInvalid => "phone invalid",
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Field values captured from the contact form for one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormInput {
    fields: BTreeMap<String, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    #[cfg(test)]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn present(&self, field: Field) -> Option<&str> {
        self.get(field.as_str())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut input = FormInput::new();
        for (name, value) in iter {
            input.set(name, value);
        }
        input
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !PHONE_SEPARATORS.contains(c))
        .collect();
    digits.chars().count() >= PHONE_MIN_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
}

/// Checks the required fields in priority order and reports the first failure.
pub fn validate(input: &FormInput) -> ValidationResult {
    if input.present(Field::Name).is_none() {
        return Err(ValidationError::NameRequired);
    }

    let email = input
        .present(Field::Email)
        .ok_or(ValidationError::EmailRequired)?;
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }

    // Separators are stripped from the raw value, so untrimmed spaces are fine
    let phone = input.get(Field::Phone.as_str()).unwrap_or_default();
    if phone.trim().is_empty() {
        return Err(ValidationError::PhoneRequired);
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::PhoneInvalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(name: &str, email: &str, phone: &str) -> FormInput {
        FormInput::new()
            .with("name", name)
            .with("email", email)
            .with("phone", phone)
    }

    mod scenarios {
        use super::*;

        #[test]
        fn test_complete_input_is_valid() {
            let result = validate(&input("Jane Doe", "jane@example.com", "(555) 123-4567"));
            assert_eq!(result, Ok(()));
        }

        #[test]
        fn test_empty_name_is_rejected() {
            let result = validate(&input("", "jane@example.com", "5551234567"));
            assert_eq!(result, Err(ValidationError::NameRequired));
            assert_eq!(result.unwrap_err().field(), Field::Name);
        }

        #[test]
        fn test_malformed_email_is_rejected() {
            let result = validate(&input("Jane", "not-an-email", "5551234567"));
            assert_eq!(result, Err(ValidationError::EmailInvalid));
        }

        #[test]
        fn test_short_phone_is_rejected() {
            let result = validate(&input("Jane", "jane@example.com", "12345"));
            assert_eq!(result, Err(ValidationError::PhoneInvalid));
            assert_eq!(result.unwrap_err().field(), Field::Phone);
        }

        #[test]
        fn test_extra_fields_are_ignored() {
            let form = input("Jane", "jane@example.com", "+1 555 123 4567")
                .with("service", "")
                .with("message", "hello");
            assert_eq!(validate(&form), Ok(()));
        }
    }

    mod priority {
        use super::*;

        #[test]
        fn test_missing_fields_report_name_first() {
            assert_eq!(validate(&FormInput::new()), Err(ValidationError::NameRequired));
        }

        #[test]
        fn test_empty_name_and_email_flags_name() {
            let result = validate(&input("  ", "", ""));
            assert_eq!(result, Err(ValidationError::NameRequired));
        }

        #[test]
        fn test_missing_email_before_phone() {
            let form = FormInput::new().with("name", "Jane").with("phone", "x");
            assert_eq!(validate(&form), Err(ValidationError::EmailRequired));
        }

        #[test]
        fn test_bad_email_reported_before_missing_phone() {
            let result = validate(&input("Jane", "jane@", ""));
            assert_eq!(result, Err(ValidationError::EmailInvalid));
        }

        #[test]
        fn test_whitespace_phone_is_required_not_invalid() {
            let result = validate(&input("Jane", "jane@example.com", " \t "));
            assert_eq!(result, Err(ValidationError::PhoneRequired));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_plain_shape() {
            assert!(is_valid_email("a@b.c"));
            assert!(is_valid_email("first.last@mail.example.org"));
        }

        #[test]
        fn test_rejects_missing_parts() {
            assert!(!is_valid_email("jane.example.com"));
            assert!(!is_valid_email("jane@example"));
            assert!(!is_valid_email("@example.com"));
            assert!(!is_valid_email("jane@.com"));
            assert!(!is_valid_email("jane@example."));
        }

        #[test]
        fn test_rejects_inner_whitespace_and_double_at() {
            assert!(!is_valid_email("ja ne@example.com"));
            assert!(!is_valid_email("jane@@example.com"));
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed_before_matching() {
            let result = validate(&input("Jane", "  jane@example.com  ", "5551234567"));
            assert_eq!(result, Ok(()));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_separators_are_stripped() {
            assert!(is_valid_phone("+1 (555) 123-4567"));
            assert!(is_valid_phone("555-123-4567"));
        }

        #[test]
        fn test_any_whitespace_is_a_separator() {
            assert!(is_valid_phone("555\t123\t4567"));
            assert!(is_valid_phone("555\u{a0}123\u{a0}4567"));
            assert!(is_valid_phone("555\n123 4567"));
            let result = validate(&input("Jane", "jane@example.com", "(555)\t123-4567"));
            assert_eq!(result, Ok(()));
        }

        #[test]
        fn test_letters_are_rejected() {
            assert!(!is_valid_phone("555-123-456a"));
            assert!(!is_valid_phone("555.123.4567"));
        }

        #[test]
        fn test_nine_digits_is_too_short() {
            assert!(!is_valid_phone("555 123 456"));
            assert!(is_valid_phone("5551234567"));
        }
    }

    mod field_names {
        use super::*;

        #[test]
        fn test_errors_map_to_form_ids() {
            assert_eq!(ValidationError::EmailInvalid.field().as_str(), "email");
            assert_eq!(ValidationError::PhoneRequired.field().to_string(), "phone");
            assert_eq!(ValidationError::NameRequired.reason(), "name required");
        }

        #[test]
        fn test_payload_serializes_as_flat_object() {
            let form = input("Jane", "jane@example.com", "5551234567");
            let json = serde_json::to_value(&form).unwrap();
            assert_eq!(json["email"], "jane@example.com");
            assert_eq!(json.as_object().unwrap().len(), 3);
        }
    }

    proptest! {
        #[test]
        fn prop_blank_name_always_flags_name(
            blank in "[ \t]{0,4}",
            email in ".*",
            phone in ".*",
        ) {
            prop_assert_eq!(
                validate(&input(&blank, &email, &phone)),
                Err(ValidationError::NameRequired)
            );
        }

        #[test]
        fn prop_email_without_at_is_invalid(local in "[a-z0-9.]{1,12}") {
            let result = validate(&input("Jane", &local, "5551234567"));
            prop_assert_eq!(result.unwrap_err().field(), Field::Email);
        }

        #[test]
        fn prop_email_without_dot_in_domain_is_invalid(
            local in "[a-z0-9]{1,8}",
            domain in "[a-z0-9]{1,8}",
        ) {
            let email = format!("{local}@{domain}");
            prop_assert_eq!(
                validate(&input("Jane", &email, "5551234567")),
                Err(ValidationError::EmailInvalid)
            );
        }

        #[test]
        fn prop_email_with_inner_whitespace_is_invalid(
            left in "[a-z]{1,6}",
            right in "[a-z]{1,6}",
        ) {
            let email = format!("{left} {right}@example.com");
            prop_assert_eq!(
                validate(&input("Jane", &email, "5551234567")),
                Err(ValidationError::EmailInvalid)
            );
        }

        #[test]
        fn prop_short_phone_is_invalid(digits in "[0-9]{1,9}") {
            prop_assert_eq!(
                validate(&input("Jane", "jane@example.com", &digits)),
                Err(ValidationError::PhoneInvalid)
            );
        }

        #[test]
        fn prop_phone_with_letter_is_invalid(
            digits in "[0-9]{10,14}",
            letter in "[a-zA-Z]",
        ) {
            let phone = format!("{digits}{letter}");
            prop_assert_eq!(
                validate(&input("Jane", "jane@example.com", &phone)),
                Err(ValidationError::PhoneInvalid)
            );
        }

        #[test]
        fn prop_validate_is_idempotent(
            name in ".{0,10}",
            email in ".{0,20}",
            phone in ".{0,16}",
        ) {
            let form = input(&name, &email, &phone);
            prop_assert_eq!(validate(&form), validate(&form));
        }
    }
}
