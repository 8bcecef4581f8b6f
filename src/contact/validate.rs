//! Contact form validation
//!
//! Every rule is evaluated so the visitor sees all problems at once.
//! Invalid input is a normal outcome, reported through [`ValidationResult`].

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

pub const NAME_ERROR: &str = "Name is required (minimum 2 characters)";
pub const EMAIL_ERROR: &str = "Valid email is required";
pub const PHONE_ERROR: &str = "Valid WhatsApp number is required (10-15 digits)";
pub const MESSAGE_ERROR: &str = "Message is required (minimum 10 characters)";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;

/// Raw contact form fields as posted; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub message: Option<String>,
}

/// Outcome of checking a form against the field rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

fn has_min_chars(value: Option<&str>, min: usize) -> bool {
    value.is_some_and(|v| v.trim().chars().count() >= min)
}

fn is_valid_email(value: Option<&str>) -> bool {
    value.is_some_and(|v| email_pattern().is_match(v))
}

/// Digit count after stripping `+`, `-` and whitespace must fall in 10..=15.
///
/// Not a real international number check, only a shape check.
fn is_valid_phone(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let stripped: Vec<char> = v
            .chars()
            .filter(|c| !matches!(c, '+' | '-') && !c.is_whitespace())
            .collect();
        PHONE_DIGITS.contains(&stripped.len()) && stripped.iter().all(char::is_ascii_digit)
    })
}

/// Check every field and collect the errors in rule order
pub fn validate(form: &ContactForm) -> ValidationResult {
    let mut errors = Vec::new();

    if !has_min_chars(form.name.as_deref(), MIN_NAME_CHARS) {
        errors.push(NAME_ERROR.to_string());
    }
    if !is_valid_email(form.email.as_deref()) {
        errors.push(EMAIL_ERROR.to_string());
    }
    if !is_valid_phone(form.whatsapp.as_deref()) {
        errors.push(PHONE_ERROR.to_string());
    }
    if !has_min_chars(form.message.as_deref(), MIN_MESSAGE_CHARS) {
        errors.push(MESSAGE_ERROR.to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, whatsapp: &str, message: &str) -> ContactForm {
        ContactForm {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            whatsapp: Some(whatsapp.to_string()),
            message: Some(message.to_string()),
        }
    }

    fn valid_form() -> ContactForm {
        form(
            "John Doe",
            "john@example.com",
            "+919876543210",
            "I am interested in the bootcamp!",
        )
    }

    #[test]
    fn test_valid_submission() {
        let result = validate(&valid_form());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_short_or_missing_name() {
        for name in [None, Some(""), Some("J"), Some("   J   ")] {
            let mut f = valid_form();
            f.name = name.map(str::to_string);
            let result = validate(&f);
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec![NAME_ERROR.to_string()]);
        }
    }

    #[test]
    fn test_invalid_email() {
        for email in ["not-an-email", "john@", "@example.com", "john@example", "jo hn@example.com"] {
            let mut f = valid_form();
            f.email = Some(email.to_string());
            let result = validate(&f);
            assert!(!result.is_valid, "{email} should be rejected");
            assert_eq!(result.errors, vec![EMAIL_ERROR.to_string()]);
        }
    }

    #[test]
    fn test_phone_digit_count() {
        for phone in ["123", "123456789", "1234567890123456", "+91 98765-abc10"] {
            let mut f = valid_form();
            f.whatsapp = Some(phone.to_string());
            let result = validate(&f);
            assert!(!result.is_valid, "{phone} should be rejected");
            assert_eq!(result.errors, vec![PHONE_ERROR.to_string()]);
        }
        for phone in ["9876543210", "+91 98765-43210", "123456789012345"] {
            let mut f = valid_form();
            f.whatsapp = Some(phone.to_string());
            assert!(validate(&f).is_valid, "{phone} should be accepted");
        }
    }

    #[test]
    fn test_short_message() {
        let mut f = valid_form();
        f.message = Some("Hi".to_string());
        let result = validate(&f);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![MESSAGE_ERROR.to_string()]);
    }

    #[test]
    fn test_message_is_trimmed_before_counting() {
        let mut f = valid_form();
        f.message = Some("     short     ".to_string());
        assert_eq!(validate(&f).errors, vec![MESSAGE_ERROR.to_string()]);
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        let mut f = valid_form();
        f.name = Some("ర".to_string());
        assert_eq!(validate(&f).errors, vec![NAME_ERROR.to_string()]);
    }

    #[test]
    fn test_collects_every_error_in_order() {
        let result = validate(&form("", "invalid", "123", "short"));
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![NAME_ERROR, EMAIL_ERROR, PHONE_ERROR, MESSAGE_ERROR]
        );
    }

    #[test]
    fn test_empty_form() {
        let result = validate(&ContactForm::default());
        assert_eq!(result.errors.len(), 4);
    }
}
