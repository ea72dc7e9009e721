//! Field validation for profile submissions.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::Profile;

// Permissive local@domain.tld shape. Anything fancier gets rejected by the
// receiving mailbox, not here.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("Invalid email pattern"));

// Optional leading + followed by 10-15 digits.
static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("Invalid contact pattern"));

/// A validation failure tied to the field that caused it.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_contact_number(contact_number: &str) -> bool {
    CONTACT_RE.is_match(contact_number)
}

/// Check every profile field, reporting the first failure. Nothing is
/// submitted on failure; the caller keeps the session in the form state.
pub fn validate(profile: &Profile) -> Result<(), FieldError> {
    if profile.name.trim().is_empty() {
        return Err(FieldError::new("name", "Please enter your name."));
    }
    if !is_valid_email(profile.email.trim()) {
        return Err(FieldError::new("email", "Please enter a valid email address."));
    }
    if !is_valid_contact_number(profile.contact_number.trim()) {
        return Err(FieldError::new(
            "contact_number",
            "Please enter a valid contact number (10-15 digits).",
        ));
    }
    if profile.area_of_interest.trim().is_empty() {
        return Err(FieldError::new(
            "area_of_interest",
            "Please enter your area of interest.",
        ));
    }
    if profile.course.trim().is_empty() {
        return Err(FieldError::new("course", "Please enter a course."));
    }
    if profile.training_mode.trim().is_empty() {
        return Err(FieldError::new(
            "training_mode",
            "Please enter a training mode.",
        ));
    }
    if profile.contact_mode.trim().is_empty() {
        return Err(FieldError::new(
            "contact_mode",
            "Please enter a preferred contact mode.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_profile() -> Profile {
        Profile {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            contact_number: "1234567890".to_string(),
            area_of_interest: "Data Science".to_string(),
            course: "Machine Learning".to_string(),
            training_mode: "Online".to_string(),
            contact_mode: "Email".to_string(),
        }
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_valid_contact_number() {
        assert!(is_valid_contact_number("1234567890"));
        assert!(is_valid_contact_number("+441234567890"));
        assert!(is_valid_contact_number("123456789012345"));
    }

    #[test]
    fn test_invalid_contact_number() {
        assert!(!is_valid_contact_number("12345"));
        assert!(!is_valid_contact_number("1234567890123456"));
        assert!(!is_valid_contact_number("12345abcde"));
        assert!(!is_valid_contact_number("++1234567890"));
    }

    #[test]
    fn test_validate_accepts_valid_profile() {
        assert!(validate(&valid_profile()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut profile = valid_profile();
        profile.name = "   ".to_string();
        let err = validate(&profile).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut profile = valid_profile();
        profile.email = "abc".to_string();
        let err = validate(&profile).unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_validate_rejects_short_contact_number() {
        let mut profile = valid_profile();
        profile.contact_number = "12345".to_string();
        let err = validate(&profile).unwrap_err();
        assert_eq!(err.field, "contact_number");
    }

    #[test]
    fn test_validate_reports_each_free_text_field() {
        for field in ["area_of_interest", "course", "training_mode", "contact_mode"] {
            let mut profile = valid_profile();
            match field {
                "area_of_interest" => profile.area_of_interest = String::new(),
                "course" => profile.course = String::new(),
                "training_mode" => profile.training_mode = String::new(),
                _ => profile.contact_mode = String::new(),
            }
            let err = validate(&profile).unwrap_err();
            assert_eq!(err.field, field);
        }
    }
}
