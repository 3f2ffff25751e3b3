//! Validation and normalization of waitlist email addresses
//!
//! The accepted shape is deliberately loose: `local@domain.tld` with no whitespace
//! and exactly one `@`. No RFC 5322 parsing.

/// Email validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Email is missing, empty, or has no `@`
    MissingEmail,
    /// Email does not look like `local@domain.tld`
    InvalidFormat,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingEmail => write!(f, "Valid email is required"),
            ValidationError::InvalidFormat => write!(f, "Invalid email format"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Whitespace as the landing page's form handling understands it: the Unicode
/// `White_Space` set without U+0085, plus the byte-order mark U+FEFF.
pub fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Check an email against `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email_format(email: &str) -> bool {
    if email.chars().any(is_form_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Needs a '.' with at least one character on each side within the domain
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Lower-case and trim an email for storage and uniqueness comparison
pub fn normalize_email(email: &str) -> String {
    email.trim_matches(is_form_whitespace).to_lowercase()
}

/// Validate a submitted email and return its normalized form.
///
/// The format check runs on the trimmed input; surrounding whitespace is dropped by
/// normalization anyway.
pub fn validate_email(email: Option<&str>) -> Result<String, ValidationError> {
    let email = match email {
        Some(e) if !e.is_empty() && e.contains('@') => e,
        _ => return Err(ValidationError::MissingEmail),
    };

    if !is_valid_email_format(email.trim_matches(is_form_whitespace)) {
        return Err(ValidationError::InvalidFormat);
    }

    Ok(normalize_email(email))
}

/// Treat empty optional text as absent
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
