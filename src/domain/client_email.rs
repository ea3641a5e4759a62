use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{Field, FieldError};

// Format sanity check only: local part, `@`, a dotted domain. Not RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex"));

#[derive(Debug, Clone)]
pub struct ClientEmail(String);

impl ClientEmail {
    pub fn parse(s: String) -> Result<ClientEmail, FieldError> {
        if s.trim().is_empty() {
            return Err(FieldError::MissingField(Field::Email));
        }
        if !EMAIL_PATTERN.is_match(&s) {
            return Err(FieldError::MalformedEmail);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ClientEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
