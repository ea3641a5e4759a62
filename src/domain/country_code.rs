use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{Field, FieldError};

static COUNTRY_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{1,4}$").expect("country code pattern is a valid regex"));

/// An international dialling prefix such as `+91`.
#[derive(Debug, Clone)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(s: String) -> Result<CountryCode, FieldError> {
        if s.trim().is_empty() {
            return Err(FieldError::MissingField(Field::CountryCode));
        }
        // `\d` is unicode aware, so the ASCII check is kept explicit.
        if !COUNTRY_CODE_PATTERN.is_match(&s) || !s[1..].bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::MalformedCountryCode);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
