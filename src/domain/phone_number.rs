use crate::domain::{Field, FieldError};

const PHONE_DIGITS: usize = 10;

/// A national phone number: exactly ten ASCII digits, no separators.
#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(s: String) -> Result<PhoneNumber, FieldError> {
        if s.trim().is_empty() {
            return Err(FieldError::MissingField(Field::Phone));
        }
        if s.len() != PHONE_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::MalformedPhone);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
