use crate::domain::{Field, FieldError};

#[derive(Debug, Clone)]
pub struct ClientName(String);

impl ClientName {
    /// Returns an instance of `ClientName` if the input has at least one non-whitespace character.
    pub fn parse(s: String) -> Result<ClientName, FieldError> {
        if s.trim().is_empty() {
            return Err(FieldError::MissingField(Field::ClientName));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
