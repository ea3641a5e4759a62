use std::collections::BTreeMap;

/// The inputs of the appointment form, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ClientName,
    Email,
    CountryCode,
    Phone,
    Date,
    Time,
    Service,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::ClientName,
        Field::Email,
        Field::CountryCode,
        Field::Phone,
        Field::Date,
        Field::Time,
        Field::Service,
    ];

    fn required_message(&self) -> &'static str {
        match self {
            Field::ClientName => "Name is required",
            Field::Email => "Email is required",
            Field::CountryCode => "Country code required",
            Field::Phone => "Phone is required",
            Field::Date => "Date is required",
            Field::Time => "Time is required",
            Field::Service => "Service is required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{}", .0.required_message())]
    MissingField(Field),
    #[error("Invalid email")]
    MalformedEmail,
    #[error("Invalid code")]
    MalformedCountryCode,
    #[error("Enter 10 digit number")]
    MalformedPhone,
    // The submitted time or service is not part of the offered catalog.
    #[error("Select one of the offered options")]
    UnknownOption(Field),
}

/// Per-field validation failures. A request is valid iff this is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// The human readable message for `field`, or an empty string if it passed.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    /// Records the outcome of a single field predicate.
    pub(crate) fn check<T>(&mut self, field: Field, outcome: Result<T, FieldError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.insert(field, e);
                None
            }
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.values().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
