use chrono::NaiveDate;

use crate::domain::{Field, FieldError};

/// Value produced by the HTML date picker.
const ISO_FORMAT: &str = "%Y-%m-%d";
/// Typed and displayed form, e.g. `25 Jun 2025`.
const DISPLAY_FORMAT: &str = "%d %b %Y";
/// en-GB locale date string used in the email payload.
const PAYLOAD_FORMAT: &str = "%d/%m/%Y";

/// The calendar day an appointment is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AppointmentDate(NaiveDate);

impl AppointmentDate {
    /// Accepts either the ISO picker value or the display format. Anything else
    /// is treated as if no date had been chosen.
    pub fn parse(s: &str) -> Result<AppointmentDate, FieldError> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(s, DISPLAY_FORMAT))
            .map(Self)
            .map_err(|_| FieldError::MissingField(Field::Date))
    }

    pub fn day(&self) -> NaiveDate {
        self.0
    }

    pub fn to_display_string(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }

    pub fn to_payload_string(&self) -> String {
        self.0.format(PAYLOAD_FORMAT).to_string()
    }
}

impl From<NaiveDate> for AppointmentDate {
    fn from(day: NaiveDate) -> Self {
        Self(day)
    }
}
