use crate::domain::{
    AppointmentDate, BookingCatalog, ClientEmail, ClientName, CountryCode, Field, FieldError,
    PhoneNumber, TimeSlot, ValidationErrors,
};

/// The raw contents of the appointment form. Absent inputs deserialize to
/// empty strings and fail their "required" check.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct AppointmentRequest {
    pub client_name: String,
    pub email: String,
    pub country_code: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
}

/// An appointment request whose every field passed its predicate.
#[derive(Debug, Clone)]
pub struct ValidatedAppointment {
    pub client_name: ClientName,
    pub email: ClientEmail,
    pub country_code: CountryCode,
    pub phone: PhoneNumber,
    pub date: AppointmentDate,
    pub time: TimeSlot,
    pub service: String,
}

impl AppointmentRequest {
    /// A blank form, with the country code pre-filled.
    pub fn empty(default_country_code: &str) -> Self {
        Self {
            country_code: default_country_code.to_string(),
            ..Self::default()
        }
    }

    /// Applies every field predicate and reports each failure.
    pub fn validate(&self, catalog: &BookingCatalog) -> ValidationErrors {
        self.clone().parse(catalog).err().unwrap_or_default()
    }

    pub fn parse(self, catalog: &BookingCatalog) -> Result<ValidatedAppointment, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let client_name = errors.check(Field::ClientName, ClientName::parse(self.client_name));
        let email = errors.check(Field::Email, ClientEmail::parse(self.email));
        let country_code = errors.check(Field::CountryCode, CountryCode::parse(self.country_code));
        let phone = errors.check(Field::Phone, PhoneNumber::parse(self.phone));
        let date = errors.check(Field::Date, AppointmentDate::parse(&self.date));
        let time = errors.check(Field::Time, pick(Field::Time, &self.time, |t| {
            catalog.find_slot(t).cloned()
        }));
        let service = errors.check(Field::Service, pick(Field::Service, &self.service, |s| {
            catalog.find_service(s).map(str::to_string)
        }));

        match (client_name, email, country_code, phone, date, time, service) {
            (
                Some(client_name),
                Some(email),
                Some(country_code),
                Some(phone),
                Some(date),
                Some(time),
                Some(service),
            ) => Ok(ValidatedAppointment {
                client_name,
                email,
                country_code,
                phone,
                date,
                time,
                service,
            }),
            _ => Err(errors),
        }
    }
}

/// A selection from one of the catalogs: required, and must be on offer.
fn pick<T>(
    field: Field,
    value: &str,
    lookup: impl FnOnce(&str) -> Option<T>,
) -> Result<T, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MissingField(field));
    }
    lookup(value).ok_or(FieldError::UnknownOption(field))
}

impl ValidatedAppointment {
    /// Country code and number, as shown to the practice.
    pub fn full_phone(&self) -> String {
        format!("{} {}", self.country_code.as_ref(), self.phone.as_ref())
    }
}
