mod appointment_date;
mod appointment_request;
mod booking_form;
mod catalog;
mod client_email;
mod client_name;
mod country_code;
mod field;
mod phone_number;
mod time_slot;

pub use appointment_date::AppointmentDate;
pub use appointment_request::{AppointmentRequest, ValidatedAppointment};
pub use booking_form::{BookingForm, FormState, Notice, SubmitRejected};
pub use catalog::{BookingCatalog, DEFAULT_SERVICES, DEFAULT_TIME_SLOTS};
pub use client_email::ClientEmail;
pub use client_name::ClientName;
pub use country_code::CountryCode;
pub use field::{Field, FieldError, ValidationErrors};
pub use phone_number::PhoneNumber;
pub use time_slot::{compute_available_slots, SlotAvailability, SlotLabelError, TimeSlot};
