mod get;
mod page;
mod post;
mod slots;

pub use get::booking_form;
pub use post::request_appointment;
pub use slots::available_slots;
