use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;
use chrono::Local;
use std::fmt::{Debug, Formatter};

use crate::domain::{AppointmentRequest, BookingCatalog, BookingForm, SubmitRejected};
use crate::email_client::EmailClient;
use crate::error_handling::{error_chain_fmt, see_other};
use crate::routes::appointments::page::{notice_text, AppointmentPage};
use crate::startup::DefaultCountryCode;

#[derive(thiserror::Error)]
#[error("Failed to dispatch the appointment request to the email relay")]
pub struct DispatchError(#[source] reqwest::Error);

impl Debug for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[tracing::instrument(
    name = "Requesting an appointment",
    skip(form, catalog, email_client, default_country_code),
    fields(
        client_name = %form.client_name,
        client_email = %form.email,
        appointment_date = %form.date,
        appointment_time = %form.time,
        service = %form.service
    )
)]
pub async fn request_appointment(
    form: web::Form<AppointmentRequest>,
    catalog: web::Data<BookingCatalog>,
    email_client: web::Data<EmailClient>,
    default_country_code: web::Data<DefaultCountryCode>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut booking = BookingForm::with_request(form.0, &default_country_code.0);
    let appointment = match booking.submit(&catalog) {
        Ok(appointment) => appointment,
        Err(SubmitRejected::Invalid(errors)) => {
            tracing::info!(errors = %errors, "Rejected an invalid appointment request");
            return AppointmentPage::new(&booking, &catalog, Local::now().naive_local())
                .render_with_status(StatusCode::BAD_REQUEST);
        }
        // a form built for this request has no dispatch in flight yet
        Err(SubmitRejected::AlreadySubmitting) => {
            return Ok(HttpResponse::Conflict().finish());
        }
    };

    match email_client.send_appointment_request(&appointment).await {
        Ok(()) => {
            booking.dispatch_succeeded();
            // the blank form is served by the redirect target, which shows the notice once
            if let Some(notice) = booking.notice() {
                FlashMessage::info(notice_text(notice)).send();
            }
            Ok(see_other("/appointments"))
        }
        Err(e) => {
            let error = DispatchError(e);
            tracing::error!(
                error.cause_chain = ?error,
                error.message = %error,
                "Failed to send the appointment request"
            );
            booking.dispatch_failed();
            AppointmentPage::new(&booking, &catalog, Local::now().naive_local())
                .render_with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
