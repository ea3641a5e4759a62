use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Local;

use crate::domain::{AppointmentRequest, BookingCatalog, BookingForm};
use crate::routes::appointments::page::AppointmentPage;
use crate::startup::DefaultCountryCode;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    date: Option<String>,
}

/// Serves a blank booking form. `?date=` pre-selects a day so that slots
/// already past today render disabled.
pub async fn booking_form(
    query: web::Query<QueryParams>,
    catalog: web::Data<BookingCatalog>,
    default_country_code: web::Data<DefaultCountryCode>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let mut request = AppointmentRequest::empty(&default_country_code.0);
    if let Some(date) = query.into_inner().date {
        request.date = date;
    }
    let form = BookingForm::with_request(request, &default_country_code.0);
    AppointmentPage::new(&form, &catalog, Local::now().naive_local())
        .with_flash_messages(&flash_messages)
        .render_with_status(StatusCode::OK)
}
