use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use chrono::Local;
use std::fmt::{Debug, Formatter};

use crate::domain::{compute_available_slots, AppointmentDate, BookingCatalog};
use crate::error_handling::error_chain_fmt;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    date: Option<String>,
}

#[derive(thiserror::Error)]
pub enum SlotsError {
    #[error("`{0}` is not a recognised date")]
    InvalidDate(String),
}

impl Debug for SlotsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SlotsError {
    fn status_code(&self) -> StatusCode {
        match self {
            SlotsError::InvalidDate(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Lists every catalog slot with whether it can still be picked on `date`.
#[tracing::instrument(name = "Compute available slots", skip(query, catalog))]
pub async fn available_slots(
    query: web::Query<QueryParams>,
    catalog: web::Data<BookingCatalog>,
) -> Result<HttpResponse, SlotsError> {
    let selected_date = match query.into_inner().date {
        Some(date) => Some(
            AppointmentDate::parse(&date)
                .map_err(|_| SlotsError::InvalidDate(date))?
                .day(),
        ),
        None => None,
    };
    let slots = compute_available_slots(
        catalog.time_slots(),
        selected_date,
        Local::now().naive_local(),
    );
    Ok(HttpResponse::Ok().json(slots))
}
