use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use askama::Template;
use chrono::NaiveDateTime;

use crate::domain::{
    compute_available_slots, AppointmentDate, BookingCatalog, BookingForm, Field, Notice,
};
use crate::error_handling::e500;

struct InputView {
    value: String,
    error: String,
}

struct OptionView {
    value: String,
    selected: bool,
    enabled: bool,
}

struct NoticeView {
    level: &'static str,
    text: String,
}

#[derive(Template)]
#[template(path = "appointment.html")]
pub struct AppointmentPage {
    notices: Vec<NoticeView>,
    client_name: InputView,
    email: InputView,
    country_code: InputView,
    phone: InputView,
    date: InputView,
    time_error: String,
    service_error: String,
    slots: Vec<OptionView>,
    services: Vec<OptionView>,
}

impl AppointmentPage {
    /// Renders `form` as seen at `now`: slots that already started on the chosen day are disabled.
    pub fn new(form: &BookingForm, catalog: &BookingCatalog, now: NaiveDateTime) -> Self {
        let request = form.request();
        let errors = form.errors();
        let input = |value: &str, field: Field| InputView {
            value: value.to_string(),
            error: errors.message(field),
        };

        let chosen_date = AppointmentDate::parse(&request.date).ok();
        let date_value = chosen_date
            .map(|d| d.to_display_string())
            .unwrap_or_else(|| request.date.clone());
        let slots = compute_available_slots(
            catalog.time_slots(),
            chosen_date.map(|d| d.day()),
            now,
        )
        .into_iter()
        .map(|slot| OptionView {
            selected: slot.label == request.time,
            value: slot.label,
            enabled: slot.enabled,
        })
        .collect();
        let services = catalog
            .services()
            .iter()
            .map(|title| OptionView {
                value: title.clone(),
                selected: *title == request.service,
                enabled: true,
            })
            .collect();

        Self {
            notices: form.notice().into_iter().map(NoticeView::from).collect(),
            client_name: input(&request.client_name, Field::ClientName),
            email: input(&request.email, Field::Email),
            country_code: input(&request.country_code, Field::CountryCode),
            phone: input(&request.phone, Field::Phone),
            date: InputView {
                value: date_value,
                error: errors.message(Field::Date),
            },
            time_error: errors.message(Field::Time),
            service_error: errors.message(Field::Service),
            slots,
            services,
        }
    }

    /// Adds notices carried over from the previous request.
    pub fn with_flash_messages(mut self, flash_messages: &IncomingFlashMessages) -> Self {
        self.notices.extend(flash_messages.iter().map(|m| NoticeView {
            level: match m.level() {
                Level::Error | Level::Warning => "error",
                _ => "info",
            },
            text: m.content().to_string(),
        }));
        self
    }

    pub fn render_with_status(&self, status: StatusCode) -> Result<HttpResponse, actix_web::Error> {
        let body = self.render().map_err(e500)?;
        Ok(HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body))
    }
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            level: match notice {
                Notice::Sent => "info",
                Notice::DispatchFailed => "error",
            },
            text: notice_text(notice),
        }
    }
}

pub fn notice_text(notice: Notice) -> String {
    format!("{} {}", notice.title(), notice.description())
}
