use crate::domain::{AppointmentRequest, BookingCatalog, ValidatedAppointment, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    /// A dispatch is in flight; further submissions are refused.
    Submitting,
}

/// A one-shot message shown above the form after a dispatch settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    DispatchFailed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Sent => "Appointment Request Sent!",
            Notice::DispatchFailed => "Error",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::Sent => "We'll contact you within 24 hours to confirm your appointment.",
            Notice::DispatchFailed => {
                "Failed to send appointment request. Please try again or call us directly."
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitRejected {
    #[error("The appointment request is invalid: {0}")]
    Invalid(ValidationErrors),
    #[error("An appointment request is already being sent")]
    AlreadySubmitting,
}

/// The appointment form and its submission lifecycle.
#[derive(Debug, Clone)]
pub struct BookingForm {
    request: AppointmentRequest,
    errors: ValidationErrors,
    state: FormState,
    notice: Option<Notice>,
    default_country_code: String,
}

impl BookingForm {
    pub fn new(default_country_code: &str) -> Self {
        Self::with_request(AppointmentRequest::empty(default_country_code), default_country_code)
    }

    pub fn with_request(request: AppointmentRequest, default_country_code: &str) -> Self {
        Self {
            request,
            errors: ValidationErrors::new(),
            state: FormState::Editing,
            notice: None,
            default_country_code: default_country_code.to_string(),
        }
    }

    pub fn request(&self) -> &AppointmentRequest {
        &self.request
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Validates the whole form. On success the form moves to `Submitting` and
    /// the caller owns the dispatch; on failure the errors stay attached.
    /// The in-flight gate only matters for a form that outlives one submission.
    pub fn submit(
        &mut self,
        catalog: &BookingCatalog,
    ) -> Result<ValidatedAppointment, SubmitRejected> {
        if self.state == FormState::Submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        self.notice = None;
        match self.request.clone().parse(catalog) {
            Ok(appointment) => {
                self.errors = ValidationErrors::new();
                self.state = FormState::Submitting;
                Ok(appointment)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// The request went out: start over with a blank form.
    pub fn dispatch_succeeded(&mut self) {
        self.request = AppointmentRequest::empty(&self.default_country_code);
        self.errors = ValidationErrors::new();
        self.state = FormState::Editing;
        self.notice = Some(Notice::Sent);
    }

    /// The relay refused or never answered: keep what the client typed so they can retry.
    pub fn dispatch_failed(&mut self) {
        self.state = FormState::Editing;
        self.notice = Some(Notice::DispatchFailed);
    }
}
