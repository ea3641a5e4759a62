use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::ValidatedAppointment;

/// Client for the transactional-email relay that forwards booking requests to the practice.
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    service_id: String,
    template_id: String,
    public_key: Secret<String>,
    recipient_name: String,
}

impl EmailClient {
    pub fn new(
        base_url: Url,
        service_id: String,
        template_id: String,
        public_key: Secret<String>,
        recipient_name: String,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        // a timed out request surfaces as a dispatch failure like any other
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            service_id,
            template_id,
            public_key,
            recipient_name,
        })
    }

    #[tracing::instrument(name = "Dispatch appointment request", skip_all)]
    pub async fn send_appointment_request(
        &self,
        appointment: &ValidatedAppointment,
    ) -> Result<(), reqwest::Error> {
        let url = self
            .base_url
            .join("/api/v1.0/email/send")
            .expect("Failed to join the send path with the base url");

        let phone = appointment.full_phone();
        let date = appointment.date.to_payload_string();
        let request_body = SendEmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: self.public_key.expose_secret(),
            template_params: TemplateParams {
                client_name: appointment.client_name.as_ref(),
                email: appointment.email.as_ref(),
                phone: &phone,
                date: &date,
                time: appointment.time.label(),
                service: &appointment.service,
                to_name: &self.recipient_name,
            },
        };

        self.http_client
            .post(url)
            .json(&request_body)
            .send()
            .await?
            // the relay reports rejected templates and bad keys through the status code only
            .error_for_status()?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// The flat key-value payload the email template is rendered from.
#[derive(serde::Serialize)]
struct TemplateParams<'a> {
    client_name: &'a str,
    email: &'a str,
    phone: &'a str,
    date: &'a str,
    time: &'a str,
    service: &'a str,
    to_name: &'a str,
}
