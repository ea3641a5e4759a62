
use anyhow::Context;
use reqwest::Url;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{BookingCatalog, SlotLabelError};
use crate::email_client::EmailClient;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub booking: BookingSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    /// Signs the cookie carrying one-shot notices between requests.
    pub hmac_secret: Secret<String>,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: Secret<String>,
    /// Display name of the practice, as addressed in the email template.
    pub recipient_name: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn base_url(&self) -> Result<Url, anyhow::Error> {
        Url::parse(&self.base_url)
            .with_context(|| format!("`{}` is not a valid email relay url", self.base_url))
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(self) -> Result<EmailClient, anyhow::Error> {
        let base_url = self.base_url()?;
        let timeout = self.timeout();
        let client = EmailClient::new(
            base_url,
            self.service_id,
            self.template_id,
            self.public_key,
            self.recipient_name,
            timeout,
        )?;
        Ok(client)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct BookingSettings {
    pub default_country_code: String,
    pub time_slots: Vec<String>,
    pub services: Vec<String>,
}

impl BookingSettings {
    pub fn catalog(&self) -> Result<BookingCatalog, SlotLabelError> {
        BookingCatalog::new(self.time_slots.clone(), self.services.clone())
    }
}

/// Layers `base.yaml`, the environment specific file and `APP_` environment variables, in that order.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
