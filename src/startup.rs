use std::net::TcpListener;

use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::{ExposeSecret, Secret};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::domain::BookingCatalog;
use crate::email_client::EmailClient;
use crate::routes::{available_slots, booking_form, health_check, request_appointment};

/// Pre-filled into every blank form.
pub struct DefaultCountryCode(pub String);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let catalog = configuration.booking.catalog()?;
        let email_client = configuration.email_client.client()?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            catalog,
            email_client,
            configuration.booking.default_country_code,
            configuration.application.hmac_secret,
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    catalog: BookingCatalog,
    email_client: EmailClient,
    default_country_code: String,
    hmac_secret: Secret<String>,
) -> Result<Server, std::io::Error> {
    // shared read-only across workers
    let catalog = web::Data::new(catalog);
    let email_client = web::Data::new(email_client);
    let default_country_code = web::Data::new(DefaultCountryCode(default_country_code));
    let message_store =
        CookieMessageStore::builder(Key::from(hmac_secret.expose_secret().as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/appointments", web::get().to(booking_form))
            .route("/appointments", web::post().to(request_appointment))
            .route("/appointments/slots", web::get().to(available_slots))
            .app_data(catalog.clone())
            .app_data(email_client.clone())
            .app_data(default_country_code.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
