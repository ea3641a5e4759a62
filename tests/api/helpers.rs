use counselling_booking::configuration::get_configuration;
use counselling_booking::startup::Application;
use counselling_booking::telemetry::{get_tracing_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use wiremock::MockServer;

// ensure that the tracing stack is only initialized once
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_tracing_subscriber("test", "debug", std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_tracing_subscriber("test", "debug", std::io::sink);
        init_subscriber(subscriber);
    }
});

// A struct holding data needed to drive a test instance of the application
pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_appointment<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/appointments", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_booking_form(&self, date: Option<&str>) -> reqwest::Response {
        let mut request = self
            .api_client
            .get(&format!("{}/appointments", &self.address));
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_booking_form_html(&self) -> String {
        self.get_booking_form(None).await.text().await.unwrap()
    }

    pub async fn get_slots(&self, date: Option<&str>) -> reqwest::Response {
        let mut request = self
            .api_client
            .get(&format!("{}/appointments/slots", &self.address));
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }
        request.send().await.expect("Failed to execute request.")
    }
}

// Spawns the application in the background, with the email relay replaced by a mock server.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // a random OS port
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.timeout_milliseconds = 500;
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        email_server,
        api_client,
    }
}

/// A complete, valid appointment request, booked a few years ahead.
pub fn valid_appointment() -> serde_json::Value {
    serde_json::json!({
        "client_name": "Asha",
        "email": "asha@example.com",
        "country_code": "+91",
        "phone": "9876543210",
        "date": "2030-06-25",
        "time": "10:00 AM – 11:00 AM",
        "service": "Individual Therapy",
    })
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
