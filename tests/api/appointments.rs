use counselling_booking::domain::{DEFAULT_SERVICES, DEFAULT_TIME_SLOTS};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, ResponseTemplate};

use crate::helpers::{assert_is_redirect_to, spawn_app, valid_appointment};

fn when_sending_an_email() -> MockBuilder {
    Mock::given(path("/api/v1.0/email/send")).and(method("POST"))
}

#[tokio::test]
async fn booking_form_lists_every_slot_and_service() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get_booking_form(None).await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Book an Appointment"));
    assert!(html.contains(r#"value="+91""#));
    for slot in DEFAULT_TIME_SLOTS {
        assert!(html.contains(slot), "{} is missing from the form", slot);
    }
    for service in DEFAULT_SERVICES {
        assert!(html.contains(service), "{} is missing from the form", service);
    }
}

#[tokio::test]
async fn no_slot_is_disabled_for_a_future_date() {
    // arrange
    let app = spawn_app().await;

    // act
    let html = app
        .get_booking_form(Some("2099-01-01"))
        .await
        .text()
        .await
        .unwrap();

    // assert
    assert!(html.contains(r#"value="01 Jan 2099""#));
    assert!(!html.contains(" disabled>"));
}

#[tokio::test]
async fn a_valid_request_is_dispatched_and_redirects() {
    // arrange
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app.post_appointment(&valid_appointment()).await;

    // assert
    assert_is_redirect_to(&response, "/appointments");

    // follow the redirect: the notice is shown once and the form is blank again
    let html_page = app.get_booking_form_html().await;
    assert!(html_page.contains("Appointment Request Sent!"));
    assert!(!html_page.contains("asha@example.com"));

    let html_page = app.get_booking_form_html().await;
    assert!(!html_page.contains("Appointment Request Sent!"));
}

#[tokio::test]
async fn the_dispatched_payload_carries_the_booking() {
    // arrange
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    app.post_appointment(&valid_appointment()).await;

    // assert
    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    let params = &body["template_params"];
    assert_eq!(params["client_name"], "Asha");
    assert_eq!(params["email"], "asha@example.com");
    assert_eq!(params["phone"], "+91 9876543210");
    assert_eq!(params["date"], "25/06/2030");
    assert_eq!(params["time"], "10:00 AM – 11:00 AM");
    assert_eq!(params["service"], "Individual Therapy");
    assert_eq!(params["to_name"], "Lead by Sethulekshmi");
}

#[tokio::test]
async fn a_typed_display_date_is_accepted() {
    // arrange
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut body = valid_appointment();
    body["date"] = "25 Jun 2030".into();

    // act
    let response = app.post_appointment(&body).await;

    // assert
    assert_is_redirect_to(&response, "/appointments");
}

#[tokio::test]
async fn invalid_requests_return_400_with_field_errors() {
    // arrange
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("client_name", "   ", "Name is required"),
        ("email", "", "Email is required"),
        ("email", "asha@example", "Invalid email"),
        ("country_code", "91", "Invalid code"),
        ("phone", "98765-4321", "Enter 10 digit number"),
        ("date", "", "Date is required"),
        ("time", "", "Time is required"),
        ("service", "", "Service is required"),
        ("service", "Hypnosis", "Select one of the offered options"),
    ];

    for (field, value, expected_message) in test_cases {
        let mut body = valid_appointment();
        body[field] = value.into();

        // act
        let response = app.post_appointment(&body).await;

        // assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when {} was {:?}",
            field,
            value
        );
        let html = response.text().await.unwrap();
        assert!(
            html.contains(expected_message),
            "Expected `{}` when {} was {:?}",
            expected_message,
            field,
            value
        );
    }
}

#[tokio::test]
async fn an_empty_submission_reports_every_field() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.post_appointment(&serde_json::json!({})).await;

    // assert
    assert_eq!(response.status().as_u16(), 400);
    let html = response.text().await.unwrap();
    for message in [
        "Name is required",
        "Email is required",
        "Country code required",
        "Phone is required",
        "Date is required",
        "Time is required",
        "Service is required",
    ] {
        assert!(html.contains(message), "{} was not reported", message);
    }
}

#[tokio::test]
async fn an_invalid_request_keeps_what_the_client_typed() {
    // arrange
    let app = spawn_app().await;
    let mut body = valid_appointment();
    body["phone"] = "12345".into();

    // act
    let html = app.post_appointment(&body).await.text().await.unwrap();

    // assert
    assert!(html.contains(r#"value="asha@example.com""#));
    assert!(html.contains(r#"value="12345""#));
    assert!(html.contains(r#"value="25 Jun 2030""#));
}

#[tokio::test]
async fn a_relay_failure_returns_500_and_keeps_the_form() {
    // arrange
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app.post_appointment(&valid_appointment()).await;

    // assert
    assert_eq!(response.status().as_u16(), 500);
    let html = response.text().await.unwrap();
    assert!(html.contains("Failed to send appointment request. Please try again or call us directly."));
    assert!(html.contains(r#"value="Asha""#));
    assert!(html.contains(r#"value="9876543210""#));
}

#[tokio::test]
async fn a_relay_timeout_is_reported_as_a_failure() {
    // arrange
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app.post_appointment(&valid_appointment()).await;

    // assert
    assert_eq!(response.status().as_u16(), 500);
}
