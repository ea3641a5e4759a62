use counselling_booking::configuration::get_configuration;
use counselling_booking::startup::Application;
use counselling_booking::telemetry::{get_tracing_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_tracing_subscriber("counselling-booking", "info", std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Accepting appointment requests");
    application.run_until_stopped().await?;
    Ok(())
}
