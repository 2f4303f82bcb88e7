use blackbuda::BlackbudaError;
use blackbuda::client::BudaClient;
use blackbuda::config::fetch_config;
use blackbuda::report::build_report;

#[tokio::main]
async fn main() -> Result<(), BlackbudaError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let app_config = fetch_config()?;

    let client = BudaClient::new(app_config.buda.api_url.clone());
    let report = build_report(&client, &app_config).await?;

    println!("{report}");

    Ok(())
}
