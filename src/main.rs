use anyhow::Result;
use contact_form_relay::config::{self, Config};
use contact_form_relay::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// CloudWatch timestamps every line, so Lambda output drops ANSI and time.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!config.lambda_runtime);

    match (config.log_format.as_str(), config.lambda_runtime) {
        ("json", true) => builder.json().flatten_event(true).without_time().init(),
        ("json", false) => builder.json().flatten_event(true).init(),
        (_, true) => builder.without_time().init(),
        _ => builder.init(),
    }
}
