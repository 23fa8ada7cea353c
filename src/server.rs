//! Runtime setup.
//!
//! Builds the AWS clients, the contact service and the Axum router, then
//! serves it under the Lambda runtime or on a local listener.

use crate::application::services::ContactService;
use crate::config::Config;
use crate::domain::repositories::RoutingRepository;
use crate::infrastructure::captcha::{CaptchaVerifier, RecaptchaVerifier};
use crate::infrastructure::mail::{LogMailer, Mailer, SesMailer};
use crate::infrastructure::persistence::{DynamoRoutingRepository, InMemoryRoutingRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, SdkConfig};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the function with the given configuration.
///
/// Initializes:
/// - Routing repository (DynamoDB, or the `ROUTING_FILE` map)
/// - reCAPTCHA verifier
/// - Mailer (SES, or the dry-run logger)
/// - Axum router, served by `lambda_http` inside Lambda and by
///   `axum::serve` elsewhere
///
/// # Errors
///
/// Returns an error if:
/// - The routing file cannot be loaded
/// - The HTTP client cannot be built
/// - The local listener cannot bind
/// - The runtime exits with an error
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let router = app_router(state, &config.cors_allow_origins);
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    if config.lambda_runtime {
        tracing::info!("Starting Lambda runtime");
        lambda_http::run(app).await.map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wires the contact service from configuration.
///
/// AWS configuration is only resolved if DynamoDB or SES is actually used.
///
/// # Errors
///
/// Returns an error if the routing file is invalid or the reCAPTCHA client
/// cannot be built.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let sdk_config: OnceCell<SdkConfig> = OnceCell::new();

    let routing: Arc<dyn RoutingRepository> = match &config.routing_file {
        Some(path) => {
            tracing::info!("Routing entries loaded from {}", path.display());
            Arc::new(InMemoryRoutingRepository::from_file(path)?)
        }
        None => {
            let sdk = sdk_config.get_or_init(load_sdk_config).await;
            tracing::info!("Routing table: DynamoDB {}", config.routing_table);
            Arc::new(DynamoRoutingRepository::new(
                aws_sdk_dynamodb::Client::new(sdk),
                &config.routing_table,
            ))
        }
    };

    let captcha: Arc<dyn CaptchaVerifier> = Arc::new(
        RecaptchaVerifier::new(
            &config.recaptcha_verify_url,
            &config.recaptcha_secret,
            config.captcha_timeout(),
        )
        .context("Failed to build reCAPTCHA client")?,
    );

    let mailer: Arc<dyn Mailer> = if config.mail_dry_run {
        tracing::warn!("MAIL_DRY_RUN is set: emails will be logged, not sent");
        Arc::new(LogMailer::new())
    } else {
        let sdk = sdk_config.get_or_init(load_sdk_config).await;
        Arc::new(SesMailer::new(aws_sdk_sesv2::Client::new(sdk)))
    };

    let contact_service =
        ContactService::new(routing, captcha, mailer).with_subject(&config.email_subject);

    Ok(AppState::new(Arc::new(contact_service))
        .with_domain_source(config.domain_source.clone())
        .with_success_status(config.success_status))
}

async fn load_sdk_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
