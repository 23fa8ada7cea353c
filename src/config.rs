//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once per cold start and validated before the
//! router is built.
//!
//! ## Required Variables
//!
//! - `RECAPTCHA_KEY` - reCAPTCHA shared secret
//!
//! ## Optional Variables
//!
//! - `RECAPTCHA_VERIFY_URL` - Verification endpoint (default: Google `siteverify`)
//! - `CAPTCHA_TIMEOUT_SECONDS` - Verification request timeout (default: 10)
//! - `ROUTING_TABLE` - DynamoDB table name (default: `DomainToEmailTable`)
//! - `ROUTING_FILE` - JSON file of routing entries; replaces DynamoDB when set
//! - `DOMAIN_SOURCE` - `origin` or `header` (default: `origin`)
//! - `DOMAIN_HEADER` - Header read in `header` mode (default: `X-Domain`)
//! - `SUCCESS_STATUS` - `200` or `201` (default: `200`)
//! - `EMAIL_SUBJECT` - Subject line (default: `New Contact Form Submission`)
//! - `MAIL_DRY_RUN` - Log emails instead of sending them (default: `false`)
//! - `CORS_ALLOW_ORIGINS` - Comma-separated allowed origins (default: any)
//! - `LISTEN` - Bind address outside Lambda (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `json` under Lambda, `text` otherwise)
//!
//! ```bash
//! export RECAPTCHA_KEY="6Lc..."
//! export ROUTING_FILE="routes.json"
//! export MAIL_DRY_RUN=true
//! cargo run
//! ```

use anyhow::{Context, Result};
use axum::http::StatusCode;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::entities::outbound_email::DEFAULT_SUBJECT;
use crate::infrastructure::captcha::DEFAULT_VERIFY_URL;
use crate::infrastructure::persistence::dynamo_routing_repository::DEFAULT_TABLE;
use crate::utils::extract_domain::{DEFAULT_DOMAIN_HEADER, DomainSource};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// reCAPTCHA shared secret (`RECAPTCHA_KEY`). Never logged in full.
    pub recaptcha_secret: String,
    pub recaptcha_verify_url: String,
    pub captcha_timeout_seconds: u64,
    pub routing_table: String,
    /// When set, routing entries come from this JSON file instead of DynamoDB.
    pub routing_file: Option<PathBuf>,
    pub domain_source: DomainSource,
    pub success_status: StatusCode,
    pub email_subject: String,
    pub mail_dry_run: bool,
    /// Empty means any origin is allowed.
    pub cors_allow_origins: Vec<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// True when running inside the AWS Lambda runtime.
    pub lambda_runtime: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `RECAPTCHA_KEY` is missing or a value cannot be
    /// parsed.
    pub fn from_env() -> Result<Self> {
        let recaptcha_secret = env::var("RECAPTCHA_KEY").context("RECAPTCHA_KEY must be set")?;
        let recaptcha_verify_url =
            env::var("RECAPTCHA_VERIFY_URL").unwrap_or_else(|_| DEFAULT_VERIFY_URL.to_string());

        let captcha_timeout_seconds: u64 = match env::var("CAPTCHA_TIMEOUT_SECONDS") {
            Ok(raw) => raw.trim().parse().with_context(|| {
                format!("CAPTCHA_TIMEOUT_SECONDS must be a whole number of seconds, got '{raw}'")
            })?,
            Err(_) => 10,
        };

        let routing_table = env::var("ROUTING_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        let routing_file = env::var("ROUTING_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let domain_mode = env::var("DOMAIN_SOURCE").unwrap_or_else(|_| "origin".to_string());
        let domain_header =
            env::var("DOMAIN_HEADER").unwrap_or_else(|_| DEFAULT_DOMAIN_HEADER.to_string());
        let domain_source = DomainSource::from_settings(&domain_mode, &domain_header)
            .map_err(anyhow::Error::msg)?;

        let success_status = Self::load_success_status()?;

        let email_subject =
            env::var("EMAIL_SUBJECT").unwrap_or_else(|_| DEFAULT_SUBJECT.to_string());

        let mail_dry_run = env::var("MAIL_DRY_RUN")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .map(|v| parse_origin_list(&v))
            .unwrap_or_default();

        let lambda_runtime = env::var("AWS_LAMBDA_RUNTIME_API").is_ok();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| {
            if lambda_runtime { "json" } else { "text" }.to_string()
        });

        Ok(Self {
            recaptcha_secret,
            recaptcha_verify_url,
            captcha_timeout_seconds,
            routing_table,
            routing_file,
            domain_source,
            success_status,
            email_subject,
            mail_dry_run,
            cors_allow_origins,
            listen_addr,
            log_level,
            log_format,
            lambda_runtime,
        })
    }

    /// Reads `SUCCESS_STATUS`, defaulting to 200.
    fn load_success_status() -> Result<StatusCode> {
        match env::var("SUCCESS_STATUS") {
            Ok(raw) => {
                let code: u16 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("SUCCESS_STATUS must be a number, got '{raw}'"))?;
                StatusCode::from_u16(code)
                    .with_context(|| format!("SUCCESS_STATUS is not a valid status code: {code}"))
            }
            Err(_) => Ok(StatusCode::OK),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `recaptcha_secret` is empty
    /// - `recaptcha_verify_url` is not an http(s) URL
    /// - `captcha_timeout_seconds` is 0
    /// - `success_status` is not 200 or 201
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.recaptcha_secret.trim().is_empty() {
            anyhow::bail!("RECAPTCHA_KEY must not be empty");
        }

        if !self.recaptcha_verify_url.starts_with("https://")
            && !self.recaptcha_verify_url.starts_with("http://")
        {
            anyhow::bail!(
                "RECAPTCHA_VERIFY_URL must start with 'http://' or 'https://', got '{}'",
                self.recaptcha_verify_url
            );
        }

        if self.captcha_timeout_seconds == 0 {
            anyhow::bail!("CAPTCHA_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.success_status != StatusCode::OK && self.success_status != StatusCode::CREATED {
            anyhow::bail!(
                "SUCCESS_STATUS must be 200 or 201, got {}",
                self.success_status.as_u16()
            );
        }

        if self.routing_file.is_none() && self.routing_table.trim().is_empty() {
            anyhow::bail!("ROUTING_TABLE must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    pub fn captcha_timeout(&self) -> Duration {
        Duration::from_secs(self.captcha_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Runtime: {}",
            if self.lambda_runtime { "lambda" } else { "local" }
        );
        tracing::info!("  reCAPTCHA secret: {}", mask_secret(&self.recaptcha_secret));
        tracing::info!("  reCAPTCHA endpoint: {}", self.recaptcha_verify_url);

        match &self.routing_file {
            Some(path) => tracing::info!("  Routing: file {}", path.display()),
            None => tracing::info!("  Routing: DynamoDB table {}", self.routing_table),
        }

        match &self.domain_source {
            DomainSource::Origin => tracing::info!("  Domain source: Origin/Referer"),
            DomainSource::Header(name) => tracing::info!("  Domain source: {} header", name),
        }

        tracing::info!("  Success status: {}", self.success_status.as_u16());
        tracing::info!(
            "  Mail: {}",
            if self.mail_dry_run { "dry run" } else { "SES" }
        );
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated origin list, dropping blanks.
fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `6LcAbCdEfGh` → `6LcA***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
