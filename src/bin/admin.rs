//! CLI administration tool for the contact relay routing table.
//!
//! Manages the domain → sender/recipient entries the contact function reads,
//! without going through the AWS console.
//!
//! # Usage
//!
//! ```bash
//! # List all routing entries
//! cargo run --bin admin -- routes list
//!
//! # Show one entry
//! cargo run --bin admin -- routes get example.com
//!
//! # Create or replace an entry (prompts for missing values)
//! cargo run --bin admin -- routes put --host example.com \
//!     --recipient owner@example.com --sender noreply@example.com
//!
//! # Remove an entry
//! cargo run --bin admin -- routes delete example.com
//! ```
//!
//! # Environment Variables
//!
//! - `ROUTING_TABLE` (optional): DynamoDB table name (default: `DomainToEmailTable`)
//! - Standard AWS credential and region variables
//!
//! # Features
//!
//! - **Validation**: Addresses are checked before anything is written
//! - **Interactive Prompts**: Missing values and deletions are confirmed via `dialoguer`
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use contact_form_relay::domain::entities::RoutingEntry;
use contact_form_relay::domain::repositories::RoutingRepository;
use contact_form_relay::infrastructure::persistence::DynamoRoutingRepository;
use contact_form_relay::infrastructure::persistence::dynamo_routing_repository::DEFAULT_TABLE;

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing the contact relay.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// DynamoDB routing table
    #[arg(long, global = true, env = "ROUTING_TABLE", default_value = DEFAULT_TABLE)]
    table: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage domain routing entries
    Routes {
        #[command(subcommand)]
        action: RouteAction,
    },
}

/// Routing entry subcommands.
#[derive(Subcommand)]
enum RouteAction {
    /// List all routing entries
    List,

    /// Show the entry for a host
    Get {
        /// Domain as sent by the browser (e.g., "example.com")
        host: String,
    },

    /// Create or replace a routing entry
    Put {
        /// Domain as sent by the browser (e.g., "example.com")
        #[arg(long)]
        host: Option<String>,

        /// Address that receives the form submissions
        #[arg(long)]
        recipient: Option<String>,

        /// Verified SES identity used as the From address
        #[arg(long)]
        sender: Option<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a routing entry
    Delete {
        host: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let repo = DynamoRoutingRepository::new(aws_sdk_dynamodb::Client::new(&sdk_config), cli.table);

    match cli.command {
        Commands::Routes { action } => handle_route_action(action, &repo).await?,
    }

    Ok(())
}

/// Dispatches routing entry commands.
async fn handle_route_action(action: RouteAction, repo: &DynamoRoutingRepository) -> Result<()> {
    match action {
        RouteAction::List => list_routes(repo).await?,
        RouteAction::Get { host } => show_route(repo, &host).await?,
        RouteAction::Put {
            host,
            recipient,
            sender,
            yes,
        } => put_route(repo, host, recipient, sender, yes).await?,
        RouteAction::Delete { host, yes } => delete_route(repo, &host, yes).await?,
    }

    Ok(())
}

/// Lists all routing entries.
///
/// # Output Format
///
/// ```text
/// 📋 Routing entries (DomainToEmailTable)
///
///   Host                      Recipient                      Sender
///   ──────────────────────────────────────────────────────────────────────────────
///   example.com               owner@example.com              noreply@example.com
/// ```
async fn list_routes(repo: &DynamoRoutingRepository) -> Result<()> {
    println!(
        "{} {}",
        "📋 Routing entries".bright_blue().bold(),
        format!("({})", repo.table()).bright_black()
    );
    println!();

    let entries = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list routing entries: {}", e))?;

    if entries.is_empty() {
        println!("{}", "  No routing entries found".yellow());
        println!();
        println!(
            "  Create one with: {} admin routes put",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<25} {:<30} {:<30}",
        "Host".bright_white().bold(),
        "Recipient".bright_white().bold(),
        "Sender".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for entry in &entries {
        println!(
            "  {:<25} {:<30} {}",
            entry.host.cyan(),
            entry.recipient,
            entry.sender.bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows a single routing entry.
async fn show_route(repo: &DynamoRoutingRepository, host: &str) -> Result<()> {
    let entry = repo
        .find_by_host(host)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read routing entry: {}", e))?
        .with_context(|| format!("No routing entry for '{host}'"))?;

    print_entry(&entry);

    Ok(())
}

/// Creates or replaces a routing entry with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for any value not given on the command line
/// 2. Validate host and addresses
/// 3. Warn if an entry for the host already exists
/// 4. Confirm (unless `--yes` flag)
/// 5. Write the entry
async fn put_route(
    repo: &DynamoRoutingRepository,
    host: Option<String>,
    recipient: Option<String>,
    sender: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✉️  Put routing entry".bright_blue().bold());
    println!();

    let host = match host {
        Some(h) => h,
        None => Input::new().with_prompt("Host").interact_text()?,
    };
    let recipient = match recipient {
        Some(r) => r,
        None => Input::new().with_prompt("Recipient address").interact_text()?,
    };
    let sender = match sender {
        Some(s) => s,
        None => Input::new()
            .with_prompt("Sender address")
            .with_initial_text(format!("noreply@{host}"))
            .interact_text()?,
    };

    let entry = RoutingEntry::new(host.trim().to_lowercase(), recipient.trim(), sender.trim());
    entry
        .validate()
        .map_err(|reason| anyhow::anyhow!("Invalid routing entry: {reason}"))?;

    let existing = repo
        .find_by_host(&entry.host)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read routing entry: {}", e))?;

    print_entry(&entry);

    if let Some(existing) = &existing {
        println!(
            "{}",
            format!(
                "⚠️  Replaces the current entry ({} → {})",
                existing.sender, existing.recipient
            )
            .yellow()
        );
        println!();
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Write this entry?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.put(entry)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write routing entry: {}", e))?;

    println!();
    println!("{}", "✅ Routing entry saved".green().bold());
    println!(
        "{}",
        "  The sender must be a verified SES identity for delivery to succeed.".bright_black()
    );
    println!();

    Ok(())
}

/// Deletes a routing entry with confirmation prompt.
///
/// Forms on the removed host start receiving 400/401 immediately.
async fn delete_route(repo: &DynamoRoutingRepository, host: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete routing entry".bright_blue().bold());
    println!();

    let entry = repo
        .find_by_host(host)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read routing entry: {}", e))?
        .with_context(|| format!("No routing entry for '{host}'"))?;

    print_entry(&entry);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this entry?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = repo
        .delete(host)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete routing entry: {}", e))?;

    println!();
    if removed {
        println!("{}", "✅ Routing entry deleted".green().bold());
    } else {
        println!("{}", "⚠️  Entry was already gone".yellow());
    }
    println!();

    Ok(())
}

fn print_entry(entry: &RoutingEntry) {
    println!("  Host:      {}", entry.host.cyan());
    println!("  Recipient: {}", entry.recipient);
    println!("  Sender:    {}", entry.sender.bright_black());
    println!();
}
