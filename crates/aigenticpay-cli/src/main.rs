//! AigenticPay CLI
//!
//! Thin wrapper around aigenticpay-core for operators: submit to the
//! waitlist through the same capture flow the page uses, and inspect the
//! page's tracked sections and resolved configuration.
//!
//! ## Usage
//!
//! ```bash
//! # Submit an email (uses WAITLIST_API_URL if set, otherwise simulates)
//! aigenticpay join name@company.com
//!
//! # Submit to an explicit endpoint
//! aigenticpay join name@company.com --waitlist-url https://script.example.com/exec
//!
//! # List tracked sections
//! aigenticpay sections
//!
//! # Show resolved configuration
//! aigenticpay config
//! ```

use std::time::Duration;

use aigenticpay_core::{
    PageState, SectionId, SubmissionState, TriggerBand, WaitlistClient, WaitlistConfig,
    ENDPOINT_ENV,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

/// AigenticPay - waitlist and landing page tools
#[derive(Parser)]
#[command(name = "aigenticpay")]
#[command(version = "0.1.0")]
#[command(about = "AigenticPay - waitlist and landing page tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Waitlist endpoint (overrides WAITLIST_API_URL)
    #[arg(long, global = true, env = "WAITLIST_API_URL")]
    waitlist_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an email address to the waitlist
    Join {
        /// Email address to register
        email: String,

        /// Delay used when no endpoint is configured (milliseconds)
        #[arg(long, default_value_t = 1000)]
        simulated_delay_ms: u64,
    },

    /// List the tracked page sections in order
    Sections,

    /// Show the resolved waitlist configuration
    Config,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Run the modal flow headlessly: open, fill, submit, complete.
async fn join(config: WaitlistConfig, email: &str) -> Result<()> {
    let client = WaitlistClient::from_config(&config);
    let mut page = PageState::new();

    match &config.endpoint {
        Some(url) => tracing::info!(endpoint = %url, "Submitting to waitlist endpoint"),
        None => tracing::info!(
            delay_ms = config.simulated_delay.as_millis() as u64,
            "Simulating waitlist submission"
        ),
    }

    page.open_waitlist();
    page.waitlist.set_draft(email);
    let ticket = page
        .waitlist
        .begin_submit()
        .map_err(|e| anyhow::anyhow!("Cannot submit '{}': {}", email, e))?;

    let submitted = client.submit(ticket.email().clone()).await;
    page.waitlist.complete(&ticket);
    tracing::debug!(simulated = submitted.was_simulated(), "Waitlist submission finished");

    if page.waitlist.state() != SubmissionState::Succeeded {
        anyhow::bail!("Submission did not complete");
    }

    println!("You're on the list!");
    if submitted.was_simulated() {
        println!("(no endpoint configured; set {} to deliver submissions)", ENDPOINT_ENV);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = WaitlistConfig::default().with_endpoint(cli.waitlist_url.as_deref());

    match cli.command {
        Commands::Join {
            email,
            simulated_delay_ms,
        } => {
            let config = config.with_simulated_delay(Duration::from_millis(simulated_delay_ms));
            join(config, &email).await?;
        }

        Commands::Sections => {
            println!("Trigger band: {}", TriggerBand::default().root_margin());
            for id in SectionId::ALL {
                println!("  {:<12} {}", id.as_str(), id.label());
            }
        }

        Commands::Config => {
            tracing::info!(configured = config.is_configured(), "Resolved waitlist configuration");
            match &config.endpoint {
                Some(url) => println!("Endpoint: {}", url),
                None => println!("Endpoint: not configured"),
            }
            println!("Source: {}", config.source);
            println!("Simulated delay: {}ms", config.simulated_delay.as_millis());
        }
    }

    Ok(())
}
