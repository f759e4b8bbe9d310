#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use aigenticpay_core::WaitlistConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global waitlist configuration, set from command line / environment
static WAITLIST_CONFIG: OnceLock<WaitlistConfig> = OnceLock::new();

/// Get the waitlist configuration (falls back to the environment)
pub fn get_waitlist_config() -> WaitlistConfig {
    WAITLIST_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(WaitlistConfig::from_env)
}

/// AigenticPay - The Financial Governance Layer for Autonomous AI
#[derive(Parser, Debug)]
#[command(name = "aigenticpay-desktop")]
#[command(about = "AigenticPay landing page")]
struct Args {
    /// Waitlist endpoint receiving form-encoded submissions
    #[arg(long, env = "WAITLIST_API_URL")]
    waitlist_url: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = WaitlistConfig::default().with_endpoint(args.waitlist_url.as_deref());
    match &config.endpoint {
        Some(url) => tracing::info!("Waitlist endpoint: {}", url),
        None => tracing::warn!("No waitlist endpoint configured; submissions will be simulated"),
    }
    let _ = WAITLIST_CONFIG.set(config);

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("AigenticPay")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);
}
