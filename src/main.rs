//! Booking Desk - Main entry point
//!
//! Interactive booking manager on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use booking_desk::workflows::finished;
use booking_desk::{Config, Session, SheetsClient, StdConsole};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // A .env file may carry LOG_LEVEL, so read it before the subscriber starts
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr only, stdout belongs to the prompts)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting Booking Desk with sheet URL: {}", config.sheet_url);

    let client = SheetsClient::new(&config);
    let mut session = Session::new(&client, StdConsole::stdio(), &config);

    let outcome = finished(session.run());
    info!("Store traffic: {:?}", client.metrics().summary());

    match outcome {
        Ok(_) => {
            info!("Booking Desk shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!("Session failed: {}", e);
            Err(e.into())
        }
    }
}
