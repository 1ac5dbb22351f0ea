//! Ghadi phone host simulator
//!
//! Runs the companion against stub host implementations: a position source
//! fed from the command line (omit the coordinates to simulate acquisition
//! failure) and a sink that prints each dictionary instead of a bridge.
//!
//! Usage:
//!   ghadi-phone --longitude 13.405 --latitude 52.52
//!   ghadi-phone --skin globe

mod host;

use clap::Parser;

use ghadi_companion::{Companion, SystemClock};
use host::{ConsoleSink, FixedPositionSource};

#[derive(Parser)]
#[command(about = "Simulate one companion session against a printed bridge")]
struct Args {
    /// Simulated fix longitude in degrees
    #[arg(long, requires = "latitude")]
    longitude: Option<f64>,

    /// Simulated fix latitude in degrees
    #[arg(long, requires = "longitude")]
    latitude: Option<f64>,

    /// Watchface skin whose configuration document to serve
    #[arg(long, default_value = "bb8")]
    skin: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let schema = ghadi_config::skins::by_name(&args.skin)
        .ok_or_else(|| format!("unknown skin: {}", args.skin))?;
    schema.validate()?;

    println!("Configuration document for '{}':", args.skin);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    println!();

    let source = FixedPositionSource::new(args.longitude.zip(args.latitude));
    let companion = Companion::new(source, ConsoleSink, SystemClock);

    // The host signals the companion context is ready
    companion.on_ready().await;

    // Simulate the configuration page posting the document's defaults back
    companion.on_settings(&schema.default_settings()).await;

    Ok(())
}
