//! Configuration check tool for the OTLP trace exporter.
//!
//! Loads a config file, expands placeholders, resolves defaults, and prints
//! the normalized configuration as JSON. Exits non-zero on any violation, so
//! it doubles as a lint step for deployment pipelines.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use otlp_exporter_config::ExporterConfig;

/// Resolve and check an OTLP trace exporter configuration file.
#[derive(Parser, Debug)]
#[command(name = "otlp-exporter-config")]
#[command(about = "Resolve an OTLP trace exporter config and print the normalized result")]
#[command(version)]
struct Args {
    /// Path to the configuration file (JSON5 format).
    config: PathBuf,

    /// Skip ${env.*} / ${file.*} placeholder expansion.
    #[arg(long)]
    no_expand: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = args.log_level.parse().unwrap_or(Level::INFO);
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("otlp_exporter_config={}", log_level).parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = if args.no_expand {
        let content = std::fs::read_to_string(&args.config)
            .with_context(|| format!("Failed to read '{}'", args.config.display()))?;
        let raw: Value = json5::from_str(&content).context("Failed to parse config")?;
        ExporterConfig::resolve(&raw)?
    } else {
        ExporterConfig::load_from_file(&args.config)?
    };

    if !config.enabled {
        warn!("Exporter is disabled; the resolved configuration is inert");
    }
    info!(
        enabled = config.enabled,
        protocol = %config.protocol,
        endpoint = %config.endpoint,
        "Configuration resolved"
    );

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
