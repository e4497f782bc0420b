mod config;
mod error;
mod inverter;
mod report;

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{Config, LogFormat, OutputFormat};
use inverter::panel::generate_panel_ids;

#[derive(Parser)]
#[command(name = "microinverter-bridge")]
#[command(about = "Polls a solar microinverter and decodes per-panel telemetry")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Inverter host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Inverter TCP port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Identifier of the first panel (overrides config)
    #[arg(long)]
    base_id: Option<String>,

    /// Number of panels behind the inverter (overrides config)
    #[arg(long)]
    panel_count: Option<usize>,

    /// Output format for decoded readings (overrides config)
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref host) = self.host {
            config.inverter.host = host.clone();
        }
        if let Some(port) = self.port {
            config.inverter.port = port;
        }
        if let Some(ref base_id) = self.base_id {
            config.inverter.base_id = base_id.clone();
        }
        if let Some(panel_count) = self.panel_count {
            config.inverter.panel_count = panel_count;
        }
        if let Some(output) = self.output {
            config.output.format = output;
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    // Logs go to stderr so JSON readings on stdout stay clean
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config from {:?}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });
    cli.apply_overrides(&mut config);

    init_tracing(&config);

    info!("microinverter-bridge v{}", env!("CARGO_PKG_VERSION"));

    let panel_ids = generate_panel_ids(&config.inverter.base_id, config.inverter.panel_count)
        .map_err(|e| {
            error!("Could not generate panel ids: {}", e);
            e
        })?;
    info!(
        base_id = %config.inverter.base_id,
        panels = panel_ids.len(),
        "Polling {} panel(s)",
        panel_ids.len()
    );

    let (report_tx, report_rx) = tokio::sync::mpsc::channel(64);
    let reporter = tokio::spawn(report::run_reporter(report_rx, config.output.format));

    let inverter_config = config.inverter.clone();
    let session = async move {
        match inverter::run_session(&inverter_config, &panel_ids, report_tx).await {
            Ok(responses) => info!("Session finished after {} response(s)", responses),
            Err(e) => error!("Connection error: {}", e),
        }
    };

    tokio::select! {
        _ = session => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received, closing connection");
        }
    }

    // The session future (and its report sender) is gone; let the reporter drain
    match reporter.await {
        Ok(emitted) => info!("Reported {} response(s)", emitted),
        Err(e) => error!("Reporter task failed: {}", e),
    }

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
