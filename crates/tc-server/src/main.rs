use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tc_cleanser::{Cleanser, Lexicon};
use tc_core::{CleanserConfig, LoggingConfig};
use tc_server::{app_with_state, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tc-server", version, about = "Tweet text and CSV cleansing API")]
struct Args {
    /// TOML configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,

    /// Log output format: pretty or json
    #[arg(long)]
    log_format: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = CleanserConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }
    setup_tracing(&config.logging, args.verbose);

    let lexicon = Lexicon::from_config(&config.lexicon).context("failed to load lexicons")?;
    let state = AppState::new(Cleanser::from_lexicon(lexicon), config.batch.clone())?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "tc-server listening");

    axum::serve(listener, app_with_state(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("tc-server stopped");
    Ok(())
}

fn setup_tracing(logging: &LoggingConfig, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("tc_server=debug,tc_cleanser=debug,tc_core=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter))
    };

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
