use anyhow::Result;
use clap::{Parser, Subcommand};
use noco_relay_server::config::{API_KEY_ENV, BASE_URL_ENV};
use tracing_subscriber::EnvFilter;

// ── CLI definition ─────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "noco-relayd",
    about = "noco-relayd — NocoDB credential cookie server daemon",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (default: $NOCO_RELAY_PORT or 3000)
        #[arg(long, env = "NOCO_RELAY_PORT", default_value = "3000")]
        port: u16,
        /// Host to bind (default: $NOCO_RELAY_HOST or 0.0.0.0)
        #[arg(long, env = "NOCO_RELAY_HOST", default_value = "0.0.0.0")]
        host: String,
        /// Log level: error, warn, info, debug, verbose (default: $NOCO_RELAY_LOG_LEVEL or warn)
        #[arg(long, env = "NOCO_RELAY_LOG_LEVEL", default_value = "warn")]
        log_level: String,
        /// NocoDB base URL exposed to clients
        #[arg(long, env = "NOCODB_BASEURL")]
        nocodb_baseurl: Option<String>,
        /// NocoDB API key, kept server-side
        #[arg(long, env = "NOCODB_APIKEY", hide_env_values = true)]
        nocodb_apikey: Option<String>,
        /// Comma-separated CORS origins (default: any)
        #[arg(long, env = "NOCO_RELAY_CORS_ORIGINS")]
        cors_origins: Option<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            host,
            log_level,
            nocodb_baseurl,
            nocodb_apikey,
            cors_origins,
        } => {
            init_tracing(&log_level);
            let runtime = noco_relay_server::RuntimeConfig::from_lookup(|name| match name {
                BASE_URL_ENV => nocodb_baseurl.clone(),
                API_KEY_ENV => nocodb_apikey.clone(),
                _ => None,
            });
            cmd_serve(host, port, cors_origins, runtime).await
        }
    }
}

fn init_tracing(raw: &str) {
    let level = if raw.eq_ignore_ascii_case("verbose") {
        "debug"
    } else {
        raw
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .init();
}

// ── Command implementations ───────────────────────────────────────────────────

async fn cmd_serve(
    host: String,
    port: u16,
    cors_origins: Option<String>,
    runtime: noco_relay_server::RuntimeConfig,
) -> Result<()> {
    let cfg = noco_relay_server::ServerConfig {
        host,
        port,
        cors_origins,
        runtime,
    };

    noco_relay_server::run(cfg).await
}
