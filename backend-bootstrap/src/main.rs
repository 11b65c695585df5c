use anyhow::Result;
use clap::Parser;

use backend_infrastructure::{parse_flag, CONFIG_ENV};

#[derive(Parser, Debug)]
#[command(name = "qrtrace")]
#[command(about = "QR scan recording and map server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose logging; also enables debug mode in the loaded config
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var(CONFIG_ENV, config);
    }
    if args.debug {
        std::env::set_var("QRTRACE_DEBUG", "true");
    }
    let debug = std::env::var("QRTRACE_DEBUG")
        .ok()
        .and_then(|value| parse_flag(&value))
        .unwrap_or(false);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if debug { "debug" } else { "info" })
            }),
        )
        .init();

    backend_bootstrap::run_standalone().await
}
