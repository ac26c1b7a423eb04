//! HTTP server for the HR payroll API.

use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hr_payroll::api::{AppState, create_router};
use hr_payroll::config::ConfigLoader;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "hr-payroll", version, about = "Payroll calendar and personnel API")]
struct Args {
    /// Directory holding settings.yaml and leave.yaml.
    #[arg(long, default_value = "./config/hr")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

fn init_tracing(log_level: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
}

async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = ConfigLoader::load(&args.config)?;
    init_tracing(&config.settings().log_level)?;

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, config = %args.config.display(), "HR payroll API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = run(args).await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
