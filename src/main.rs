use anyhow::Result;
use std::process::ExitCode;

use casa_check_core::config::AppConfig;
use casa_check_core::presentation::cli::{Cli, execute};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "fatal error");
            eprintln!("fatal error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn bootstrap() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    match execute(cli.command, &config).await {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(code = err.code(), error = %err.message(), "command failed");
            eprintln!("{}", err.message());
            Ok(err.exit_code())
        }
    }
}

fn init_tracing(default_filter: &str) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_filter.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
