use anyhow::{Context, Result};
use clap::Parser;
use portprobe::cli::Cli;
use portprobe::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = cli.load_settings().context("failed to load settings")?;
    init_tracing(cli.verbose || settings.verbose);

    cli.execute(settings).await.context("probe failed")?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` turns on per-probe debug logs.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "portprobe=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
