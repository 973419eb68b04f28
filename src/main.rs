use clap::Parser;
use std::process::ExitCode;

use smarthelp::cli::Cli;
use smarthelp::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    // The inbox sets up its own file logging once config is loaded
    if !command.is_fullscreen()
        && let Err(e) = logging::init_stderr()
    {
        eprintln!("{}", e);
    }

    match command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
