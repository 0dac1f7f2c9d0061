// ABOUTME: Main entry point for the githubfetch application
// ABOUTME: Parses arguments, loads configuration and runs the profile pipeline

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use githubfetch::app::{Pipeline, PipelineOptions};
use githubfetch::cli::Cli;
use githubfetch::cli_output::CliOutput;
use githubfetch::config::Config;
use githubfetch::constants::inline::INTERRUPTED_EXIT_CODE;
use githubfetch::error::PipelineError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if matches!(
            e.downcast_ref::<PipelineError>(),
            Some(PipelineError::Interrupted)
        ) => {
            ExitCode::from(INTERRUPTED_EXIT_CODE)
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    }
    .with_env_overrides()?;

    let mode = cli.mode.unwrap_or(config.mode()).resolve();
    log::debug!("Rendering mode: {:?}", mode);

    let client = config.client()?;
    let options = PipelineOptions::from_config(&config, mode, cli.use_color());
    let pipeline = Pipeline::new(client, options);

    let mut stdout = std::io::stdout();
    pipeline.run(&cli.username, &mut stdout).await?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    let output = CliOutput::new();
    output.error(&err.to_string());

    for cause in err.chain().skip(1) {
        output.cause(&cause.to_string());
    }

    let hint = err
        .downcast_ref::<PipelineError>()
        .and_then(PipelineError::help_text)
        .or_else(|| {
            err.downcast_ref::<github_sdk::GitHubError>()
                .and_then(github_sdk::GitHubError::help_text)
        });
    if let Some(hint) = hint {
        output.hint(hint);
    }
}
