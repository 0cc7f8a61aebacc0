use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use version_spec::cli::{self, Cli};
use version_spec::config::{DEFAULT_LOG_LEVEL, LogConfig, LogFormat};

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    init_logging(&LogConfig::from_env().with_verbose(args.verbose));

    let outcome = cli::run(&args.command)?;
    println!("{}", outcome.output);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Log to stderr so that command output on stdout stays parseable
fn init_logging(config: &LogConfig) {
    let filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
