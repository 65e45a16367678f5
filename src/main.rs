use clap::Parser;
use std::process::ExitCode;

use notestore::cli::{Cli, config::Config};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter(cli.verbose)),
    )
    .format_timestamp(None)
    .init();

    if let Err(err) = notestore::run(&cli, &config) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
