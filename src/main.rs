use std::process::ExitCode;

use clap::Parser;

use colorpage::args::Cli;
use colorpage::config::Config;
use colorpage::logging::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config_path();
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("colorpage: {err}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply_overrides(&mut config);
    tracing::info!(config = %config_path.display(), model = %config.generation.model, "config loaded");

    match colorpage::ui::run(&config, cli.prompt.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "fatal error");
            eprintln!("colorpage: {err:#}");
            ExitCode::FAILURE
        }
    }
}
