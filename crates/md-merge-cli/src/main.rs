use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod exit;
mod logging;
mod settings;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init(logging::LogConfig::from_verbose(cli.verbose));

    let code = match commands::settings_for(&cli) {
        Ok(settings) => commands::execute(cli, &settings),
        Err(err) => exit::report(&err),
    };
    code.into()
}
