pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use std::process::ExitCode;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        types::Commands::Render { .. } => commands::handle_render_command(&cli.command, &cli.config),
        types::Commands::Tree { .. } => commands::handle_tree_command(&cli.command),
        types::Commands::Config {} => commands::handle_config_command(&cli.command, &cli.config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
