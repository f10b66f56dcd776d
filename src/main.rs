mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    // Run the CLI
    cli::run()
}
