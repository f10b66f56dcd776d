use std::path::PathBuf;

use navtoc::config;
use navtoc::utils::error::BoxResult;

use crate::cli::types::Commands;

/// Handle the config command
pub fn handle_config_command(command: &Commands, config_files: &[PathBuf]) -> BoxResult<()> {
    if let Commands::Config {} = command {
        let cfg = config::load_config(".", Some(config_files.to_vec()))?;
        config::validate_config(&cfg);
        print!("{}", serde_yaml::to_string(&cfg)?);
    }
    Ok(())
}
