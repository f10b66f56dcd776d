use log::{debug, info, LevelFilter};
use std::path::{Path, PathBuf};

use navtoc::config::{self, Config, TocConfig};
use navtoc::headings;
use navtoc::utils::error::BoxResult;
use navtoc::utils::fs;

use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;

/// Handle the render command
pub fn handle_render_command(command: &Commands, config_files: &[PathBuf]) -> BoxResult<()> {
    if let Commands::Render {
        headings: headings_path,
        start_level,
        end_level,
        ordered,
        output,
        quiet,
        verbose,
    } = command
    {
        // Set log level based on command line options
        if *verbose {
            set_log_level(LevelFilter::Debug);
        } else if *quiet {
            set_log_level(LevelFilter::Error);
        }

        let config = config::load_config(".", Some(config_files.to_vec()))?;
        let (toc_config, _) = resolve_toc(&config, *start_level, *end_level, *ordered);
        debug!("Rendering with {:?}", toc_config);

        let html = render_file(headings_path, &toc_config)?;

        match output {
            Some(path) => {
                fs::write_file(path, &html)?;
                info!("Table of contents written to {}", path.display());
            }
            None => println!("{}", html),
        }
    }

    Ok(())
}

/// Command line flags take precedence over the configuration files
fn apply_overrides(
    mut toc: TocConfig,
    start_level: Option<i32>,
    end_level: Option<i32>,
    ordered: bool,
) -> TocConfig {
    if let Some(level) = start_level {
        toc.start_level = level;
    }
    if let Some(level) = end_level {
        toc.end_level = level;
    }
    if ordered {
        toc.ordered = true;
    }
    toc
}

/// Apply the flags to the loaded configuration, then validate what will
/// actually be used
fn resolve_toc(
    config: &Config,
    start_level: Option<i32>,
    end_level: Option<i32>,
    ordered: bool,
) -> (TocConfig, Vec<String>) {
    let toc = apply_overrides(*config.toc(), start_level, end_level, ordered);
    let warnings = config::validate_toc(&toc);
    (toc, warnings)
}

fn render_file(path: &Path, toc_config: &TocConfig) -> BoxResult<String> {
    let root = headings::load_root(path)?;
    Ok(root.to_html_with(toc_config))
}
