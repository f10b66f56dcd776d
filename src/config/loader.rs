use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::config::defaults::CONFIG_FILES;
use crate::config::types::{Config, TocConfig};
use crate::utils::error::{BoxResult, NavtocError};
use crate::utils::format::DataFormat;
use crate::utils::fs;

/// On-disk shape of a config file. Unset keys leave earlier values alone.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    markup: MarkupFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkupFile {
    #[serde(default)]
    table_of_contents: TocFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TocFile {
    start_level: Option<i32>,
    end_level: Option<i32>,
    ordered: Option<bool>,
}

/// Load configuration from config files
///
/// With `config_files` unset, the default `_config.*` files found in
/// `source_dir` are used. Files are merged in order, later ones win.
/// The result is not validated, see `validate_config`.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    // Start with default configuration
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(NavtocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        ))
        .into());
    }

    let format = DataFormat::from_path(config_path).ok_or_else(|| {
        NavtocError::Config(format!(
            "Unsupported configuration file format: {}",
            config_path.display()
        ))
    })?;

    let content = fs::read_file(config_path)?;
    if content.trim().is_empty() {
        debug!("Configuration file {} is empty", config_path.display());
        return Ok(());
    }

    let file: ConfigFile = format.parse(&content).map_err(|e| {
        NavtocError::Config(format!(
            "Failed to parse {} configuration ({}): {}",
            format.name(),
            config_path.display(),
            e
        ))
    })?;

    merge_toc(&mut config.markup.table_of_contents, &file.markup.table_of_contents);
    Ok(())
}

fn merge_toc(target: &mut TocConfig, source: &TocFile) {
    if let Some(start_level) = source.start_level {
        target.start_level = start_level;
    }
    if let Some(end_level) = source.end_level {
        target.end_level = end_level;
    }
    if let Some(ordered) = source.ordered {
        target.ordered = ordered;
    }
}
