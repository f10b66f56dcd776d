use std::path::Path;

use serde::de::DeserializeOwned;

/// Serialization format of a data file, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Toml,
    Json,
}

impl DataFormat {
    /// Detect the format from a path's extension.
    ///
    /// Files without an extension are read as YAML. Unknown extensions yield
    /// `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let Some(ext) = path.extension() else {
            return Some(DataFormat::Yaml);
        };
        match ext.to_string_lossy().to_lowercase().as_str() {
            "yml" | "yaml" => Some(DataFormat::Yaml),
            "toml" => Some(DataFormat::Toml),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, String> {
        match self {
            DataFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            DataFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            DataFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataFormat::Yaml => "YAML",
            DataFormat::Toml => "TOML",
            DataFormat::Json => "JSON",
        }
    }
}
