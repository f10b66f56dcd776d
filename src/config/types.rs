use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Table of contents configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocConfig {
    /// Heading start level to include, starting at h1 (inclusive)
    #[serde(default = "defaults::default_start_level")]
    pub start_level: i32,

    /// Heading end level to include (inclusive), -1 includes everything
    #[serde(default = "defaults::default_end_level")]
    pub end_level: i32,

    /// Whether to produce an ordered list
    #[serde(default = "defaults::default_ordered")]
    pub ordered: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        TocConfig {
            start_level: defaults::default_start_level(),
            end_level: defaults::default_end_level(),
            ordered: defaults::default_ordered(),
        }
    }
}

/// Markup settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupConfig {
    #[serde(default)]
    pub table_of_contents: TocConfig,
}

/// Site configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markup: MarkupConfig,
}

impl Config {
    pub fn toc(&self) -> &TocConfig {
        &self.markup.table_of_contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TocConfig::default();
        assert_eq!(config.start_level, 2);
        assert_eq!(config.end_level, 3);
        assert!(!config.ordered);
        assert_eq!(Config::default().toc(), &config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "markup:\n  tableOfContents:\n    endLevel: -1\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.toc().start_level, 2);
        assert_eq!(config.toc().end_level, -1);
        assert!(!config.toc().ordered);
    }

    #[test]
    fn test_serialized_keys() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("tableOfContents:"));
        assert!(yaml.contains("startLevel: 2"));
        assert!(yaml.contains("endLevel: 3"));
        assert!(yaml.contains("ordered: false"));
    }
}
