use log::warn;

use crate::config::types::{Config, TocConfig};
use crate::toc::UNBOUNDED;

/// Validate the configuration
///
/// Nothing here is fatal since every level combination renders. Suspicious
/// settings are logged and returned so callers can surface them.
pub fn validate_config(config: &Config) -> Vec<String> {
    validate_toc(config.toc())
}

/// Check the table of contents levels, logging each warning
pub fn validate_toc(toc: &TocConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if toc.start_level < 1 {
        warnings.push(format!(
            "tableOfContents.startLevel {} is below 1 and behaves like 1",
            toc.start_level
        ));
    }

    if toc.end_level != UNBOUNDED && toc.end_level < toc.start_level.max(1) {
        warnings.push(format!(
            "tableOfContents.endLevel {} is below startLevel {}, the table of contents will be empty",
            toc.end_level, toc.start_level
        ));
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toc(start_level: i32, end_level: i32) -> TocConfig {
        TocConfig {
            start_level,
            end_level,
            ordered: false,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&Config::default()).is_empty());
        assert!(validate_toc(&toc(1, UNBOUNDED)).is_empty());
        assert!(validate_toc(&toc(3, 3)).is_empty());
    }

    #[test]
    fn test_inverted_window() {
        let warnings = validate_toc(&toc(3, 2));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("will be empty"));
    }

    #[test]
    fn test_low_start_level() {
        let warnings = validate_toc(&toc(0, 3));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("below 1"));

        // End level 0 excludes everything even with start at 0
        assert_eq!(validate_toc(&toc(0, 0)).len(), 2);
    }
}
