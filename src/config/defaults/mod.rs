pub mod values;

// Export the default values
pub use values::*;

/// Configuration file names to look for, merged in this order
pub const CONFIG_FILES: [&str; 4] = [
    "_config.yml",
    "_config.yaml",
    "_config.toml",
    "_config.json",
];
