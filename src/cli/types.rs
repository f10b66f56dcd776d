use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "navtoc")]
#[command(about = "Build and render tables of contents from heading lists", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Custom configuration file(s), defaults to ./_config.{yml,yaml,toml,json}
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Output format for the tree command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    Json,
    Yaml,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render the table of contents as HTML
    #[command(alias = "r")]
    Render {
        /// Headings file (YAML, TOML or JSON)
        headings: PathBuf,

        /// First heading level to include
        #[arg(short, long, value_name = "LEVEL", allow_negative_numbers = true)]
        start_level: Option<i32>,

        /// Last heading level to include, -1 for all
        #[arg(short, long, value_name = "LEVEL", allow_negative_numbers = true)]
        end_level: Option<i32>,

        /// Use ordered lists
        #[arg(long, default_value_t = false)]
        ordered: bool,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Print the heading tree built from a headings file
    Tree {
        /// Headings file (YAML, TOML or JSON)
        headings: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TreeFormat::Json)]
        format: TreeFormat,
    },

    /// Print the effective table of contents configuration
    Config {},
}
