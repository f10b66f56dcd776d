use std::path::Path;

use navtoc::headings;
use navtoc::toc::Root;
use navtoc::utils::error::{BoxResult, NavtocError};

use crate::cli::types::{Commands, TreeFormat};

/// Handle the tree command
pub fn handle_tree_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Tree {
        headings: headings_path,
        format,
    } = command
    {
        let root = headings::load_root(headings_path)?;
        println!("{}", dump_tree(&root, *format, headings_path)?);
    }
    Ok(())
}

fn dump_tree(root: &Root, format: TreeFormat, source: &Path) -> BoxResult<String> {
    let dumped = match format {
        TreeFormat::Json => serde_json::to_string_pretty(root).map_err(|e| e.to_string()),
        TreeFormat::Yaml => serde_yaml::to_string(root).map_err(|e| e.to_string()),
    };
    dumped.map_err(|e| {
        NavtocError::Generic(format!("Failed to serialize tree for {}: {}", source.display(), e)).into()
    })
}
