mod config;
mod render;
mod tree;

pub use config::handle_config_command;
pub use render::handle_render_command;
pub use tree::handle_tree_command;
