pub mod bftree_toml;
pub mod config;
pub mod logger;

pub use bftree_toml::{BftreeToml, apply_file_to_opts, load_settings};
pub use config::*;
pub use logger::{logger_builder, setup_logging};
