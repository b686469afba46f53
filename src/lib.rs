pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, Settings};

pub use adapters::{LocalMenuFile, ScriptedConsole, StreamConsole};
pub use self::core::{app::MenuApp, loader::load_menu, system::OrderingSystem};
pub use utils::error::{AppError, Result};
