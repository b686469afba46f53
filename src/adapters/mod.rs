// Adapters layer: concrete implementations of the domain ports (console, menu storage).

pub mod console;
pub mod menu_file;

pub use console::{ScriptedConsole, StreamConsole};
pub use menu_file::LocalMenuFile;
