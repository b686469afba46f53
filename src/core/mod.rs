pub mod app;
pub mod display;
pub mod loader;
pub mod system;

pub use crate::domain::model::{Menu, MenuItem, Order, Price, SortKey};
pub use crate::domain::ports::{ConfigProvider, Console, MenuSource};
pub use crate::utils::error::Result;
