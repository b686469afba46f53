use crate::core::loader::parse_menu_records;
use crate::domain::model::MenuItem;
use crate::domain::ports::MenuSource;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Menu records stored in a local text file.
#[derive(Debug, Clone)]
pub struct LocalMenuFile {
    path: PathBuf,
}

impl LocalMenuFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuSource for LocalMenuFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<MenuItem>> {
        let data = fs::read(&self.path)?;
        Ok(parse_menu_records(&data[..]))
    }
}
