use crate::domain::model::MenuItem;
use crate::utils::error::Result;
use crate::utils::input::{parse_number, InputError};
use std::path::Path;
use std::str::FromStr;

/// Line-oriented console used by every interactive flow.
pub trait Console {
    /// Reads one line without its trailing newline. `InputError::Closed` on end of input.
    fn read_line(&mut self) -> std::result::Result<String, InputError>;

    /// Writes `text` without a newline and flushes, for prompts.
    fn prompt(&mut self, text: &str) -> Result<()>;

    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Reads a line and parses its first token as a number.
    ///
    /// The whole line is consumed either way, so a rejected token never
    /// lingers for the next read.
    fn read_number<T: FromStr>(&mut self) -> std::result::Result<T, InputError> {
        let line = self.read_line()?;
        parse_number(&line)
    }
}

/// Where the initial menu comes from.
pub trait MenuSource {
    /// Human readable origin used in log messages.
    fn describe(&self) -> String;

    /// Reads and parses the records. `Err` only when the source cannot be read at all.
    fn load(&self) -> Result<Vec<MenuItem>>;
}

pub trait ConfigProvider {
    fn menu_file(&self) -> &Path;
    fn currency_symbol(&self) -> &str;
}
