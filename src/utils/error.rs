use crate::utils::input::InputError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Console input error: {0}")]
    InputError(#[from] InputError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(_) | AppError::InputError(_) => {
                "The console could not be read from or written to.".to_string()
            }
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::ConfigValidationError { field, .. }
            | AppError::InvalidConfigValueError { field, .. } => {
                format!("The setting '{}' is not valid.", field)
            }
        }
    }

    /// 建議的修復方式
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::IoError(_) | AppError::InputError(_) => {
                "Check that standard input and output are attached to a terminal or a readable file."
            }
            AppError::ConfigError { .. } | AppError::ConfigValidationError { .. } => {
                "Check the TOML config file syntax, e.g. [menu] file = \"menu.txt\"."
            }
            AppError::InvalidConfigValueError { .. } => {
                "Pass a valid value with --menu-file / --currency or fix the config file."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
