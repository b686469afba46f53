pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_MENU_FILE: &str = "menu.txt";
pub const DEFAULT_CURRENCY: &str = "$";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "food-order")]
#[command(about = "Console food ordering system: manage a menu and take an order")]
pub struct CliConfig {
    #[arg(long, help = "Menu file with one `name,price` record per line [default: menu.txt]")]
    pub menu_file: Option<PathBuf>,

    #[arg(long, help = "Optional TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Currency symbol printed before prices [default: $]")]
    pub currency: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value = "compact", help = "Log output format")]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the flags with the optional config file.
    pub fn settings(&self) -> Result<Settings> {
        let file = self.config.as_ref().map(TomlConfig::from_file).transpose()?;
        Ok(Settings::resolve(
            self.menu_file.clone(),
            self.currency.clone(),
            file.as_ref(),
        ))
    }
}

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub menu_file: PathBuf,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            menu_file: PathBuf::from(DEFAULT_MENU_FILE),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Settings {
    /// Flag > config file > default.
    pub fn resolve(
        menu_file: Option<PathBuf>,
        currency: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();

        Self {
            menu_file: menu_file
                .or_else(|| file.and_then(|f| f.menu_file()).map(PathBuf::from))
                .unwrap_or(defaults.menu_file),
            currency: currency
                .or_else(|| file.and_then(|f| f.currency()).map(str::to_string))
                .unwrap_or(defaults.currency),
        }
    }
}

impl ConfigProvider for Settings {
    fn menu_file(&self) -> &Path {
        &self.menu_file
    }

    fn currency_symbol(&self) -> &str {
        &self.currency
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("menu.file", &self.menu_file.to_string_lossy())?;
        validate_non_empty_string("display.currency", &self.currency)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, None, None);
        assert_eq!(settings.menu_file(), Path::new("menu.txt"));
        assert_eq!(settings.currency_symbol(), "$");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_precedence_flag_over_file_over_default() {
        let file = TomlConfig::from_toml_str(
            "[menu]\nfile = \"from_file.txt\"\n[display]\ncurrency = \"€\"\n",
        )
        .unwrap();

        let settings = Settings::resolve(None, None, Some(&file));
        assert_eq!(settings.menu_file, PathBuf::from("from_file.txt"));
        assert_eq!(settings.currency, "€");

        let settings = Settings::resolve(
            Some(PathBuf::from("flag.txt")),
            Some("¥".to_string()),
            Some(&file),
        );
        assert_eq!(settings.menu_file, PathBuf::from("flag.txt"));
        assert_eq!(settings.currency, "¥");
    }

    #[test]
    fn test_validation_rejects_blank_values() {
        let settings = Settings {
            menu_file: PathBuf::new(),
            currency: "$".to_string(),
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            menu_file: PathBuf::from("menu.txt"),
            currency: " ".to_string(),
        };
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::try_parse_from(["food-order"]).unwrap();
        assert_eq!(cli.menu_file, None);
        assert!(!cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Compact);
        assert_eq!(cli.settings().unwrap(), Settings::default());

        let cli = CliConfig::try_parse_from([
            "food-order",
            "--menu-file",
            "dinner.txt",
            "--currency",
            "€",
            "--verbose",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Json);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.menu_file, PathBuf::from("dinner.txt"));
        assert_eq!(settings.currency, "€");
    }
}
