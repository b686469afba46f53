//! Builds the initial menu.
//!
//! Records look like `name,price`, one per line. Parsing is forgiving: the
//! name runs up to the first comma, the price is the longest numeric prefix
//! of what follows, and the first record that cannot be read ends the
//! parse while keeping everything before it.

use crate::core::{Menu, MenuItem, MenuSource, Price};
use regex::Regex;
use std::io::Read;
use std::sync::OnceLock;

/// The menu used whenever the menu source cannot be read.
pub fn default_menu() -> Menu {
    let defaults = [
        ("Burger", "199.99"),
        ("Pizza", "159.99"),
        ("Pasta", "149.99"),
        ("Salad", "59.99"),
        ("Soda", "49.99"),
    ];

    Menu::from_items(
        defaults
            .iter()
            .filter_map(|(name, price)| price.parse::<Price>().ok().map(|p| MenuItem::new(*name, p)))
            .collect(),
    )
}

fn price_prefix() -> &'static Regex {
    static PRICE_PREFIX: OnceLock<Regex> = OnceLock::new();
    PRICE_PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
    })
}

/// The leading numeric token of `text`, if any.
fn numeric_prefix(text: &str) -> Option<&str> {
    price_prefix().find(text.trim_start()).map(|m| m.as_str())
}

/// Extracts the leading number of `text`, ignoring whatever trails it.
///
/// `None` also for numbers outside the decimal range (e.g. `1e30`).
pub fn parse_price_prefix(text: &str) -> Option<Price> {
    numeric_prefix(text)?.parse().ok()
}

/// Parses menu records until the first unreadable one.
pub fn parse_menu_records<R: Read>(reader: R) -> Vec<MenuItem> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut items = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Stopped reading menu at record {}: {}", line + 1, e);
                break;
            }
        };

        // 空白行直接略過
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }

        let (Some(name), Some(price_text)) = (record.get(0), record.get(1)) else {
            tracing::debug!("Stopped reading menu at record {}: no price column", line + 1);
            break;
        };

        let Some(number) = numeric_prefix(price_text) else {
            tracing::debug!(
                "Stopped reading menu at record {}: unparseable price {:?}",
                line + 1,
                price_text
            );
            break;
        };

        match number.parse::<Price>() {
            Ok(price) => items.push(MenuItem::new(name.trim_start(), price)),
            Err(_) => {
                tracing::debug!(
                    "Stopped reading menu at record {}: price {} is outside the supported decimal range",
                    line + 1,
                    number
                );
                break;
            }
        }
    }

    items
}

/// Loads the menu from `source`, falling back to [`default_menu`] when it cannot be read.
pub fn load_menu<S: MenuSource>(source: &S) -> Menu {
    match source.load() {
        Ok(items) => {
            tracing::info!("Loaded {} menu items from {}", items.len(), source.describe());
            Menu::from_items(items)
        }
        Err(e) => {
            tracing::warn!(
                "⚠️ Menu source {} unavailable ({}), using the built-in menu",
                source.describe(),
                e
            );
            default_menu()
        }
    }
}
