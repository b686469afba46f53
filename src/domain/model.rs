use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A menu price held as an exact decimal.
///
/// Display always renders exactly two decimals, rounding half away from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid price: {0:?}")]
pub struct PriceParseError(pub String);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// `None` when the sum leaves the decimal range.
    pub fn checked_add(self, rhs: Price) -> Option<Price> {
        self.0.checked_add(rhs.0).map(Price)
    }

    /// The value as shown to the user: two decimals, midpoint away from zero.
    ///
    /// Values with 28 or more integer digits cannot carry two decimals; their
    /// scale stays lower and `Display` pads the zeros.
    pub fn rounded(&self) -> Decimal {
        let mut value = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);
        value
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        match rounded.scale() {
            0 => write!(f, "{}.00", rounded),
            1 => write!(f, "{}0", rounded),
            _ => write!(f, "{}", rounded),
        }
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    /// Accepts `5`, `5.`, `.5`, `-5.25`, `1.5e2` and the like.
    ///
    /// Values outside the decimal range (about ±7.9e28, at most 28 fractional
    /// digits) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PriceParseError(s.to_string());
        let text = s.trim();

        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
            None => (text, None),
        };

        let (negative, digits) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let digits = digits.strip_suffix('.').unwrap_or(digits);
        if digits.is_empty() || digits == "." {
            return Err(invalid());
        }

        let mut normalized = String::with_capacity(text.len() + 1);
        if negative {
            normalized.push('-');
        }
        if digits.starts_with('.') {
            normalized.push('0');
        }
        normalized.push_str(digits);

        let value = match exponent {
            Some(exp) => {
                let exp = exp.strip_prefix('+').unwrap_or(exp);
                if exp.is_empty() {
                    return Err(invalid());
                }
                Decimal::from_scientific(&format!("{}e{}", normalized, exp))
            }
            None => Decimal::from_str(&normalized),
        };

        value.map(Price).map_err(|_| invalid())
    }
}

/// An item offered on the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Ordering applied by [`Menu::sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    Name,
    #[default]
    Price,
}

impl SortKey {
    /// Maps the user-facing choice (1 = name, 2 = price).
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(SortKey::Name),
            2 => Some(SortKey::Price),
            _ => None,
        }
    }
}

/// The mutable catalog. Indices on the public surface are 1-based.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Returns the item at the 1-based `index`.
    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Removes the item at the 1-based `index`; later items shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<MenuItem> {
        if index == 0 || index > self.items.len() {
            return None;
        }
        Some(self.items.remove(index - 1))
    }

    /// Stable sort: items with equal keys keep their relative order.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self.items.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Price => self.items.sort_by(|a, b| a.price.cmp(&b.price)),
        }
    }
}

/// Items selected by the customer, copied out of the menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    items: Vec<MenuItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact sum of the item prices, `None` if it overflows.
    pub fn total(&self) -> Option<Price> {
        self.items
            .iter()
            .try_fold(Price::ZERO, |sum, item| sum.checked_add(item.price))
    }
}
