//! Resistor stock: the catalog of parts a search may draw from.

use std::fmt;

use tracing::warn;

use crate::error::{ResistorError, Result};
use crate::format::{format_resistance, parse_resistance};

/// One line of the parts catalog: a resistor value and how many are on hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockEntry {
    /// Resistance in ohms
    pub value: f64,
    /// Number of resistors of this value available
    pub quantity: usize,
}

impl StockEntry {
    /// Create a new stock entry.
    pub fn new(value: f64, quantity: usize) -> Self {
        Self { value, quantity }
    }

    /// Parse a `value:count` entry such as `4.7k:3`.
    pub fn parse(text: &str) -> Result<Self> {
        let (value_text, count_text) = text
            .split_once(':')
            .ok_or_else(|| ResistorError::invalid_stock_entry(text, "expected 'value:count'"))?;

        let value = parse_resistance(value_text).ok_or_else(|| {
            ResistorError::invalid_stock_entry(text, format!("'{}' is not a resistance", value_text))
        })?;
        let quantity = count_text.trim().parse::<usize>().map_err(|_| {
            ResistorError::invalid_stock_entry(
                text,
                format!("'{}' is not a non-negative count", count_text),
            )
        })?;

        Ok(Self { value, quantity })
    }
}

impl From<(f64, usize)> for StockEntry {
    fn from((value, quantity): (f64, usize)) -> Self {
        Self::new(value, quantity)
    }
}

impl fmt::Display for StockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Ω x{}", format_resistance(self.value), self.quantity)
    }
}

/// A validated, normalized parts catalog.
///
/// Entries are sorted by ascending value, values are unique, and every
/// quantity is non-zero. Enumeration order therefore does not depend on the
/// order the caller listed the parts in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stock {
    entries: Vec<StockEntry>,
}

impl Stock {
    /// Validate and normalize a list of stock entries.
    ///
    /// Fails on any value that is not finite and positive, even if its
    /// quantity is zero. Duplicate values are merged by summing quantities.
    pub fn new<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<StockEntry>,
    {
        let mut merged: Vec<StockEntry> = Vec::new();

        for entry in entries.into_iter().map(Into::into) {
            if !entry.value.is_finite() || entry.value <= 0.0 {
                return Err(ResistorError::InvalidResistorValue { value: entry.value });
            }
            if entry.quantity == 0 {
                continue;
            }
            match merged.iter_mut().find(|e| e.value == entry.value) {
                Some(existing) => {
                    warn!(
                        value = entry.value,
                        "duplicate stock value, merging quantities"
                    );
                    existing.quantity = existing.quantity.saturating_add(entry.quantity);
                }
                None => merged.push(entry),
            }
        }

        merged.sort_by(|a, b| a.value.total_cmp(&b.value));
        Ok(Self { entries: merged })
    }

    /// Parse a list of `value:count` entries.
    pub fn parse<S: AsRef<str>>(items: &[S]) -> Result<Self> {
        let entries = items
            .iter()
            .map(|item| StockEntry::parse(item.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Normalized entries, ascending by value.
    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    /// Number of distinct values on hand.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no resistors are available at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of physical resistors on hand.
    pub fn total_quantity(&self) -> usize {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Quantity available for a given value (0 if absent).
    pub fn quantity_of(&self, value: f64) -> usize {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map_or(0, |e| e.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_normalization() {
        let stock = Stock::new([(220.0, 1usize), (100.0, 2), (47.0, 0), (220.0, 2)]).unwrap();
        assert_eq!(
            stock.entries(),
            &[StockEntry::new(100.0, 2), StockEntry::new(220.0, 3)]
        );
        assert_eq!(stock.total_quantity(), 5);
        assert_eq!(stock.quantity_of(220.0), 3);
        assert_eq!(stock.quantity_of(47.0), 0);
    }

    #[test]
    fn test_merge_saturates_quantity() {
        let stock = Stock::new([(100.0, usize::MAX), (100.0, 1)]).unwrap();
        assert_eq!(stock.len(), 1);
        assert_eq!(stock.quantity_of(100.0), usize::MAX);
    }

    #[test]
    fn test_stock_rejects_bad_values() {
        for value in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let err = Stock::new([(value, 1usize)]).unwrap_err();
            assert!(matches!(err, ResistorError::InvalidResistorValue { .. }));
        }
        // Zero quantity does not excuse an invalid value.
        assert!(Stock::new([(-1.0, 0usize)]).is_err());
    }

    #[test]
    fn test_empty_stock() {
        let stock = Stock::new(Vec::<StockEntry>::new()).unwrap();
        assert!(stock.is_empty());
        assert_eq!(stock.len(), 0);
    }

    #[test]
    fn test_parse_entries() {
        let stock = Stock::parse(&["4.7k:3", "100:2"]).unwrap();
        assert_eq!(
            stock.entries(),
            &[StockEntry::new(100.0, 2), StockEntry::new(4700.0, 3)]
        );

        assert!(matches!(
            StockEntry::parse("100"),
            Err(ResistorError::InvalidStockEntry { .. })
        ));
        assert!(StockEntry::parse("abc:2").is_err());
        assert!(StockEntry::parse("100:-2").is_err());
        assert!(StockEntry::parse("100:x").is_err());
    }
}
