//! Combination generation.
//!
//! A [`Combination`] is the multiset of physical parts one circuit will be
//! built from. [`Combinations`] enumerates every such multiset a [`Stock`]
//! can supply, lazily and without repeats.
//!
//! # Enumeration Order
//!
//! The generator is an odometer over the per-value counts of the normalized
//! stock, with the highest value as the fastest digit. A digit that would
//! exceed either its quantity or the component budget resets to zero and
//! carries, so over-budget branches are never explored.
//!
//! For stock `100Ω x2, 200Ω x1` the sequence is:
//!
//! ```text
//! [200]  [100]  [100, 200]  [100, 100]  [100, 100, 200]
//! ```

use std::fmt;

use crate::error::{ResistorError, Result};
use crate::format::format_resistance;
use crate::stock::Stock;
use crate::{DEFAULT_MAX_COMPONENTS, MAX_COMPONENTS_LIMIT};

/// A multiset of resistor values, stored in non-decreasing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    values: Vec<f64>,
}

impl Combination {
    /// Build a combination from explicit values.
    ///
    /// Values are sorted; each must be finite and positive, and the total
    /// must be between 1 and [`MAX_COMPONENTS_LIMIT`].
    pub fn new(mut values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ResistorError::EmptyCombination);
        }
        if values.len() > MAX_COMPONENTS_LIMIT {
            return Err(ResistorError::TooManyComponents {
                count: values.len(),
                limit: MAX_COMPONENTS_LIMIT,
            });
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(ResistorError::InvalidResistorValue { value: bad });
        }
        values.sort_by(f64::total_cmp);
        Ok(Self { values })
    }

    /// Values in non-decreasing order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of resistors.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a combination holds at least one resistor.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Distinct values with their multiplicities, ascending by value.
    pub fn counts(&self) -> Vec<(f64, usize)> {
        let mut counts: Vec<(f64, usize)> = Vec::new();
        for &value in &self.values {
            match counts.last_mut() {
                Some((last, n)) if *last == value => *n += 1,
                _ => counts.push((value, 1)),
            }
        }
        counts
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}Ω", format_resistance(*value))?;
        }
        write!(f, "]")
    }
}

/// Lazy iterator over every combination a stock can supply.
#[derive(Debug, Clone)]
pub struct Combinations {
    values: Vec<f64>,
    quantities: Vec<usize>,
    counts: Vec<usize>,
    total: usize,
    max_components: usize,
    done: bool,
}

impl Combinations {
    /// Enumerate combinations of at most `max_components` resistors.
    pub fn with_max_components(stock: &Stock, max_components: usize) -> Result<Self> {
        if max_components == 0 || max_components > MAX_COMPONENTS_LIMIT {
            return Err(ResistorError::invalid_max_components(max_components));
        }
        Ok(Self::unchecked(stock, max_components))
    }

    fn unchecked(stock: &Stock, max_components: usize) -> Self {
        let entries = stock.entries();
        Self {
            values: entries.iter().map(|e| e.value).collect(),
            quantities: entries.iter().map(|e| e.quantity).collect(),
            counts: vec![0; entries.len()],
            total: 0,
            max_components,
            done: entries.is_empty(),
        }
    }

    /// Component budget per combination.
    pub fn max_components(&self) -> usize {
        self.max_components
    }

    /// Advance the odometer by one valid state. Returns false once exhausted.
    fn advance(&mut self) -> bool {
        let mut digit = self.counts.len();
        while digit > 0 {
            digit -= 1;
            if self.counts[digit] < self.quantities[digit] && self.total < self.max_components {
                self.counts[digit] += 1;
                self.total += 1;
                return true;
            }
            // Digit exhausted: zero it and carry left.
            self.total -= self.counts[digit];
            self.counts[digit] = 0;
        }
        false
    }

    fn current(&self) -> Combination {
        let values = self
            .counts
            .iter()
            .zip(&self.values)
            .flat_map(|(&n, &value)| std::iter::repeat(value).take(n))
            .collect();
        Combination { values }
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.done {
            return None;
        }
        if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.current())
    }
}

impl std::iter::FusedIterator for Combinations {}

/// Enumerate every combination of up to [`DEFAULT_MAX_COMPONENTS`] resistors.
pub fn generate_resistor_combinations(stock: &Stock) -> Combinations {
    Combinations::unchecked(stock, DEFAULT_MAX_COMPONENTS)
}
