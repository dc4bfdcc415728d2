//! Core types for circuit representation.

use std::fmt;

use crate::format::format_resistance;

/// A series/parallel arrangement of resistors.
///
/// Inner nodes always hold at least two children. Children of both node
/// kinds are unordered: swapping two resistors in a series chain changes
/// neither the resistance nor the identity of the shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Circuit {
    /// A single resistor, value in ohms
    Leaf(f64),
    /// Children connected end to end; resistances add
    Series(Vec<Circuit>),
    /// Children connected across the same two nodes; conductances add
    Parallel(Vec<Circuit>),
}

impl Circuit {
    /// Equivalent resistance between the circuit's two terminals.
    pub fn total_resistance(&self) -> f64 {
        match self {
            Circuit::Leaf(value) => *value,
            Circuit::Series(children) => {
                series_resistance(children.iter().map(Circuit::total_resistance))
            }
            Circuit::Parallel(children) => {
                parallel_resistance(children.iter().map(Circuit::total_resistance))
            }
        }
    }

    /// Number of physical resistors in the circuit.
    pub fn component_count(&self) -> usize {
        match self {
            Circuit::Leaf(_) => 1,
            Circuit::Series(children) | Circuit::Parallel(children) => {
                children.iter().map(Circuit::component_count).sum()
            }
        }
    }

    /// Every resistor value used, ascending.
    pub fn values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.component_count());
        self.collect_values(&mut values);
        values.sort_by(f64::total_cmp);
        values
    }

    fn collect_values(&self, out: &mut Vec<f64>) {
        match self {
            Circuit::Leaf(value) => out.push(*value),
            Circuit::Series(children) | Circuit::Parallel(children) => {
                for child in children {
                    child.collect_values(out);
                }
            }
        }
    }

    /// Nesting depth; a lone resistor has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Circuit::Leaf(_) => 0,
            Circuit::Series(children) | Circuit::Parallel(children) => {
                1 + children.iter().map(Circuit::depth).max().unwrap_or(0)
            }
        }
    }

    /// Coarse classification of the topology.
    pub fn connection_type(&self) -> ConnectionType {
        match self {
            Circuit::Leaf(_) => ConnectionType::Single,
            Circuit::Series(children) if children.iter().all(Circuit::is_leaf) => {
                ConnectionType::Series
            }
            Circuit::Parallel(children) if children.iter().all(Circuit::is_leaf) => {
                ConnectionType::Parallel
            }
            _ => ConnectionType::Mixed,
        }
    }

    /// Check if this is a single resistor.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Circuit::Leaf(_))
    }

    /// Multi-line ASCII diagram of the circuit.
    pub fn diagram(&self) -> String {
        super::draw::draw_circuit(self)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (children, separator) = match self {
            Circuit::Leaf(value) => return write!(f, "{}Ω", format_resistance(*value)),
            Circuit::Series(children) => (children, " + "),
            Circuit::Parallel(children) => (children, " ∥ "),
        };
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            if child.is_leaf() {
                write!(f, "{}", child)?;
            } else {
                write!(f, "({})", child)?;
            }
        }
        Ok(())
    }
}

/// How the resistors of a circuit are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    /// One resistor on its own
    Single,
    /// A plain chain of resistors
    Series,
    /// Plain resistors side by side
    Parallel,
    /// Nested series and parallel groups
    Mixed,
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionType::Single => "single",
            ConnectionType::Series => "series",
            ConnectionType::Parallel => "parallel",
            ConnectionType::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// Equivalent resistance of resistances in series.
pub fn series_resistance<I: IntoIterator<Item = f64>>(resistances: I) -> f64 {
    resistances.into_iter().sum()
}

/// Equivalent resistance of resistances in parallel.
///
/// Any 0 Ω branch shorts the whole group, giving 0 Ω. An empty group is
/// also 0 Ω.
pub fn parallel_resistance<I: IntoIterator<Item = f64>>(resistances: I) -> f64 {
    let mut conductance = 0.0;
    let mut branches = 0usize;
    for r in resistances {
        if r == 0.0 {
            return 0.0;
        }
        conductance += 1.0 / r;
        branches += 1;
    }
    if branches == 0 {
        0.0
    } else {
        1.0 / conductance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use Circuit::{Leaf, Parallel, Series};

    #[test]
    fn test_parallel_resistance() {
        assert_relative_eq!(parallel_resistance([100.0, 100.0]), 50.0, epsilon = 1e-9);
        assert_relative_eq!(parallel_resistance([100.0, 200.0, 400.0]), 400.0 / 7.0, epsilon = 1e-9);
        assert_relative_eq!(parallel_resistance([1000.0]), 1000.0);
        assert_relative_eq!(parallel_resistance([100.0; 4]), 25.0, epsilon = 1e-9);
        assert_eq!(parallel_resistance([100.0, 0.0, 220.0]), 0.0);
        assert_eq!(parallel_resistance(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_series_resistance() {
        assert_eq!(series_resistance([100.0, 100.0]), 200.0);
        assert_eq!(series_resistance([100.0, 200.0, 300.0]), 600.0);
        assert_eq!(series_resistance([250.0; 4]), 1000.0);
        assert_eq!(series_resistance(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_nested_circuit() {
        // 100 + (100 || 100) = 150
        let circuit = Series(vec![Leaf(100.0), Parallel(vec![Leaf(100.0), Leaf(100.0)])]);
        assert_relative_eq!(circuit.total_resistance(), 150.0, epsilon = 1e-9);
        assert_eq!(circuit.component_count(), 3);
        assert_eq!(circuit.values(), vec![100.0, 100.0, 100.0]);
        assert_eq!(circuit.depth(), 2);
        assert_eq!(circuit.connection_type(), ConnectionType::Mixed);
        assert_eq!(circuit.to_string(), "100Ω + (100Ω ∥ 100Ω)");
    }

    #[test]
    fn test_zero_branch_shorts_parallel_group() {
        let circuit = Parallel(vec![Leaf(0.0), Series(vec![Leaf(100.0), Leaf(220.0)])]);
        assert_eq!(circuit.total_resistance(), 0.0);
    }

    #[test]
    fn test_connection_types() {
        assert_eq!(Leaf(47.0).connection_type(), ConnectionType::Single);
        assert_eq!(
            Series(vec![Leaf(1.0), Leaf(2.0)]).connection_type(),
            ConnectionType::Series
        );
        assert_eq!(
            Parallel(vec![Leaf(1.0), Leaf(2.0)]).connection_type(),
            ConnectionType::Parallel
        );
        assert_eq!(ConnectionType::Mixed.to_string(), "mixed");
    }

    #[test]
    fn test_display_wraps_nested_groups() {
        let circuit = Parallel(vec![
            Leaf(4700.0),
            Series(vec![Leaf(1000.0), Leaf(2200.0)]),
        ]);
        assert_eq!(circuit.to_string(), "4.70kΩ ∥ (1.00kΩ + 2.20kΩ)");
    }
}
