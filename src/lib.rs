//! # Resistor Finder
//!
//! Find series/parallel networks of stock resistors that approximate a
//! target resistance.
//!
//! This library provides:
//! - Enumeration of every multiset of parts a limited stock can supply
//! - Enumeration of every distinct series/parallel topology for those parts
//! - Ranking by accuracy or by component count within a tolerance band
//! - Engineering-notation formatting and ASCII circuit diagrams
//!
//! ## Architecture
//!
//! The library is organized as a pipeline, leaf to root:
//!
//! - [`stock`] - Validated, normalized parts catalog
//! - [`combination`] - Multisets of parts drawn from the stock
//! - [`circuit`] - Circuit trees, topology enumeration and diagrams
//! - [`ranker`] - Tolerance filtering and sorting
//! - [`format`] - Engineering notation
//! - [`report`] - Text reports (CLI only)
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use resistor_finder::find_best_circuits;
//!
//! let results = find_best_circuits(&[(100.0, 3), (220.0, 2)], 150.0, 10.0, 5, true).unwrap();
//! let best = &results[0];
//! assert_eq!(best.circuit.to_string(), "100Ω + (100Ω ∥ 100Ω)");
//! assert!(best.deviation < 1e-9);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! resfind 150 100:3 220:2 --tolerance 10 --prioritize-fewer
//! ```
//!
//! ## Search Bounds
//!
//! The number of topologies grows superexponentially with the number of
//! parts (8 for three distinct resistors, 52 for four, 5504 for six), so a
//! circuit never holds more than [`MAX_COMPONENTS_LIMIT`] resistors.

pub mod circuit;
pub mod combination;
pub mod error;
pub mod format;
pub mod ranker;
pub mod stock;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use circuit::{generate_circuits, Circuit, ConnectionType};
pub use combination::{generate_resistor_combinations, Combination, Combinations};
pub use error::{ResistorError, Result};
pub use format::{format_resistance, parse_resistance};
pub use ranker::{find_best_circuits, find_best_circuits_with, RankedCircuit, SearchConfig};
pub use stock::{Stock, StockEntry};

/// Default maximum number of resistors per circuit
pub const DEFAULT_MAX_COMPONENTS: usize = 4;

/// Default maximum number of branches in a parallel group
pub const DEFAULT_MAX_PARALLEL_BRANCHES: usize = 3;

/// Hard cap on resistors per circuit
pub const MAX_COMPONENTS_LIMIT: usize = 6;
