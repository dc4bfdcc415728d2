//! Ranking of candidate circuits against a target resistance.
//!
//! The ranker drives the whole pipeline: every combination from the stock
//! is composed into every allowed topology, circuits outside the tolerance
//! band are dropped, and the rest are sorted by the configured priority.
//!
//! | Priority | Primary key | Secondary key |
//! |----------|-------------|---------------|
//! | fewer components | component count | deviation |
//! | accuracy | deviation | component count |
//!
//! Ties on both keys keep generation order, so identical inputs always give
//! identical output.

mod config;
mod search;

pub use config::{SearchConfig, EXACT_MATCH_EPSILON};
pub use search::{find_best_circuits, find_best_circuits_with, RankedCircuit};
