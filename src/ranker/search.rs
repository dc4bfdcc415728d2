//! Tolerance filtering and ranking.

use std::cmp::Ordering;

use tracing::{debug, info};

use super::config::SearchConfig;
use crate::circuit::{generate_circuits, Circuit};
use crate::combination::Combinations;
use crate::error::{ResistorError, Result};
use crate::stock::Stock;

/// A circuit that met the tolerance, with its distance from the target.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCircuit {
    /// The matching circuit
    pub circuit: Circuit,
    /// `|total_resistance - target|` in ohms
    pub deviation: f64,
}

impl RankedCircuit {
    /// Equivalent resistance of the circuit, in ohms.
    pub fn total_resistance(&self) -> f64 {
        self.circuit.total_resistance()
    }

    /// Number of resistors the circuit uses.
    pub fn component_count(&self) -> usize {
        self.circuit.component_count()
    }

    /// Deviation as a percentage of `target`.
    pub fn deviation_percent(&self, target: f64) -> f64 {
        self.deviation / target * 100.0
    }
}

/// Find the circuits closest to `target_resistance` that can be built from
/// `available_resistors` (`(value, quantity)` pairs).
///
/// Uses the default component and branch bounds of [`SearchConfig`].
/// Returns at most `max_results` circuits; an empty list when nothing is
/// within `tolerance_percent`.
pub fn find_best_circuits(
    available_resistors: &[(f64, usize)],
    target_resistance: f64,
    tolerance_percent: f64,
    max_results: usize,
    prioritize_fewer_components: bool,
) -> Result<Vec<RankedCircuit>> {
    let config = SearchConfig::default()
        .with_tolerance_percent(tolerance_percent)
        .with_max_results(max_results)
        .with_prioritize_fewer_components(prioritize_fewer_components);
    config.validate()?;
    validate_target(target_resistance)?;
    let stock = Stock::new(available_resistors.iter().copied())?;
    find_best_circuits_with(&stock, target_resistance, &config)
}

/// Find the best circuits for `target_resistance` under `config`.
///
/// Every combination the stock supplies is composed into every topology the
/// config allows. Circuits within tolerance are sorted by
/// `(components, deviation)` or `(deviation, components)` depending on
/// [`SearchConfig::prioritize_fewer_components`]; remaining ties keep
/// generation order.
pub fn find_best_circuits_with(
    stock: &Stock,
    target_resistance: f64,
    config: &SearchConfig,
) -> Result<Vec<RankedCircuit>> {
    validate_target(target_resistance)?;
    config.validate()?;

    let allowed = config.allowed_deviation(target_resistance);
    let mut matches: Vec<RankedCircuit> = Vec::new();
    let mut combinations = 0usize;
    let mut examined = 0usize;

    for combination in Combinations::with_max_components(stock, config.max_components)? {
        combinations += 1;
        let before = matches.len();
        for circuit in generate_circuits(&combination, config.max_parallel_branches) {
            examined += 1;
            let deviation = (circuit.total_resistance() - target_resistance).abs();
            if deviation <= allowed {
                matches.push(RankedCircuit { circuit, deviation });
            }
        }
        debug!(
            combination = %combination,
            matches = matches.len() - before,
            "combination searched"
        );
    }

    // Stable sort: equal keys keep generation order.
    if config.prioritize_fewer_components {
        matches.sort_by(|a, b| {
            a.component_count()
                .cmp(&b.component_count())
                .then_with(|| compare_deviation(a, b))
        });
    } else {
        matches.sort_by(|a, b| {
            compare_deviation(a, b).then_with(|| a.component_count().cmp(&b.component_count()))
        });
    }

    info!(
        target = target_resistance,
        combinations,
        circuits = examined,
        within_tolerance = matches.len(),
        "search complete"
    );

    matches.truncate(config.max_results);
    Ok(matches)
}

fn compare_deviation(a: &RankedCircuit, b: &RankedCircuit) -> Ordering {
    a.deviation.total_cmp(&b.deviation)
}

fn validate_target(target_resistance: f64) -> Result<()> {
    if !target_resistance.is_finite() || target_resistance <= 0.0 {
        return Err(ResistorError::InvalidTarget {
            value: target_resistance,
        });
    }
    Ok(())
}
