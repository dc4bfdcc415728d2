//! Plain-text reports for the CLI frontend.
//!
//! Each ranked circuit becomes a short block of text: resistance,
//! deviation, topology, part count and an ASCII diagram. Reports can also
//! be saved one file per circuit.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ResistorError, Result};
use crate::format::format_resistance;
use crate::ranker::{RankedCircuit, SearchConfig};
use crate::stock::Stock;

/// Summary printed before the results.
pub fn render_header(stock: &Stock, target: f64, config: &SearchConfig) -> String {
    let entries: Vec<String> = stock.entries().iter().map(ToString::to_string).collect();
    format!(
        "Finding circuits closest to {}Ω (±{}%)\n\
         Available resistors: {}\n\
         Prioritizing fewer components: {}\n",
        format_resistance(target),
        config.tolerance_percent,
        entries.join(", "),
        config.prioritize_fewer_components
    )
}

/// Report for the `index`-th result (1-based).
pub fn render_circuit(index: usize, ranked: &RankedCircuit, target: f64) -> String {
    let circuit = &ranked.circuit;
    format!(
        "Circuit {}:\n\
         Equivalent resistance: {}Ω\n\
         Deviation from target: {}Ω ({:.1}%)\n\
         Configuration: {}\n\
         Arrangement: {}\n\
         Total components: {}\n\
         Circuit diagram:\n\
         {}\n",
        index,
        format_resistance(ranked.total_resistance()),
        format_resistance(ranked.deviation),
        ranked.deviation_percent(target),
        circuit.connection_type(),
        circuit,
        ranked.component_count(),
        circuit.diagram()
    )
}

/// Write a report to `dir/circuit_<index>.txt`, creating `dir` if needed.
pub fn save_report(dir: &Path, index: usize, report: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ResistorError::file_write(dir, e))?;
    let path = dir.join(format!("circuit_{}.txt", index));
    fs::write(&path, report).map_err(|e| ResistorError::file_write(&path, e))?;
    debug!(path = %path.display(), "report saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Circuit::{Leaf, Parallel, Series};
    use tempfile::TempDir;

    fn ranked() -> RankedCircuit {
        RankedCircuit {
            circuit: Series(vec![Leaf(100.0), Parallel(vec![Leaf(100.0), Leaf(100.0)])]),
            deviation: 0.0,
        }
    }

    fn circuit_rows() -> usize {
        ranked().circuit.diagram().lines().count()
    }

    #[test]
    fn test_render_circuit() {
        let report = render_circuit(1, &ranked(), 150.0);
        assert!(report.starts_with("Circuit 1:\n"));
        assert!(report.contains("Equivalent resistance: 150Ω\n"));
        assert!(report.contains("Deviation from target: 0.00Ω (0.0%)\n"));
        assert!(report.contains("Configuration: mixed\n"));
        assert!(report.contains("Arrangement: 100Ω + (100Ω ∥ 100Ω)\n"));
        assert!(report.contains("Total components: 3\n"));
        assert!(report.contains("input >───[R1 100Ω]"));

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[6], "Circuit diagram:");
        assert_eq!(lines.len(), 7 + circuit_rows());
    }

    #[test]
    fn test_render_header() {
        let stock = Stock::new([(100.0, 3usize), (2200.0, 2)]).unwrap();
        let config = SearchConfig::default().with_prioritize_fewer_components(true);
        let header = render_header(&stock, 150.0, &config);
        assert_eq!(
            header,
            "Finding circuits closest to 150Ω (±5%)\n\
             Available resistors: 100Ω x3, 2.20kΩ x2\n\
             Prioritizing fewer components: true\n"
        );
    }

    #[test]
    fn test_save_report() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("reports");
        let path = save_report(&dir, 2, "hello").unwrap();
        assert_eq!(path, dir.join("circuit_2.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }
}
