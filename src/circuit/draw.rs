//! ASCII circuit diagrams.
//!
//! Each sub-circuit is laid out as a rectangular block of characters with
//! one *wire row* where current enters on the left and leaves on the right.
//! Series children are placed side by side with their wire rows aligned;
//! parallel branches are stacked and joined by vertical rails.
//!
//! ```text
//!                      ┌─[R2 100Ω]─┐
//! input >───[R1 100Ω]──┤           ├──> output
//!                      └─[R3 100Ω]─┘
//! ```
//!
//! Resistors are numbered depth first.

use super::types::Circuit;
use crate::format::format_resistance;

/// A laid-out sub-circuit. All rows have the same width.
#[derive(Debug, Clone)]
struct Block {
    rows: Vec<Vec<char>>,
    /// Index of the wire row
    mid: usize,
}

impl Block {
    fn text(text: &str) -> Self {
        Self {
            rows: vec![text.chars().collect()],
            mid: 0,
        }
    }

    fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Render a circuit between `input` and `output` terminals.
pub fn draw_circuit(circuit: &Circuit) -> String {
    let mut counter = 0;
    let body = layout(circuit, &mut counter);
    let full = beside(vec![
        Block::text("input >─"),
        body,
        Block::text("─> output"),
    ]);

    full.rows
        .iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn layout(circuit: &Circuit, counter: &mut usize) -> Block {
    match circuit {
        Circuit::Leaf(value) => {
            *counter += 1;
            Block::text(&format!("─[R{} {}Ω]─", counter, format_resistance(*value)))
        }
        Circuit::Series(children) => {
            beside(children.iter().map(|c| layout(c, counter)).collect())
        }
        Circuit::Parallel(children) => {
            stacked(children.iter().map(|c| layout(c, counter)).collect())
        }
    }
}

/// Place blocks left to right, wire rows aligned, joined by one wire segment.
fn beside(blocks: Vec<Block>) -> Block {
    let above = blocks.iter().map(|b| b.mid).max().unwrap_or(0);
    let below = blocks
        .iter()
        .map(|b| b.height() - b.mid - 1)
        .max()
        .unwrap_or(0);
    let mut rows: Vec<Vec<char>> = vec![Vec::new(); above + below + 1];

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            for (r, row) in rows.iter_mut().enumerate() {
                row.push(if r == above { '─' } else { ' ' });
            }
        }
        let offset = above - block.mid;
        let width = block.width();
        for (r, row) in rows.iter_mut().enumerate() {
            match r.checked_sub(offset).and_then(|br| block.rows.get(br)) {
                Some(source) => row.extend_from_slice(source),
                None => row.extend(std::iter::repeat(' ').take(width)),
            }
        }
    }

    Block { rows, mid: above }
}

/// Stack blocks top to bottom with a gap row between them and rails on
/// both sides. Shorter branches are extended with wire to the widest one.
fn stacked(blocks: Vec<Block>) -> Block {
    let inner = blocks.iter().map(Block::width).max().unwrap_or(0);
    let mut rows: Vec<Vec<char>> = Vec::new();
    let mut branch_rows = Vec::with_capacity(blocks.len());

    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            rows.push(vec![' '; inner]);
        }
        branch_rows.push(rows.len() + block.mid);
        let mid = block.mid;
        for (r, mut row) in block.rows.into_iter().enumerate() {
            row.resize(inner, if r == mid { '─' } else { ' ' });
            rows.push(row);
        }
    }

    let first = branch_rows.first().copied().unwrap_or(0);
    let last = branch_rows.last().copied().unwrap_or(0);
    let mid = (first + last) / 2;

    for (r, row) in rows.iter_mut().enumerate() {
        let (left, right) = rails(r, first, last, mid, branch_rows.contains(&r));
        row.insert(0, left);
        row.push(right);
    }

    Block { rows, mid }
}

/// Left and right rail characters for row `r`.
fn rails(r: usize, first: usize, last: usize, mid: usize, is_branch: bool) -> (char, char) {
    if r < first || r > last {
        return (' ', ' ');
    }
    match (is_branch, r == mid) {
        (true, _) if r == first => ('┌', '┐'),
        (true, _) if r == last => ('└', '┘'),
        (true, true) => ('┼', '┼'),
        (true, false) => ('├', '┤'),
        (false, true) => ('┤', '├'),
        (false, false) => ('│', '│'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Circuit::{Leaf, Parallel, Series};

    #[test]
    fn test_single_resistor() {
        assert_eq!(draw_circuit(&Leaf(470.0)), "input >───[R1 470Ω]───> output");
    }

    #[test]
    fn test_series_chain() {
        let circuit = Series(vec![Leaf(100.0), Leaf(220.0)]);
        assert_eq!(
            draw_circuit(&circuit),
            "input >───[R1 100Ω]───[R2 220Ω]───> output"
        );
    }

    #[test]
    fn test_parallel_pair() {
        let circuit = Parallel(vec![Leaf(100.0), Leaf(220.0)]);
        let expected = [
            "         ┌─[R1 100Ω]─┐",
            "input >──┤           ├──> output",
            "         └─[R2 220Ω]─┘",
        ]
        .join("\n");
        assert_eq!(draw_circuit(&circuit), expected);
    }

    #[test]
    fn test_three_branches_cross_the_wire_row() {
        let circuit = Parallel(vec![Leaf(1.0), Leaf(2.0), Leaf(3.0)]);
        let drawing = draw_circuit(&circuit);
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("input >──┼"));
        assert!(lines[2].ends_with("┼──> output"));
        assert!(lines[1].contains('│'));
    }

    #[test]
    fn test_nested_circuit() {
        // 100 + (100 || (220 + 220))
        let circuit = Series(vec![
            Leaf(100.0),
            Parallel(vec![Leaf(100.0), Series(vec![Leaf(220.0), Leaf(220.0)])]),
        ]);
        let drawing = draw_circuit(&circuit);
        let lines: Vec<&str> = drawing.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("┌─[R2 100Ω]─"));
        assert!(lines[1].starts_with("input >───[R1 100Ω]──┤"));
        assert!(lines[1].ends_with("├──> output"));
        assert!(lines[2].contains("└─[R3 220Ω]───[R4 220Ω]─┘"));

        // Rails align: the top and bottom corners share columns.
        let col = |line: &str, c: char| line.chars().position(|x| x == c);
        assert_eq!(col(lines[0], '┌'), col(lines[2], '└'));
        assert_eq!(col(lines[0], '┐'), col(lines[2], '┘'));
    }
}
