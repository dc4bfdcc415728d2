//! Topology enumeration.
//!
//! Shapes are built over value *labels* (indices into the combination's
//! distinct values) so they can be hashed and ordered exactly. Every shape is
//! kept in canonical form:
//!
//! - children of a node are sorted;
//! - a series node never has a series child, a parallel node never has a
//!   parallel child (those would flatten into the parent).
//!
//! Two circuits are therefore the same shape exactly when their canonical
//! forms are equal, and each is emitted once.

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use super::types::Circuit;
use crate::combination::Combination;

/// Canonical circuit shape over value labels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Shape {
    Leaf(usize),
    Series(Vec<Shape>),
    Parallel(Vec<Shape>),
}

impl Shape {
    fn to_circuit(&self, values: &[f64]) -> Circuit {
        match self {
            Shape::Leaf(label) => Circuit::Leaf(values[*label]),
            Shape::Series(children) => {
                Circuit::Series(children.iter().map(|c| c.to_circuit(values)).collect())
            }
            Shape::Parallel(children) => {
                Circuit::Parallel(children.iter().map(|c| c.to_circuit(values)).collect())
            }
        }
    }
}

/// Where a sub-multiset sits in the tree; restricts the allowed node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Role {
    /// Top level: any kind
    Root,
    /// Inside a series node: leaf or parallel
    SeriesChild,
    /// Inside a parallel node: leaf or series
    ParallelChild,
}

/// Memoized shape enumerator for one combination.
struct Composer {
    max_parallel_branches: usize,
    memo: HashMap<(Vec<usize>, Role), Vec<Shape>>,
}

impl Composer {
    fn new(max_parallel_branches: usize) -> Self {
        Self {
            max_parallel_branches,
            memo: HashMap::new(),
        }
    }

    /// All canonical shapes over the multiset `counts` allowed in `role`.
    fn shapes(&mut self, counts: &[usize], role: Role) -> Vec<Shape> {
        let key = (counts.to_vec(), role);
        if let Some(cached) = self.memo.get(&key) {
            return cached.clone();
        }

        let mut found = BTreeSet::new();
        let total: usize = counts.iter().sum();

        if total == 1 {
            if let Some(label) = counts.iter().position(|&n| n == 1) {
                found.insert(Shape::Leaf(label));
            }
        } else {
            if role != Role::SeriesChild {
                for blocks in multiset_partitions(counts, usize::MAX) {
                    for children in self.child_choices(&blocks, Role::SeriesChild) {
                        found.insert(Shape::Series(children));
                    }
                }
            }
            if role != Role::ParallelChild && self.max_parallel_branches >= 2 {
                for blocks in multiset_partitions(counts, self.max_parallel_branches) {
                    for children in self.child_choices(&blocks, Role::ParallelChild) {
                        found.insert(Shape::Parallel(children));
                    }
                }
            }
        }

        let shapes: Vec<Shape> = found.into_iter().collect();
        self.memo.insert(key, shapes.clone());
        shapes
    }

    /// Cartesian product of the shapes of each block, children sorted.
    fn child_choices(&mut self, blocks: &[Vec<usize>], role: Role) -> Vec<Vec<Shape>> {
        let mut choices: Vec<Vec<Shape>> = vec![Vec::new()];
        for block in blocks {
            let options = self.shapes(block, role);
            if options.is_empty() {
                return Vec::new();
            }
            choices = choices
                .into_iter()
                .flat_map(|prefix| {
                    options.iter().map(move |option| {
                        let mut next = prefix.clone();
                        next.push(option.clone());
                        next
                    })
                })
                .collect();
        }
        for children in &mut choices {
            children.sort();
        }
        choices
    }
}

/// Every way to split a multiset into 2..=`max_blocks` unordered non-empty
/// blocks. Blocks within a partition are sorted.
fn multiset_partitions(counts: &[usize], max_blocks: usize) -> BTreeSet<Vec<Vec<usize>>> {
    let mut out = BTreeSet::new();
    let mut blocks = Vec::new();
    partition_into(counts.to_vec(), &mut blocks, max_blocks, &mut out);
    out
}

fn partition_into(
    rest: Vec<usize>,
    blocks: &mut Vec<Vec<usize>>,
    max_blocks: usize,
    out: &mut BTreeSet<Vec<Vec<usize>>>,
) {
    let anchor = match rest.iter().position(|&n| n > 0) {
        Some(anchor) => anchor,
        None => {
            if blocks.len() >= 2 {
                let mut partition = blocks.clone();
                partition.sort();
                out.insert(partition);
            }
            return;
        }
    };
    if blocks.len() == max_blocks {
        return;
    }

    // The next block always takes one unit of the first remaining label.
    let mut remaining = rest;
    remaining[anchor] -= 1;
    for extra in sub_multisets(&remaining) {
        let mut block = extra.clone();
        block[anchor] += 1;
        let next: Vec<usize> = remaining.iter().zip(&extra).map(|(r, e)| r - e).collect();
        blocks.push(block);
        partition_into(next, blocks, max_blocks, out);
        blocks.pop();
    }
}

/// Every sub-multiset of `counts`, including the empty one.
fn sub_multisets(counts: &[usize]) -> Vec<Vec<usize>> {
    let mut subsets = vec![Vec::with_capacity(counts.len())];
    for &limit in counts {
        subsets = subsets
            .into_iter()
            .flat_map(|prefix| {
                (0..=limit).map(move |k| {
                    let mut next = prefix.clone();
                    next.push(k);
                    next
                })
            })
            .collect();
    }
    subsets
}

/// Iterator over the distinct circuits built from one combination.
#[derive(Debug, Clone)]
pub struct Circuits {
    inner: std::vec::IntoIter<Circuit>,
}

impl Iterator for Circuits {
    type Item = Circuit;

    fn next(&mut self) -> Option<Circuit> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Circuits {}

/// Enumerate every distinct series/parallel circuit that uses exactly the
/// resistors of `combination`.
///
/// Parallel nodes get at most `max_parallel_branches` branches; a bound
/// below 2 allows only the flat series chain. Output order is deterministic.
pub fn generate_circuits(combination: &Combination, max_parallel_branches: usize) -> Circuits {
    let (values, counts): (Vec<f64>, Vec<usize>) = combination.counts().into_iter().unzip();

    let mut composer = Composer::new(max_parallel_branches);
    let circuits: Vec<Circuit> = composer
        .shapes(&counts, Role::Root)
        .iter()
        .map(|shape| shape.to_circuit(&values))
        .collect();

    trace!(
        combination = %combination,
        circuits = circuits.len(),
        "composed circuits"
    );

    Circuits {
        inner: circuits.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use Circuit::{Leaf, Parallel, Series};

    fn combo(values: &[f64]) -> Combination {
        Combination::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_single_resistor() {
        let circuits: Vec<Circuit> = generate_circuits(&combo(&[100.0]), 3).collect();
        assert_eq!(circuits, vec![Leaf(100.0)]);
    }

    #[test]
    fn test_two_resistors() {
        let circuits: Vec<Circuit> = generate_circuits(&combo(&[220.0, 100.0]), 3).collect();
        assert_eq!(
            circuits,
            vec![
                Series(vec![Leaf(100.0), Leaf(220.0)]),
                Parallel(vec![Leaf(100.0), Leaf(220.0)]),
            ]
        );
    }

    #[test]
    fn test_identical_resistors() {
        let circuits: Vec<Circuit> = generate_circuits(&combo(&[100.0; 3]), 3).collect();
        let mut resistances: Vec<f64> = circuits.iter().map(Circuit::total_resistance).collect();
        resistances.sort_by(f64::total_cmp);

        // a∥a∥a, a∥(a+a), a+(a∥a), a+a+a
        assert_eq!(circuits.len(), 4);
        assert_relative_eq!(resistances[0], 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(resistances[1], 200.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(resistances[2], 150.0, epsilon = 1e-9);
        assert_relative_eq!(resistances[3], 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_counts_match_series_parallel_networks() {
        // Labelled series-parallel networks: 1, 2, 8, 52, 472.
        assert_eq!(generate_circuits(&combo(&[1.0, 2.0, 3.0]), 3).count(), 8);
        assert_eq!(generate_circuits(&combo(&[1.0, 2.0, 3.0, 4.0]), 4).count(), 52);
        assert_eq!(generate_circuits(&combo(&[1.0, 2.0, 3.0, 4.0, 5.0]), 5).count(), 472);
    }

    #[test]
    fn test_branch_limit() {
        // Two branches at most: a∥b∥c is no longer allowed.
        let circuits: Vec<Circuit> = generate_circuits(&combo(&[1.0, 2.0, 3.0]), 2).collect();
        assert_eq!(circuits.len(), 7);
        for circuit in &circuits {
            if let Parallel(children) = circuit {
                assert_eq!(children.len(), 2);
            }
        }
    }

    #[test]
    fn test_series_only_below_two_branches() {
        for limit in [0, 1] {
            let circuits: Vec<Circuit> =
                generate_circuits(&combo(&[100.0, 220.0, 470.0]), limit).collect();
            assert_eq!(
                circuits,
                vec![Series(vec![Leaf(100.0), Leaf(220.0), Leaf(470.0)])]
            );
        }
    }

    #[test]
    fn test_multiset_partitions() {
        let partitions = multiset_partitions(&[2, 1], usize::MAX);
        // {a}{a}{b}, {a}{ab}, {aa}{b}
        assert_eq!(partitions.len(), 3);
        assert_eq!(multiset_partitions(&[2, 1], 2).len(), 2);
        assert!(multiset_partitions(&[1], usize::MAX).is_empty());
    }

    fn arb_values() -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(
            prop_oneof![Just(10.0), Just(47.0), Just(100.0), Just(220.0)],
            1..=5,
        )
    }

    proptest! {
        #[test]
        fn prop_circuits_use_exactly_the_combination(
            values in arb_values(),
            branches in 0usize..5,
        ) {
            let combination = combo(&values);
            let circuits: Vec<Circuit> = generate_circuits(&combination, branches).collect();
            prop_assert!(!circuits.is_empty());

            for circuit in &circuits {
                prop_assert_eq!(circuit.component_count(), combination.len());
                prop_assert_eq!(circuit.values(), combination.values().to_vec());
                let resistance = circuit.total_resistance();
                prop_assert!(resistance > 0.0 && resistance.is_finite());
            }
            for (i, a) in circuits.iter().enumerate() {
                for b in &circuits[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }

        #[test]
        fn prop_series_order_does_not_change_resistance(values in arb_values()) {
            let forward = Series(values.iter().copied().map(Leaf).collect());
            let backward = Series(values.iter().rev().copied().map(Leaf).collect());
            prop_assert!((forward.total_resistance() - backward.total_resistance()).abs() < 1e-9);
        }

        #[test]
        fn prop_parallel_below_smallest_branch(values in arb_values(), extra in 1.0f64..1e6) {
            prop_assume!(values.len() >= 2);
            let branches: Vec<Circuit> = values.iter().copied().map(Leaf).collect();
            let group = Parallel(branches.clone());
            let smallest = values.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert!(group.total_resistance() <= smallest);

            let mut wider = branches;
            wider.push(Leaf(extra));
            prop_assert!(Parallel(wider).total_resistance() < group.total_resistance());
        }
    }
}
