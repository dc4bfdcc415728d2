//! Circuit representation and topology enumeration.
//!
//! This module provides the [`Circuit`] tree (a resistor, or a series or
//! parallel group of sub-circuits), the composer that enumerates every
//! distinct circuit a [`Combination`](crate::combination::Combination) can
//! build, and an ASCII diagram renderer.

mod compose;
mod draw;
mod types;

pub use compose::{generate_circuits, Circuits};
pub use draw::draw_circuit;
pub use types::*;
