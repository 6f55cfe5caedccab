//! Spatial data structures for gridwalk.
//!
//! This crate defines [`Grid`], the immutable rectangular label array every
//! traversal runs over, together with the sets derived from it once at
//! construction time.
//!
//! # Border
//!
//! Cells one step outside the grid form the border ring. A single step
//! from an interior cell lands either in the interior or on the border,
//! never anywhere else, so walkers use [`Grid::is_border`] as their
//! termination test.
//!
//! # Flood fill
//!
//! [`flood_fill`] and [`components`] run breadth-first searches over the
//! 4-neighbourhood with a caller-supplied connectivity predicate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod flood;
pub mod grid;
pub mod obstruction;

#[cfg(test)]
pub(crate) mod compliance;

pub use flood::{components, flood_fill};
pub use grid::Grid;
pub use obstruction::ObstructionSet;
