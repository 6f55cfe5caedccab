//! Core types for the gridwalk toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types every other gridwalk crate passes around:
//! coordinates, directions, simulation states, and the shared error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;
pub mod state;

pub use coord::Coord;
pub use direction::Direction;
pub use error::GridError;
pub use state::SimState;
