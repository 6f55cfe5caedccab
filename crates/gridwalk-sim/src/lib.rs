//! Deterministic single-agent walks over obstructed grids.
//!
//! A [`GridSimulator`] moves one agent across a [`Grid`](gridwalk_space::Grid):
//! each step it looks at the cell ahead, turns clockwise while that cell is
//! obstructed, and moves into the first clear cell. The walk ends when the
//! agent steps onto the border ring.
//!
//! Because the walk is a deterministic function of `(position, facing)`
//! over a finite state space, it either exits or revisits a state. There is
//! no third outcome, so [`GridSimulator::contains_cycle`] always terminates.
//!
//! # Counterfactual search
//!
//! [`GridSimulator::loop_inducing_obstructions`] asks which single added
//! obstruction on the walked path would trap the agent in a loop. Each
//! candidate is independent; with [`SimConfig::parallel`] set, candidates
//! are checked on rayon's thread pool.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod search;
pub mod simulator;

pub use config::{ConfigError, SimConfig};
pub use error::SimError;
pub use simulator::{GridSimulator, Trajectory, WalkOutcome};
