//! gridwalk: deterministic walks and traversals over 2D label grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gridwalk sub-crates. For most users, adding `gridwalk` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridwalk::prelude::*;
//!
//! let grid = Grid::parse(
//!     "....#.....
//! .........#
//! ..........
//! ..#.......
//! .......#..
//! ..........
//! .#..^.....
//! ........#.
//! #.........
//! ......#...",
//! )
//! .unwrap();
//!
//! let sim = GridSimulator::from_config(&grid, &SimConfig::default()).unwrap();
//! assert_eq!(sim.visited_positions().unwrap().len(), 41);
//! assert_eq!(sim.count_loop_inducing_obstructions().unwrap(), 6);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwalk-core` | `Coord`, `Direction`, `SimState`, `GridError` |
//! | [`space`] | `gridwalk-space` | `Grid`, `ObstructionSet`, flood fill |
//! | [`sim`] | `gridwalk-sim` | `GridSimulator`, `SimConfig`, counterfactual search |
//! | [`analysis`] | `gridwalk-analysis` | Trail scoring and region measurement |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and the shared error (`gridwalk-core`).
pub use gridwalk_core as types;

/// Grids, border ring, and obstruction sets (`gridwalk-space`).
pub use gridwalk_space as space;

/// The grid walker and counterfactual obstruction search (`gridwalk-sim`).
pub use gridwalk_sim as sim;

/// Trail and region analyses (`gridwalk-analysis`).
///
/// [`analysis::HeightMap`] scores and rates hiking trails;
/// [`analysis::regions`] partitions a grid for fence pricing.
pub use gridwalk_analysis as analysis;

/// Common imports for typical gridwalk usage.
///
/// ```rust
/// use gridwalk::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridwalk_core::{Coord, Direction, GridError, SimState};

    // Space
    pub use gridwalk_space::{Grid, ObstructionSet};

    // Simulation
    pub use gridwalk_sim::{ConfigError, GridSimulator, SimConfig, SimError, WalkOutcome};

    // Analysis
    pub use gridwalk_analysis::{HeightMap, Region};
}
