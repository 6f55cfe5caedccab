//! Benchmark profiles for gridwalk.
//!
//! - [`reference_patrol`]: 130x130 patrol grid at ~2% obstruction density,
//!   the size of a typical puzzle input.
//! - [`stress_patrol`]: 400x400 grid at the same density.
//! - [`exiting_patrol`]: first seed at or after `seed` whose base walk
//!   exits, so the counterfactual search has something to search.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwalk_sim::{GridSimulator, SimConfig};
use gridwalk_space::Grid;
use gridwalk_test_utils::RandomGridBuilder;

/// Obstruction density used by all profiles.
pub const DENSITY: f64 = 0.02;

/// 130x130 patrol grid.
pub fn reference_patrol(seed: u64) -> Grid {
    RandomGridBuilder::new(130, 130)
        .density(DENSITY)
        .seed(seed)
        .build()
        .0
}

/// 400x400 patrol grid.
pub fn stress_patrol(seed: u64) -> Grid {
    RandomGridBuilder::new(400, 400)
        .density(DENSITY)
        .seed(seed)
        .build()
        .0
}

/// A 130x130 patrol grid whose unmodified walk leaves the grid, with the
/// seed that produced it.
pub fn exiting_patrol(seed: u64) -> (Grid, u64) {
    let mut s = seed;
    loop {
        let grid = reference_patrol(s);
        let exits = GridSimulator::from_config(&grid, &SimConfig::default())
            .map(|sim| !sim.contains_cycle())
            .unwrap_or(false);
        if exits {
            return (grid, s);
        }
        s += 1;
    }
}
