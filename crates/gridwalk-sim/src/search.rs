//! Counterfactual obstruction search.
//!
//! For every cell the agent walks through (except its start), place one
//! extra obstruction there and re-run the walk. Cells off the path are
//! never looked at by the walk, so obstructing them cannot change it.

use crate::simulator::GridSimulator;
use gridwalk_core::{Coord, GridError};
use rayon::prelude::*;
use tracing::debug;

impl GridSimulator<'_> {
    /// Cells on the walked path whose obstruction traps the agent in a
    /// loop, in first-visit order.
    ///
    /// The path is derived once; each candidate then runs on its own
    /// obstruction set and seen-state set, so the parallel and sequential
    /// runs return identical results.
    ///
    /// Returns `Err(GridError::Looped)` if the unmodified walk already
    /// loops.
    pub fn loop_inducing_obstructions(&self) -> Result<Vec<Coord>, GridError> {
        let start = self.start().position;
        let candidates: Vec<Coord> = self
            .visited_positions()?
            .into_iter()
            .filter(|&c| c != start)
            .collect();

        debug!(
            candidates = candidates.len(),
            parallel = self.is_parallel(),
            "starting counterfactual obstruction search"
        );

        let found: Vec<Coord> = if self.is_parallel() {
            candidates
                .par_iter()
                .copied()
                .filter(|&c| self.loops_with(c))
                .collect()
        } else {
            candidates
                .iter()
                .copied()
                .filter(|&c| self.loops_with(c))
                .collect()
        };

        debug!(found = found.len(), "counterfactual obstruction search finished");
        Ok(found)
    }

    /// Number of cells returned by [`loop_inducing_obstructions`](Self::loop_inducing_obstructions).
    pub fn count_loop_inducing_obstructions(&self) -> Result<usize, GridError> {
        self.loop_inducing_obstructions().map(|found| found.len())
    }

    fn loops_with(&self, candidate: Coord) -> bool {
        self.with_obstruction(candidate).contains_cycle()
    }
}
