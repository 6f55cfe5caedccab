//! The grid walker and its lazy trajectory.

use crate::config::SimConfig;
use crate::error::SimError;
use gridwalk_core::{Coord, Direction, GridError, SimState};
use gridwalk_space::{Grid, ObstructionSet};
use indexmap::IndexSet;
use std::collections::HashSet;
use std::iter::FusedIterator;

/// How a walk ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The agent stepped onto the border after emitting `steps` states.
    Exited {
        /// Number of states emitted before leaving.
        steps: usize,
    },
    /// The agent reached `state` a second time after `steps` states.
    Looped {
        /// Number of distinct states emitted before the repeat.
        steps: usize,
        /// The first repeated state.
        state: SimState,
    },
}

/// A single agent walking a bounded, obstructed grid.
///
/// The grid is borrowed and never mutated; the obstruction set is owned so
/// counterfactual variants ([`with_obstruction`](Self::with_obstruction))
/// can share the grid while carrying their own extra obstruction.
#[derive(Clone, Debug)]
pub struct GridSimulator<'g> {
    grid: &'g Grid,
    obstructions: ObstructionSet,
    start: SimState,
    parallel: bool,
}

impl<'g> GridSimulator<'g> {
    /// Create a simulator whose obstructions are the cells satisfying
    /// `is_obstruction`.
    ///
    /// Returns `Err(GridError::StartNotInterior)` if `start` is outside the
    /// grid and `Err(GridError::StartObstructed)` if it is obstructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwalk_core::{Coord, Direction};
    /// use gridwalk_sim::GridSimulator;
    /// use gridwalk_space::Grid;
    ///
    /// let grid = Grid::parse(".#.\n...\n.^.").unwrap();
    /// let sim = GridSimulator::new(&grid, |l| l == '#', Coord::new(2, 1), Direction::North).unwrap();
    /// // Up one cell, blocked, turn east, walk off the right edge.
    /// assert_eq!(sim.visited_positions().unwrap().len(), 3);
    /// assert!(!sim.contains_cycle());
    /// ```
    pub fn new(
        grid: &'g Grid,
        is_obstruction: impl Fn(char) -> bool,
        start: Coord,
        facing: Direction,
    ) -> Result<Self, GridError> {
        Self::with_obstructions(grid, grid.obstructions(is_obstruction), start, facing)
    }

    /// Create a simulator over an explicit obstruction set.
    pub fn with_obstructions(
        grid: &'g Grid,
        obstructions: ObstructionSet,
        start: Coord,
        facing: Direction,
    ) -> Result<Self, GridError> {
        if !grid.contains(start) {
            return Err(GridError::StartNotInterior { coord: start });
        }
        if obstructions.contains(start) {
            return Err(GridError::StartObstructed { coord: start });
        }
        Ok(Self {
            grid,
            obstructions,
            start: SimState::new(start, facing),
            parallel: false,
        })
    }

    /// Locate the start marker named by `config` and build the simulator.
    ///
    /// Fails with `GridError::MissingStart` / `GridError::DuplicateStart`
    /// when the marker does not appear exactly once.
    pub fn from_config(grid: &'g Grid, config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let facing = config.resolved_facing()?;
        let start = grid.find_unique(config.start_marker)?;
        let sim = Self::new(grid, |l| config.is_obstruction(l), start, facing)?;
        Ok(sim.with_parallel(config.parallel))
    }

    /// Toggle parallel candidate checking for the counterfactual search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// A simulator over the same grid and start with `coord` also obstructed.
    pub fn with_obstruction(&self, coord: Coord) -> Self {
        Self {
            grid: self.grid,
            obstructions: self.obstructions.with(coord),
            start: self.start,
            parallel: self.parallel,
        }
    }

    /// The grid being walked.
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// The obstructions in effect.
    pub fn obstructions(&self) -> &ObstructionSet {
        &self.obstructions
    }

    /// The initial state.
    pub fn start(&self) -> SimState {
        self.start
    }

    pub(crate) fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// The state following `state`.
    ///
    /// Turns clockwise at most three times looking for a clear cell. If all
    /// four neighbours are obstructed the agent stays put, which is a
    /// period-1 loop.
    fn advance(&self, state: SimState) -> SimState {
        let mut facing = state.facing;
        for _ in 0..4 {
            let ahead = state.position.step(facing);
            if !self.obstructions.contains(ahead) {
                return SimState::new(ahead, facing);
            }
            facing = facing.turn_right();
        }
        state
    }

    /// Lazily walk from the start, yielding every state while the agent is
    /// inside the grid.
    ///
    /// Each call restarts from the initial state. The iterator is infinite
    /// when the walk loops; use [`contains_cycle`](Self::contains_cycle) or
    /// [`outcome`](Self::outcome) to find out first.
    pub fn traverse(&self) -> Trajectory<'_, 'g> {
        Trajectory {
            sim: self,
            current: Some(self.start),
        }
    }

    /// Walk until the agent exits or a state repeats.
    ///
    /// Always returns within `cell_count * 4 + 1` states.
    pub fn outcome(&self) -> WalkOutcome {
        let mut seen = HashSet::new();
        for state in self.traverse() {
            if !seen.insert(state) {
                tracing::trace!(state = %state, steps = seen.len(), "walk loops");
                return WalkOutcome::Looped {
                    steps: seen.len(),
                    state,
                };
            }
        }
        WalkOutcome::Exited { steps: seen.len() }
    }

    /// `true` if the walk never reaches the border.
    pub fn contains_cycle(&self) -> bool {
        matches!(self.outcome(), WalkOutcome::Looped { .. })
    }

    /// Distinct positions of the walk, in first-visit order.
    ///
    /// Returns `Err(GridError::Looped)` instead of running forever when the
    /// walk never reaches the border.
    pub fn visited_positions(&self) -> Result<IndexSet<Coord>, GridError> {
        let mut seen = HashSet::new();
        let mut visited = IndexSet::new();
        for state in self.traverse() {
            if !seen.insert(state) {
                return Err(GridError::Looped { state });
            }
            visited.insert(state.position);
        }
        Ok(visited)
    }
}

/// Lazy sequence of [`SimState`]s produced by [`GridSimulator::traverse`].
#[derive(Clone, Debug)]
pub struct Trajectory<'s, 'g> {
    sim: &'s GridSimulator<'g>,
    current: Option<SimState>,
}

impl Iterator for Trajectory<'_, '_> {
    type Item = SimState;

    fn next(&mut self) -> Option<SimState> {
        let state = self.current?;
        if self.sim.grid.is_border(state.position) {
            self.current = None;
            return None;
        }
        self.current = Some(self.sim.advance(state));
        Some(state)
    }
}

impl FusedIterator for Trajectory<'_, '_> {}
