//! Simulator configuration and validation.
//!
//! [`SimConfig`] names the marker characters that turn a parsed grid into
//! a walk: which label is the start, which labels block movement, and
//! which way the agent initially faces.

use gridwalk_core::Direction;
use std::error::Error;
use std::fmt;

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for [`GridSimulator::from_config`](crate::GridSimulator::from_config).
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Label of the single start cell. Default: `'^'`.
    pub start_marker: char,
    /// Label of impassable cells. Default: `'#'`.
    pub obstruction_marker: char,
    /// Initial heading. `None` = derive from the start marker
    /// (`^ > v <`). Default: `None`.
    pub start_facing: Option<Direction>,
    /// Check counterfactual candidates on rayon's pool. Default: `false`.
    pub parallel: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_marker: '^',
            obstruction_marker: '#',
            start_facing: None,
            parallel: false,
        }
    }
}

impl SimConfig {
    /// Check structural invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwalk_sim::{ConfigError, SimConfig};
    ///
    /// assert!(SimConfig::default().validate().is_ok());
    ///
    /// let bad = SimConfig { start_marker: 'S', ..SimConfig::default() };
    /// assert_eq!(bad.validate(), Err(ConfigError::UnknownFacing { marker: 'S' }));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_marker == self.obstruction_marker {
            return Err(ConfigError::SameMarker {
                marker: self.start_marker,
            });
        }
        self.resolved_facing().map(|_| ())
    }

    /// The effective initial heading.
    ///
    /// An explicit `start_facing` wins; otherwise the start marker must be
    /// one of the arrow markers.
    pub fn resolved_facing(&self) -> Result<Direction, ConfigError> {
        match self.start_facing {
            Some(dir) => Ok(dir),
            None => Direction::from_marker(self.start_marker).ok_or(ConfigError::UnknownFacing {
                marker: self.start_marker,
            }),
        }
    }

    /// `true` if `label` blocks movement.
    pub fn is_obstruction(&self, label: char) -> bool {
        label == self.obstruction_marker
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Start and obstruction markers are the same character.
    SameMarker {
        /// The shared marker.
        marker: char,
    },
    /// No `start_facing` was given and the start marker is not an arrow.
    UnknownFacing {
        /// The start marker.
        marker: char,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameMarker { marker } => {
                write!(f, "start and obstruction markers are both '{marker}'")
            }
            Self::UnknownFacing { marker } => {
                write!(
                    f,
                    "cannot derive a facing from start marker '{marker}'; set start_facing"
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_faces_north() {
        assert_eq!(SimConfig::default().resolved_facing(), Ok(Direction::North));
    }

    #[test]
    fn facing_follows_arrow_marker() {
        let cfg = SimConfig {
            start_marker: '>',
            ..SimConfig::default()
        };
        assert_eq!(cfg.resolved_facing(), Ok(Direction::East));
    }

    #[test]
    fn explicit_facing_overrides_marker() {
        let cfg = SimConfig {
            start_marker: 'S',
            start_facing: Some(Direction::West),
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.resolved_facing(), Ok(Direction::West));
    }

    #[test]
    fn same_marker_rejected() {
        let cfg = SimConfig {
            start_marker: '#',
            start_facing: Some(Direction::North),
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::SameMarker { marker: '#' }));
    }
}
