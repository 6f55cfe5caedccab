//! Errors from building a simulator out of a grid and a config.

use crate::config::ConfigError;
use gridwalk_core::GridError;
use std::error::Error;
use std::fmt;

/// Either the configuration or the grid was unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// [`SimConfig::validate`](crate::SimConfig::validate) failed.
    Config(ConfigError),
    /// The grid did not describe a valid walk.
    Grid(GridError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
