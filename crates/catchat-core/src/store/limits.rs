//! Bounded-growth limits for the message store.
//!
//! The store tolerates up to `ceiling` messages. The append that pushes the
//! count past the ceiling drops the oldest messages in one step until only
//! `floor` remain. Two thresholds keep the store from trimming on every
//! append once it is full.

use serde::Serialize;

use catchat_types::error::ConfigError;

/// Ceiling/floor pair controlling store truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreLimits {
    ceiling: usize,
    floor: usize,
}

impl StoreLimits {
    pub const DEFAULT_CEILING: usize = 100;
    pub const DEFAULT_FLOOR: usize = 50;

    /// Build limits, rejecting a zero ceiling or a floor above the ceiling.
    pub fn new(ceiling: usize, floor: usize) -> Result<Self, ConfigError> {
        if ceiling == 0 || floor > ceiling {
            return Err(ConfigError::InvalidLimits { ceiling, floor });
        }
        Ok(Self { ceiling, floor })
    }

    /// Maximum message count tolerated before truncation fires.
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Message count retained immediately after truncation.
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// Number of oldest messages to drop for a store holding `len` messages.
    pub(crate) fn excess(&self, len: usize) -> usize {
        if len > self.ceiling {
            len - self.floor
        } else {
            0
        }
    }
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            ceiling: Self::DEFAULT_CEILING,
            floor: Self::DEFAULT_FLOOR,
        }
    }
}
