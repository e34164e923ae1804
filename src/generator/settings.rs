/*
settings.rs

Copyright 2025 The Piecemeal Authors

This file is part of Piecemeal.

Piecemeal is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Piecemeal is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Piecemeal. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Level generation parameters.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::config::{DEFAULT_HEIGHT, DEFAULT_MAX_PIECE_SIZE, DEFAULT_WIDTH};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The grid width must be positive.
    InvalidWidth(i64),

    /// The grid height must be positive.
    InvalidHeight(i64),

    /// The maximum piece size must be positive.
    InvalidMaxPieceSize(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidWidth(w) => write!(f, "invalid grid width {w}: must be positive"),
            ConfigError::InvalidHeight(h) => {
                write!(f, "invalid grid height {h}: must be positive")
            }
            ConfigError::InvalidMaxPieceSize(s) => {
                write!(f, "invalid maximum piece size {s}: must be positive")
            }
        }
    }
}

impl Error for ConfigError {}

/// Generation parameters.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Number of columns in the grid.
    pub width: i64,

    /// Number of rows in the grid.
    pub height: i64,

    /// Largest piece the generator schedules.
    pub max_piece_size: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_piece_size: DEFAULT_MAX_PIECE_SIZE,
        }
    }
}

impl Settings {
    /// Create a [`Settings`] object.
    pub fn new(width: i64, height: i64, max_piece_size: i64) -> Self {
        Self {
            width,
            height,
            max_piece_size,
        }
    }

    /// Verify the parameters.
    ///
    /// # Errors
    ///
    /// Return a [`ConfigError`] for the first parameter that is zero or negative, or that
    /// does not fit the grid arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.width > i32::MAX as i64 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if self.height <= 0 || self.height > i32::MAX as i64 {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        if self.max_piece_size <= 0 {
            return Err(ConfigError::InvalidMaxPieceSize(self.max_piece_size));
        }
        Ok(())
    }
}
