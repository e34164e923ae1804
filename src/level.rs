/*
level.rs

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

//! A generated level: the partition and how it was produced.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::generator::grid::Grid;
use crate::generator::partition::{Partition, PartitionError};
use crate::generator::settings::{ConfigError, Settings};

/// Type of errors reported by [`Level::verify`].
#[derive(Debug, PartialEq)]
pub enum LevelError {
    /// The recorded settings are not valid.
    Settings(ConfigError),

    /// The partition grid does not have the dimensions of the settings.
    GridMismatch { settings: Settings, grid: Grid },

    /// The partition maximum piece size is not the one of the settings.
    MaxPieceSizeMismatch { settings: i64, partition: usize },

    /// The pieces do not form a valid partition.
    Partition(PartitionError),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelError::Settings(e) => write!(f, "{e}"),
            LevelError::GridMismatch { settings, grid } => write!(
                f,
                "the {}x{} grid does not match the {}x{} settings",
                grid.width(),
                grid.height(),
                settings.width,
                settings.height
            ),
            LevelError::MaxPieceSizeMismatch {
                settings,
                partition,
            } => write!(
                f,
                "maximum piece size {partition} does not match the settings ({settings})"
            ),
            LevelError::Partition(e) => write!(f, "invalid partition: {e}"),
        }
    }
}

impl Error for LevelError {}

/// Level object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Level {
    /// Parameters used for generating the partition.
    pub settings: Settings,

    /// Seed of the random generator, if the partition was generated from a seed.
    /// With the same settings and seed, the generator produces the same partition again.
    pub seed: Option<u64>,

    /// Generation timestamp.
    pub generated: DateTime<Local>,

    /// Pieces of the level.
    pub partition: Partition,
}

impl Level {
    /// Create a [`Level`] object, stamped with the current time.
    pub fn new(settings: Settings, seed: Option<u64>, partition: Partition) -> Self {
        Self {
            settings,
            seed,
            generated: Local::now(),
            partition,
        }
    }

    /// Verify that the settings are valid, that they match the partition, and that the
    /// partition covers its grid.
    ///
    /// A level read from a file goes through this check before use.
    ///
    /// # Errors
    ///
    /// Return the first [`LevelError`] found.
    pub fn verify(&self) -> Result<(), LevelError> {
        self.settings.validate().map_err(LevelError::Settings)?;

        let grid: &Grid = self.partition.grid();
        if grid.width() as i64 != self.settings.width
            || grid.height() as i64 != self.settings.height
        {
            return Err(LevelError::GridMismatch {
                settings: self.settings,
                grid: *grid,
            });
        }
        if self.partition.max_piece_size() as i64 != self.settings.max_piece_size {
            return Err(LevelError::MaxPieceSizeMismatch {
                settings: self.settings.max_piece_size,
                partition: self.partition.max_piece_size(),
            });
        }
        self.partition.verify().map_err(LevelError::Partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::partition::PartitionGenerator;
    use crate::generator::random_source::SequenceSource;

    fn level(width: i64, height: i64, max: i64) -> Level {
        let settings = Settings::new(width, height, max);
        let partition = PartitionGenerator::new(&settings)
            .unwrap()
            .generate(&mut SequenceSource::new(&[1, 0]))
            .unwrap();
        Level::new(settings, None, partition)
    }

    #[test]
    fn generated_level_is_valid() {
        assert_eq!(level(4, 3, 3).verify(), Ok(()));
    }

    #[test]
    fn settings_must_match_the_grid() {
        let mut l = level(4, 3, 3);
        l.settings.width = 5;
        assert!(matches!(
            l.verify(),
            Err(LevelError::GridMismatch { .. })
        ));

        let mut l = level(4, 3, 3);
        l.settings.max_piece_size = 4;
        assert_eq!(
            l.verify(),
            Err(LevelError::MaxPieceSizeMismatch {
                settings: 4,
                partition: 3
            })
        );

        let mut l = level(4, 3, 3);
        l.settings.height = 0;
        assert_eq!(
            l.verify(),
            Err(LevelError::Settings(ConfigError::InvalidHeight(0)))
        );
    }

    #[test]
    fn missing_pieces_are_reported() {
        let l = level(2, 2, 2);
        let partition = Partition::from_pieces(
            *l.partition.grid(),
            2,
            l.partition.pieces()[1..].to_vec(),
        );
        let broken = Level::new(l.settings, None, partition);
        assert!(matches!(
            broken.verify(),
            Err(LevelError::Partition(PartitionError::Uncovered { .. }))
        ));
    }
}
