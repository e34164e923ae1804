/*
partition.rs

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

//! Cover the whole grid with pieces.
//!
//! The generator repeatedly starts a walk on the lowest free cell, with a target size taken
//! from the [`SizeScheduler`] and clipped to the number of free cells, until every cell is
//! claimed.
//! Each walk claims at least its start cell, so the generation always ends after at most
//! `width * height` walks.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::grid::{Coordinate, Grid, GridError};
use super::piece::Piece;
use super::random_source::RandomSource;
use super::random_walk::{ClaimedSet, RandomWalk};
use super::settings::{ConfigError, Settings};
use super::size_schedule::SizeScheduler;
use crate::render::piece_label;

/// Type of errors reported by [`Partition::verify`].
#[derive(Debug, PartialEq)]
pub enum PartitionError {
    /// The grid has no cell.
    EmptyGrid,

    /// The piece has no cell.
    EmptyPiece { piece: usize },

    /// The first offset of the piece is not `(0, 0)`.
    BadFirstOffset { piece: usize, offset: Coordinate },

    /// The offset is not next to any earlier offset of the same piece.
    Disconnected { piece: usize, offset: Coordinate },

    /// A cell of the piece is outside the grid.
    OutsideGrid { piece: usize, cell: Coordinate },

    /// The piece has more cells than the maximum piece size.
    Oversized { piece: usize, len: usize, max: usize },

    /// Two pieces share a cell.
    Overlap {
        cell: Coordinate,
        first: usize,
        second: usize,
    },

    /// No piece covers the cell.
    Uncovered { cell: Coordinate },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartitionError::EmptyGrid => write!(f, "the grid has no cell"),
            PartitionError::EmptyPiece { piece } => write!(f, "piece {piece} has no cell"),
            PartitionError::BadFirstOffset { piece, offset } => {
                write!(f, "piece {piece} starts with offset {offset} instead of (0, 0)")
            }
            PartitionError::Disconnected { piece, offset } => {
                write!(f, "offset {offset} of piece {piece} is not connected")
            }
            PartitionError::OutsideGrid { piece, cell } => {
                write!(f, "cell {cell} of piece {piece} is outside the grid")
            }
            PartitionError::Oversized { piece, len, max } => {
                write!(f, "piece {piece} has {len} cells (maximum {max})")
            }
            PartitionError::Overlap {
                cell,
                first,
                second,
            } => write!(f, "pieces {first} and {second} both cover cell {cell}"),
            PartitionError::Uncovered { cell } => write!(f, "cell {cell} is not covered"),
        }
    }
}

impl Error for PartitionError {}

/// Summary of a partition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PartitionStats {
    pub pieces: usize,
    pub cells: usize,
    pub smallest: usize,
    pub largest: usize,
    pub average: f32,

    /// Number of pieces smaller than the size scheduled for them.
    pub under_filled: usize,
}

/// Ordered list of pieces covering a grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Partition {
    grid: Grid,
    max_piece_size: usize,

    /// Pieces in generation order.
    pieces: Vec<Piece>,
}

impl Partition {
    /// Create a [`Partition`] object from existing pieces.
    ///
    /// Nothing is checked; use [`Partition::verify`].
    pub fn from_pieces(grid: Grid, max_piece_size: usize, pieces: Vec<Piece>) -> Self {
        Self {
            grid,
            max_piece_size,
            pieces,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn max_piece_size(&self) -> usize {
        self.max_piece_size
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Piece> {
        self.pieces.iter()
    }

    /// For each cell index, the number of the piece covering it.
    ///
    /// Cells outside the grid are ignored. When pieces overlap, the last one wins.
    pub fn owner_map(&self) -> Vec<Option<usize>> {
        let mut owners: Vec<Option<usize>> = vec![None; self.grid.size()];
        for (n, piece) in self.pieces.iter().enumerate() {
            for cell in piece.cells() {
                if let Some(index) = self.grid.checked_index(cell) {
                    owners[index] = Some(n);
                }
            }
        }
        owners
    }

    /// Verify that the pieces are connected, disjoint, no larger than the maximum piece size,
    /// and that together they cover the whole grid.
    ///
    /// # Errors
    ///
    /// Return the first [`PartitionError`] found.
    pub fn verify(&self) -> Result<(), PartitionError> {
        if self.grid.size() == 0 {
            return Err(PartitionError::EmptyGrid);
        }
        let mut owners: Vec<Option<usize>> = vec![None; self.grid.size()];

        for (n, piece) in self.pieces.iter().enumerate() {
            let offsets: &[Coordinate] = piece.offsets();
            let Some(first) = offsets.first() else {
                return Err(PartitionError::EmptyPiece { piece: n });
            };
            if *first != Coordinate::default() {
                return Err(PartitionError::BadFirstOffset {
                    piece: n,
                    offset: *first,
                });
            }
            if offsets.len() > self.max_piece_size {
                return Err(PartitionError::Oversized {
                    piece: n,
                    len: offsets.len(),
                    max: self.max_piece_size,
                });
            }

            for (i, offset) in offsets.iter().enumerate() {
                if i > 0 && !offsets[..i].iter().any(|o| o.manhattan(*offset) == 1) {
                    return Err(PartitionError::Disconnected {
                        piece: n,
                        offset: *offset,
                    });
                }

                let cell: Coordinate = piece.anchor() + *offset;
                let Some(index) = self.grid.checked_index(cell) else {
                    return Err(PartitionError::OutsideGrid { piece: n, cell });
                };
                if let Some(first) = owners[index] {
                    return Err(PartitionError::Overlap {
                        cell,
                        first,
                        second: n,
                    });
                }
                owners[index] = Some(n);
            }
        }

        match self
            .grid
            .coordinates()
            .zip(&owners)
            .find(|(_, owner)| owner.is_none())
        {
            Some((cell, _)) => Err(PartitionError::Uncovered { cell }),
            None => Ok(()),
        }
    }

    /// Compute the [`PartitionStats`] of the partition.
    pub fn stats(&self) -> PartitionStats {
        let cells: usize = self.pieces.iter().map(Piece::len).sum();
        let average: f32 = if self.pieces.is_empty() {
            0.0
        } else {
            cells as f32 / self.pieces.len() as f32
        };
        PartitionStats {
            pieces: self.pieces.len(),
            cells,
            smallest: self.pieces.iter().map(Piece::len).min().unwrap_or(0),
            largest: self.pieces.iter().map(Piece::len).max().unwrap_or(0),
            average,
            under_filled: self.pieces.iter().filter(|p| p.is_under_filled()).count(),
        }
    }

    /// Print the piece layout with the debug log level.
    fn debug(&self) {
        let owners: Vec<Option<usize>> = self.owner_map();
        let mut s: String = String::new();

        for row in owners.chunks(self.grid.width().max(1) as usize) {
            s.clear();
            for owner in row {
                s.push(owner.map_or('.', piece_label));
            }
            debug!("{s}");
        }
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

/// [`PartitionGenerator`] object.
pub struct PartitionGenerator {
    grid: Grid,

    /// Largest size the [`SizeScheduler`] asks for.
    max_piece_size: usize,

    /// Duration in seconds it took to generate the last partition.
    pub duration: f32,
}

impl PartitionGenerator {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// Return a [`ConfigError`] when the settings are not valid.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            grid: Grid::new(settings.width as u32, settings.height as u32),
            max_piece_size: settings.max_piece_size as usize,
            duration: 0.0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generate and return a partition of the grid.
    ///
    /// The same sequence of draws from `source` always produces the same partition.
    ///
    /// # Errors
    ///
    /// A walk start index always comes from the grid, so [`GridError`] is not expected.
    pub fn generate<S: RandomSource>(&mut self, source: &mut S) -> Result<Partition, GridError> {
        let start: Instant = Instant::now();
        let walk: RandomWalk = RandomWalk::new(&self.grid);
        let mut claimed: ClaimedSet = ClaimedSet::new(self.grid.size());
        let mut scheduler: SizeScheduler = SizeScheduler::new(self.max_piece_size);
        let mut pieces: Vec<Piece> = Vec::new();

        debug!(
            "Generating a {}x{} partition, maximum piece size {}",
            self.grid.width(),
            self.grid.height(),
            self.max_piece_size
        );

        while claimed.free() > 0 {
            let Some(start_index) = claimed.first_free() else {
                break;
            };
            let steps: usize = claimed.free().min(scheduler.current());
            let piece: Piece = walk.carve(start_index, steps, &mut claimed, source)?;

            debug!(
                "Piece {}: start {} size {}/{}",
                pieces.len(),
                start_index,
                piece.len(),
                steps
            );
            pieces.push(piece);
            scheduler.advance();
        }

        let partition: Partition = Partition::from_pieces(self.grid, self.max_piece_size, pieces);
        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Generated {} pieces in {}s",
            partition.len(),
            self.duration
        );
        if log_enabled!(Level::Debug) {
            partition.debug();
        }
        Ok(partition)
    }
}
