/*
piece.rs

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

//! A connected group of cells produced by one walk.

use serde::{Deserialize, Serialize};

use super::grid::Coordinate;

/// Piece object.
///
/// Offsets are relative to the anchor, the cell where the walk started. The first offset is
/// always `(0, 0)` and offsets are stored in walk order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Absolute coordinate of the first cell of the piece.
    anchor: Coordinate,

    /// Offsets of the piece cells relative to [`Piece::anchor`].
    offsets: Vec<Coordinate>,

    /// Size the piece was scheduled to reach. The walk can stop short of it.
    scheduled: usize,
}

impl Piece {
    /// Create a single-cell [`Piece`] object at the given anchor.
    pub fn new(anchor: Coordinate, scheduled: usize) -> Self {
        let mut offsets: Vec<Coordinate> = Vec::with_capacity(scheduled.max(1));
        offsets.push(Coordinate::default());
        Self {
            anchor,
            offsets,
            scheduled,
        }
    }

    /// Create a [`Piece`] object from existing offsets, such as offsets loaded from a file.
    pub fn from_offsets(anchor: Coordinate, offsets: Vec<Coordinate>) -> Self {
        let scheduled: usize = offsets.len();
        Self {
            anchor,
            offsets,
            scheduled,
        }
    }

    /// Add the cell at the given absolute coordinate.
    pub(crate) fn push_cell(&mut self, cell: Coordinate) {
        self.offsets.push(cell - self.anchor);
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn offsets(&self) -> &[Coordinate] {
        &self.offsets
    }

    pub fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Number of cells in the piece.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether the walk stopped before reaching the scheduled size.
    pub fn is_under_filled(&self) -> bool {
        self.offsets.len() < self.scheduled
    }

    /// Iterate over the absolute coordinates of the piece cells.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.offsets.iter().map(move |o| self.anchor + *o)
    }

    /// Smallest and largest offsets along each axis, as `(min, max)`.
    pub fn bounds(&self) -> (Coordinate, Coordinate) {
        let mut min: Coordinate = Coordinate::default();
        let mut max: Coordinate = Coordinate::default();
        for o in &self.offsets {
            min.x = min.x.min(o.x);
            min.y = min.y.min(o.y);
            max.x = max.x.max(o.x);
            max.y = max.y.max(o.y);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Piece {
        let mut piece = Piece::new(Coordinate::new(2, 1), 4);
        piece.push_cell(Coordinate::new(2, 2));
        piece.push_cell(Coordinate::new(1, 2));
        piece
    }

    #[test]
    fn offsets_are_relative_to_anchor() {
        let piece = l_shape();
        assert_eq!(
            piece.offsets(),
            &[
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(-1, 1)
            ]
        );
        let cells: Vec<Coordinate> = piece.cells().collect();
        assert_eq!(cells[2], Coordinate::new(1, 2));
    }

    #[test]
    fn bounds_cover_all_offsets() {
        let (min, max) = l_shape().bounds();
        assert_eq!(min, Coordinate::new(-1, 0));
        assert_eq!(max, Coordinate::new(0, 1));
    }

    #[test]
    fn under_fill_is_reported() {
        let piece = l_shape();
        assert_eq!(piece.len(), 3);
        assert!(piece.is_under_filled());
        assert!(!Piece::new(Coordinate::default(), 1).is_under_filled());
    }
}
