/*
board.rs

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

//! Manage the pieces while the player assembles them.
//!
//! Every piece has a free position in world units: the position of the lower-left corner of
//! its anchor cell.
//! The player picks a piece, drags it, and releases it. On release the piece snaps to the
//! nearest grid cell.
//! The board then reports which grid cells are covered by exactly one piece, and the level
//! is solved when all of them are.

use log::debug;

use crate::generator::grid::{Coordinate, Grid};
use crate::generator::partition::Partition;
use crate::generator::piece::Piece;
use crate::layout::circle_layout;

/// Piece being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Held {
    /// Piece number.
    piece: usize,

    /// Distance from the pointer to the piece position when the piece was picked.
    offset: (f32, f32),
}

/// Board object.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    pieces: Vec<Piece>,

    /// Current position of each piece.
    positions: Vec<(f32, f32)>,

    held: Option<Held>,
}

impl Board {
    /// Create a [`Board`] object, with the pieces spread on a circle of the given radius.
    pub fn new(partition: &Partition, radius: f32) -> Self {
        Self {
            grid: *partition.grid(),
            pieces: partition.pieces().to_vec(),
            positions: circle_layout(partition.len(), radius),
            held: None,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Current position of the piece, or [`None`] if the piece does not exist.
    pub fn position(&self, piece: usize) -> Option<(f32, f32)> {
        self.positions.get(piece).copied()
    }

    /// Move a piece without going through pick and release. The position is not snapped.
    pub fn move_piece(&mut self, piece: usize, position: (f32, f32)) {
        if let Some(p) = self.positions.get_mut(piece) {
            *p = position;
        }
    }

    /// Piece being dragged, if any.
    pub fn held(&self) -> Option<usize> {
        self.held.map(|h| h.piece)
    }

    /// Grab the piece under the point.
    ///
    /// When pieces overlap, the one with the highest number is on top.
    /// Return the number of the held piece, or [`None`] if no piece is under the point.
    /// While a piece is held, picking again keeps holding it.
    pub fn pick(&mut self, point: (f32, f32)) -> Option<usize> {
        if let Some(held) = self.held {
            return Some(held.piece);
        }

        let piece: usize = (0..self.pieces.len())
            .rev()
            .find(|&i| self.piece_contains(i, point))?;
        let (px, py) = self.positions[piece];
        self.held = Some(Held {
            piece,
            offset: (px - point.0, py - point.1),
        });
        debug!("Picked piece {piece} at ({}, {})", point.0, point.1);
        Some(piece)
    }

    /// Move the held piece so that it follows the pointer.
    pub fn drag(&mut self, point: (f32, f32)) {
        if let Some(held) = self.held {
            self.positions[held.piece] = (point.0 + held.offset.0, point.1 + held.offset.1);
        }
    }

    /// Drop the held piece on the nearest grid cell and return its number.
    pub fn release(&mut self) -> Option<usize> {
        let held: Held = self.held.take()?;
        let snapped: Coordinate = self.snapped(held.piece);
        self.positions[held.piece] = (snapped.x as f32, snapped.y as f32);
        debug!("Released piece {} at {snapped}", held.piece);
        Some(held.piece)
    }

    /// Put every piece back on its anchor, which solves the level.
    pub fn place_at_anchors(&mut self) {
        self.held = None;
        for (position, piece) in self.positions.iter_mut().zip(&self.pieces) {
            let anchor: Coordinate = piece.anchor();
            *position = (anchor.x as f32, anchor.y as f32);
        }
    }

    /// For each grid cell, whether exactly one piece covers it.
    ///
    /// Piece positions are rounded to the nearest cell first.
    pub fn check_cells(&self) -> Vec<bool> {
        let mut coverage: Vec<usize> = vec![0; self.grid.size()];

        for (n, piece) in self.pieces.iter().enumerate() {
            let origin: Coordinate = self.snapped(n);
            for offset in piece.offsets() {
                if let Some(index) = self.grid.checked_index(origin + *offset) {
                    coverage[index] += 1;
                }
            }
        }
        coverage.iter().map(|c| *c == 1).collect()
    }

    /// Whether the pieces cover the whole grid without overlapping.
    pub fn is_solved(&self) -> bool {
        self.check_cells().iter().all(|c| *c)
    }

    /// Position of the piece rounded to the nearest cell.
    fn snapped(&self, piece: usize) -> Coordinate {
        let (x, y) = self.positions[piece];
        Coordinate::new(x.round() as i32, y.round() as i32)
    }

    /// Whether the point is inside one of the unit squares of the piece.
    fn piece_contains(&self, piece: usize, point: (f32, f32)) -> bool {
        let (px, py) = self.positions[piece];
        self.pieces[piece].offsets().iter().any(|o| {
            let x: f32 = px + o.x as f32;
            let y: f32 = py + o.y as f32;
            point.0 >= x && point.0 < x + 1.0 && point.1 >= y && point.1 < y + 1.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::partition::PartitionGenerator;
    use crate::generator::random_source::SequenceSource;
    use crate::generator::settings::Settings;

    /// Two pieces on a 3x1 grid: two cells, then one cell.
    fn two_pieces() -> Partition {
        let mut generator = PartitionGenerator::new(&Settings::new(3, 1, 2)).unwrap();
        // Always east
        let mut source = SequenceSource::new(&[1]);
        generator.generate(&mut source).unwrap()
    }

    #[test]
    fn every_piece_has_a_position() {
        let partition = PartitionGenerator::new(&Settings::new(5, 4, 3))
            .unwrap()
            .generate(&mut SequenceSource::new(&[0, 1, 2]))
            .unwrap();
        let board = Board::new(&partition, 6.0);
        let count = board.pieces().len();
        assert!((0..count).all(|n| board.position(n).is_some()));
        assert_eq!(board.position(count), None);
        assert_eq!(board.check_cells().len(), 20);
    }

    #[test]
    fn pieces_start_on_a_circle() {
        let board = Board::new(&two_pieces(), 5.0);
        assert_eq!(board.pieces().len(), 2);
        let (x, y) = board.position(0).unwrap();
        assert!((x - 5.0).abs() < 1e-4 && y.abs() < 1e-4);
        assert!(!board.is_solved());
    }

    #[test]
    fn anchors_solve_the_level() {
        let mut board = Board::new(&two_pieces(), 5.0);
        board.place_at_anchors();
        assert!(board.is_solved());
    }

    #[test]
    fn pick_drag_release_snaps_to_the_grid() {
        let mut board = Board::new(&two_pieces(), 5.0);
        board.move_piece(0, (10.0, 10.0));
        board.move_piece(1, (20.0, 20.0));

        // Second cell of piece 0, a quarter into the cell
        assert_eq!(board.pick((11.25, 10.25)), Some(0));
        board.drag((1.1, 0.4));
        assert_eq!(board.held(), Some(0));
        assert_eq!(board.release(), Some(0));
        assert_eq!(board.position(0), Some((0.0, 0.0)));
        assert_eq!(board.held(), None);

        assert_eq!(board.check_cells(), vec![true, true, false]);

        assert_eq!(board.pick((20.5, 20.5)), Some(1));
        board.drag((2.6, 0.4));
        board.release();
        assert!(board.is_solved());
    }

    #[test]
    fn pick_outside_every_piece() {
        let mut board = Board::new(&two_pieces(), 5.0);
        assert_eq!(board.pick((100.0, 100.0)), None);
        assert_eq!(board.release(), None);
    }

    #[test]
    fn overlapping_cells_are_not_valid() {
        let mut board = Board::new(&two_pieces(), 5.0);
        board.move_piece(0, (0.0, 0.0));
        board.move_piece(1, (0.0, 0.0));
        assert_eq!(board.check_cells(), vec![false, true, false]);
    }
}
