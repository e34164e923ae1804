/*
random_walk.rs

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

//! Grow one piece with a random walk.
//!
//! The walk starts on an unclaimed cell and tries to step to a random unclaimed neighbor
//! until the piece reaches its target size.
//! For each step, up to four directions are drawn independently (the same direction can be
//! drawn more than once), and the first one leading to a free cell inside the grid is taken.
//! When none of the draws succeeds, the step is lost: the walk does not backtrack or draw
//! again, so the piece can end up smaller than requested.

use log::debug;

use super::direction::Direction;
use super::grid::{Coordinate, Grid, GridError};
use super::piece::Piece;
use super::random_source::RandomSource;

/// Number of direction draws attempted for each step.
const DRAWS_PER_STEP: usize = 4;

/// Claimed status of every cell in the grid.
///
/// Cells are only ever claimed, never released, during a generation run.
#[derive(Debug, Clone)]
pub struct ClaimedSet {
    claimed: Vec<bool>,

    /// Number of cells not claimed yet.
    free: usize,

    /// Every index below the cursor is claimed.
    cursor: usize,
}

impl ClaimedSet {
    /// Create a [`ClaimedSet`] object with all the cells free.
    pub fn new(size: usize) -> Self {
        Self {
            claimed: vec![false; size],
            free: size,
            cursor: 0,
        }
    }

    /// Mark the cell as claimed. Claiming a cell twice has no effect.
    pub fn claim(&mut self, index: usize) {
        if !self.claimed[index] {
            self.claimed[index] = true;
            self.free -= 1;
        }
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        self.claimed[index]
    }

    /// Number of cells not claimed yet.
    pub fn free(&self) -> usize {
        self.free
    }

    /// Lowest index that is not claimed yet.
    ///
    /// Because cells are never released, the search resumes where the previous one stopped
    /// and still returns the lowest free index.
    pub fn first_free(&mut self) -> Option<usize> {
        while self.cursor < self.claimed.len() && self.claimed[self.cursor] {
            self.cursor += 1;
        }
        if self.cursor < self.claimed.len() {
            Some(self.cursor)
        } else {
            None
        }
    }
}

/// RandomWalk object.
pub struct RandomWalk<'a> {
    grid: &'a Grid,
}

impl<'a> RandomWalk<'a> {
    /// Create the object.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Grow a piece from the cell at index `start`, up to `target_size` cells.
    ///
    /// The start cell must not be claimed yet. All the cells of the returned piece are
    /// claimed in `claimed`.
    ///
    /// # Errors
    ///
    /// Return [`GridError::IndexOutOfBounds`] if `start` is not a cell of the grid.
    pub fn carve<S: RandomSource>(
        &self,
        start: usize,
        target_size: usize,
        claimed: &mut ClaimedSet,
        source: &mut S,
    ) -> Result<Piece, GridError> {
        let start_coordinate: Coordinate = self.grid.index_to_coordinate(start)?;
        debug_assert!(!claimed.is_claimed(start), "start cell {start} already claimed");

        let mut current: Coordinate = start_coordinate;
        let mut piece: Piece = Piece::new(start_coordinate, target_size);
        claimed.claim(start);

        for step in 1..target_size {
            match self.step(current, claimed, source) {
                Some(next) => {
                    current = next;
                    piece.push_cell(next);
                }
                None => debug!("    Walk from {start}: step {step} found no free neighbor"),
            }
        }
        Ok(piece)
    }

    /// Try to move from `current` to a free neighbor and claim it.
    fn step<S: RandomSource>(
        &self,
        current: Coordinate,
        claimed: &mut ClaimedSet,
        source: &mut S,
    ) -> Option<Coordinate> {
        for _ in 0..DRAWS_PER_STEP {
            let direction: Direction = Direction::from_draw(source.next_draw());
            let candidate: Coordinate = current + direction.offset();

            if let Some(index) = self.grid.checked_index(candidate)
                && !claimed.is_claimed(index)
            {
                claimed.claim(index);
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random_source::SequenceSource;

    #[test]
    fn claimed_set_tracks_lowest_free_index() {
        let mut claimed = ClaimedSet::new(4);
        assert_eq!(claimed.first_free(), Some(0));
        claimed.claim(0);
        claimed.claim(2);
        assert_eq!(claimed.first_free(), Some(1));
        claimed.claim(1);
        assert_eq!(claimed.first_free(), Some(3));
        claimed.claim(3);
        claimed.claim(3);
        assert_eq!(claimed.first_free(), None);
        assert_eq!(claimed.free(), 0);
    }

    #[test]
    fn walk_follows_the_draws() {
        let grid = Grid::new(3, 3);
        let mut claimed = ClaimedSet::new(grid.size());
        // East, north, west
        let mut source = SequenceSource::new(&[1, 0, 3]);
        let piece = RandomWalk::new(&grid)
            .carve(0, 4, &mut claimed, &mut source)
            .unwrap();

        assert_eq!(
            piece.offsets(),
            &[
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
                Coordinate::new(0, 1)
            ]
        );
        for index in [0, 1, 4, 3] {
            assert!(claimed.is_claimed(index));
        }
        assert_eq!(claimed.free(), 5);
    }

    #[test]
    fn blocked_draws_are_skipped_within_a_step() {
        let grid = Grid::new(2, 1);
        let mut claimed = ClaimedSet::new(grid.size());
        // South and west leave the grid, east is free
        let mut source = SequenceSource::new(&[2, 3, 1]);
        let piece = RandomWalk::new(&grid)
            .carve(0, 2, &mut claimed, &mut source)
            .unwrap();

        assert_eq!(piece.len(), 2);
        assert_eq!(source.consumed, 3);
    }

    #[test]
    fn four_failed_draws_lose_the_step() {
        let grid = Grid::new(3, 1);
        let mut claimed = ClaimedSet::new(grid.size());
        // Four times south: a free east neighbor exists but is never drawn
        let mut source = SequenceSource::new(&[2, 2, 2, 2, 1]);
        let piece = RandomWalk::new(&grid)
            .carve(0, 2, &mut claimed, &mut source)
            .unwrap();

        assert_eq!(piece.len(), 1);
        assert!(piece.is_under_filled());
        assert_eq!(source.consumed, 4);
        assert!(!claimed.is_claimed(1));
    }

    #[test]
    fn start_outside_the_grid_is_an_error() {
        let grid = Grid::new(2, 2);
        let mut claimed = ClaimedSet::new(grid.size());
        let mut source = SequenceSource::default();
        let result = RandomWalk::new(&grid).carve(4, 1, &mut claimed, &mut source);
        assert_eq!(
            result,
            Err(GridError::IndexOutOfBounds { index: 4, size: 4 })
        );
    }
}
