/*
direction.rs

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

//! Walk directions in the 4-neighborhood of a cell.

use strum_macros::FromRepr;

use super::grid::Coordinate;

/// Direction of a walk step.
///
/// The discriminant is the value a [`super::random_source::RandomSource`] draws to select the
/// direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[repr(u8)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Number of directions, which is also the exclusive upper bound of a draw.
    pub const COUNT: u8 = 4;

    /// All the directions, in draw order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Return the direction for a random draw.
    ///
    /// Draws are expected in `[0, 4)`. Other values are reduced modulo 4.
    pub fn from_draw(draw: u8) -> Self {
        Self::from_repr(draw % Self::COUNT).unwrap_or_default()
    }

    /// Unit offset of the direction.
    pub fn offset(self) -> Coordinate {
        match self {
            Direction::North => Coordinate::new(0, 1),
            Direction::East => Coordinate::new(1, 0),
            Direction::South => Coordinate::new(0, -1),
            Direction::West => Coordinate::new(-1, 0),
        }
    }
}
