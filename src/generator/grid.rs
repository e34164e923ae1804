/*
grid.rs

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

//! Rectangular grid of unit cells.
//!
//! Cells are addressed either by a [`Coordinate`] or by a linear index.
//! The mapping is row-major: `index = x + y * width`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::ops::{Add, Sub};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The index does not designate a cell of the grid.
    IndexOutOfBounds { index: usize, size: usize },

    /// The dimensions do not describe a non-empty grid.
    InvalidDimensions { width: u32, height: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { index, size } => {
                write!(f, "cell index {index} is outside the grid (size {size})")
            }
            GridError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
        }
    }
}

impl Error for GridError {}

/// Integer position of a cell, or an offset between two cells.
///
/// Coordinates can be negative: offsets inside a piece usually are, and a walk tests
/// neighbors that lie outside the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a [`Coordinate`] object.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid dimensions as stored in a save file, before they are checked.
#[derive(Deserialize)]
struct GridDimensions {
    width: u32,
    height: u32,
}

/// Grid dimensions. Immutable once created.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(try_from = "GridDimensions")]
pub struct Grid {
    width: u32,
    height: u32,
}

impl TryFrom<GridDimensions> for Grid {
    type Error = GridError;

    fn try_from(d: GridDimensions) -> Result<Self, Self::Error> {
        Grid::try_new(d.width, d.height)
    }
}

impl Grid {
    /// Create a [`Grid`] object.
    ///
    /// The dimensions are expected to be positive; see
    /// [`crate::generator::settings::Settings::validate`].
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a [`Grid`] object from unchecked dimensions.
    ///
    /// # Errors
    ///
    /// Return [`GridError::InvalidDimensions`] if a dimension is zero or does not fit the
    /// coordinate arithmetic.
    pub fn try_new(width: u32, height: u32) -> Result<Self, GridError> {
        let limit: u32 = i32::MAX as u32;
        if width == 0 || height == 0 || width > limit || height > limit {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in the grid.
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Convert a coordinate into a linear index.
    ///
    /// This is plain arithmetic: the result is meaningless for a coordinate outside the grid,
    /// and it can even be negative. Use [`Grid::contains`] first, or [`Grid::checked_index`].
    pub fn coordinate_to_index(&self, c: Coordinate) -> i64 {
        c.x as i64 + c.y as i64 * self.width as i64
    }

    /// Convert a linear index into a coordinate.
    ///
    /// # Errors
    ///
    /// Return [`GridError::IndexOutOfBounds`] if the index is not in `[0, width * height)`.
    pub fn index_to_coordinate(&self, index: usize) -> Result<Coordinate, GridError> {
        let size: usize = self.size();
        if index >= size {
            return Err(GridError::IndexOutOfBounds { index, size });
        }
        let w: usize = self.width as usize;
        Ok(Coordinate::new((index % w) as i32, (index / w) as i32))
    }

    /// Whether the coordinate designates a cell of the grid.
    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0
            && c.y >= 0
            && (c.x as i64) < self.width as i64
            && (c.y as i64) < self.height as i64
    }

    /// Return the index of the coordinate, or [`None`] if the coordinate is outside the grid.
    pub fn checked_index(&self, c: Coordinate) -> Option<usize> {
        if self.contains(c) {
            Some(self.coordinate_to_index(c) as usize)
        } else {
            None
        }
    }

    /// Iterate over the coordinates of all the cells, in index order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Coordinate::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coordinate_are_inverse() {
        let grid = Grid::new(5, 3);
        for index in 0..grid.size() {
            let c = grid.index_to_coordinate(index).unwrap();
            assert!(grid.contains(c));
            assert_eq!(grid.coordinate_to_index(c), index as i64);
        }
    }

    #[test]
    fn row_major_mapping() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.index_to_coordinate(6), Ok(Coordinate::new(2, 1)));
        assert_eq!(grid.coordinate_to_index(Coordinate::new(3, 2)), 11);
    }

    #[test]
    fn index_out_of_range_is_an_error() {
        let grid = Grid::new(3, 2);
        assert_eq!(
            grid.index_to_coordinate(6),
            Err(GridError::IndexOutOfBounds { index: 6, size: 6 })
        );
    }

    #[test]
    fn contains_rejects_negative_and_overflowing_coordinates() {
        let grid = Grid::new(3, 2);
        assert!(grid.contains(Coordinate::new(0, 0)));
        assert!(grid.contains(Coordinate::new(2, 1)));
        assert!(!grid.contains(Coordinate::new(-1, 0)));
        assert!(!grid.contains(Coordinate::new(0, -1)));
        assert!(!grid.contains(Coordinate::new(3, 0)));
        assert!(!grid.contains(Coordinate::new(0, 2)));
        assert_eq!(grid.checked_index(Coordinate::new(-1, 1)), None);
        assert_eq!(grid.checked_index(Coordinate::new(1, 1)), Some(4));
    }

    #[test]
    fn coordinates_follow_index_order() {
        let grid = Grid::new(2, 2);
        let all: Vec<Coordinate> = grid.coordinates().collect();
        assert_eq!(
            all,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(
            Grid::try_new(0, 3),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert_eq!(Grid::try_new(4, 2), Ok(Grid::new(4, 2)));
    }

    #[test]
    fn saved_grid_is_checked() {
        let grid: Grid = serde_json::from_str(r#"{"width":3,"height":2}"#).unwrap();
        assert_eq!(grid, Grid::new(3, 2));
        assert!(serde_json::from_str::<Grid>(r#"{"width":0,"height":3}"#).is_err());
    }
}
