/*
size_schedule.rs

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

//! Target sizes for successive pieces.
//!
//! Sizes go down from the maximum to 1, then wrap back to the maximum, so that a level mixes
//! large and small pieces.

/// Descending, wrapping sequence of piece sizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SizeScheduler {
    max_size: usize,
    current: usize,
}

impl SizeScheduler {
    /// Create a [`SizeScheduler`] object. The first scheduled size is `max_size`.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            current: max_size,
        }
    }

    /// Size scheduled for the next piece.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Move to the following size.
    pub fn advance(&mut self) -> usize {
        self.current = next_size(self.current, self.max_size);
        self.current
    }
}

/// Size that follows `current_size`: one less, or `max_size` once that would drop below 1.
pub fn next_size(current_size: usize, max_size: usize) -> usize {
    if current_size > 1 {
        current_size - 1
    } else {
        max_size
    }
}

/// Split `n` cells into scheduled sizes whose sum is `n`.
///
/// The sizes follow the [`SizeScheduler`] sequence; the last part is the remainder when it
/// is smaller than the size scheduled for it. This is the plan a level follows when no
/// walk is cut short.
pub fn split_cells(n: usize, max_size: usize) -> Vec<usize> {
    let mut result: Vec<usize> = Vec::new();
    if max_size == 0 {
        return result;
    }
    let mut count: usize = n;
    let mut scheduler: SizeScheduler = SizeScheduler::new(max_size);

    while count > 0 {
        let size: usize = count.min(scheduler.current());
        result.push(size);
        count -= size;
        scheduler.advance();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_descend_and_wrap() {
        let mut scheduler = SizeScheduler::new(3);
        let mut sizes = vec![scheduler.current()];
        for _ in 0..6 {
            sizes.push(scheduler.advance());
        }
        assert_eq!(sizes, vec![3, 2, 1, 3, 2, 1, 3]);
    }

    #[test]
    fn max_size_one_stays_at_one() {
        assert_eq!(next_size(1, 1), 1);
    }

    #[test]
    fn split_sums_to_total() {
        assert_eq!(split_cells(10, 4), vec![4, 3, 2, 1]);
        assert_eq!(split_cells(9, 3), vec![3, 2, 1, 3]);
        assert_eq!(split_cells(8, 5), vec![5, 3]);
        for n in 0..50 {
            for max in 1..7 {
                let parts = split_cells(n, max);
                assert_eq!(parts.iter().sum::<usize>(), n);
                assert!(parts.iter().all(|p| *p >= 1 && *p <= max));
            }
        }
    }

    #[test]
    fn split_of_nothing_is_empty() {
        assert!(split_cells(0, 4).is_empty());
        assert!(split_cells(5, 0).is_empty());
    }
}
