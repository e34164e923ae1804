/*
layout.rs

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

//! Initial arrangement of the pieces before the player assembles them.

/// Spread `count` positions on a circle of the given radius, centered on the origin.
///
/// The angle between two positions is `360 / count` degrees, rounded down to a whole
/// degree, and the first position is at angle 0 (on the positive x axis).
pub fn circle_layout(count: usize, radius: f32) -> Vec<(f32, f32)> {
    if count == 0 {
        return Vec::new();
    }
    let step: f32 = (360 / count) as f32;

    (0..count)
        .map(|i| {
            let angle: f32 = (step * i as f32).to_radians();
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-4 && (a.1 - b.1).abs() < 1e-4
    }

    #[test]
    fn four_pieces_on_the_axes() {
        let positions = circle_layout(4, 5.0);
        assert_eq!(positions.len(), 4);
        assert!(close(positions[0], (5.0, 0.0)));
        assert!(close(positions[1], (0.0, 5.0)));
        assert!(close(positions[2], (-5.0, 0.0)));
        assert!(close(positions[3], (0.0, -5.0)));
    }

    #[test]
    fn step_is_a_whole_degree() {
        // 360 / 7 = 51 degrees
        let positions = circle_layout(7, 1.0);
        let expected = 51.0_f32.to_radians();
        assert!(close(positions[1], (expected.cos(), expected.sin())));
    }

    #[test]
    fn no_pieces_no_positions() {
        assert!(circle_layout(0, 5.0).is_empty());
    }

    #[test]
    fn positions_stay_on_the_circle() {
        for (x, y) in circle_layout(13, 3.0) {
            assert!(((x * x + y * y).sqrt() - 3.0).abs() < 1e-4);
        }
    }
}
