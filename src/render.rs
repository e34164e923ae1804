/*
render.rs

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

//! Turn pieces into something that can be displayed.
//!
//! A front end implements [`Renderer`] to build its own drawable objects (one unit quad per
//! offset, merged into a mesh, for example).
//! [`TextRenderer`] is the renderer used by the command line.

use crate::generator::grid::Coordinate;
use crate::generator::partition::Partition;
use crate::generator::piece::Piece;

const LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Character that identifies the piece with the given number. Labels are reused after 62
/// pieces.
pub fn piece_label(piece: usize) -> char {
    LABELS[piece % LABELS.len()] as char
}

/// Build a drawable object for a piece.
pub trait Renderer {
    /// Drawable object.
    type Output;

    /// Build the drawable object for the piece with the given number.
    fn render_piece(&mut self, index: usize, piece: &Piece) -> Self::Output;
}

/// Text renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    /// Render the whole grid, one line per row starting with row 0, each cell showing the
    /// label of the piece that covers it.
    pub fn render_partition(&self, partition: &Partition) -> String {
        let width: usize = partition.grid().width() as usize;
        let mut s: String = String::with_capacity(partition.grid().size() + width);

        for row in partition.owner_map().chunks(width.max(1)) {
            for owner in row {
                s.push(owner.map_or('.', piece_label));
            }
            s.push('\n');
        }
        s
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    /// Render the piece inside its bounding box: `#` for the cells of the piece and `.`
    /// elsewhere.
    fn render_piece(&mut self, _index: usize, piece: &Piece) -> String {
        let (min, max) = piece.bounds();
        let mut s: String = String::new();

        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if piece.offsets().contains(&Coordinate::new(x, y)) {
                    s.push('#');
                } else {
                    s.push('.');
                }
            }
            s.push('\n');
        }
        s
    }
}
