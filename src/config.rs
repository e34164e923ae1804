/*
config.rs

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

//! Program constants.

/// Notice printed with `--version`.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 The Piecemeal Authors
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Default number of columns in the grid.
pub const DEFAULT_WIDTH: i64 = 8;

/// Default number of rows in the grid.
pub const DEFAULT_HEIGHT: i64 = 8;

/// Default largest piece size.
pub const DEFAULT_MAX_PIECE_SIZE: i64 = 5;

/// Radius of the circle on which the pieces are initially spread.
pub const LAYOUT_RADIUS: f32 = 5.0;

/// Name of the file that stores a saved level.
pub const SAVE_FILE_NAME: &str = "level.json";
