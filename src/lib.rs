/*
lib.rs

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

//! Piecemeal generates the levels of a piece-assembly puzzle.
//!
//! The [`generator`] module cuts a rectangular grid into connected pieces.
//! The other modules are the collaborators of a front end: [`layout`] spreads the pieces
//! before play, [`board`] tracks them while the player assembles the level, [`render`] turns
//! them into drawable objects, and [`saver`] keeps a [`level::Level`] on disk.

pub mod board;
pub mod config;
pub mod generator;
pub mod layout;
pub mod level;
pub mod render;
pub mod saver;
