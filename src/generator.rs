/*
generator.rs

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

//! Generate the pieces of a level.
//!
//! A level is a rectangular [`grid::Grid`] cut into connected pieces that together cover every
//! cell exactly once.
//!
//! To generate a level, create a [`partition::PartitionGenerator`] object from validated
//! [`settings::Settings`], and use its [`partition::PartitionGenerator::generate`] method with a
//! [`random_source::RandomSource`].
//! The generator grows each piece with a [`random_walk::RandomWalk`], starting from the lowest
//! free cell, and with a target size given by the [`size_schedule::SizeScheduler`]:
//!
//! * Piece sizes go down from the maximum piece size to 1, and then start over.
//! * A walk can stop before reaching its target size. The piece is then smaller than planned;
//!   this is not an error.
//!
//! The random source is injected: [`random_source::RngSource`] wraps any [`rand::Rng`], and a
//! seeded generator always gives the same [`partition::Partition`].

pub mod direction;
pub mod grid;
pub mod partition;
pub mod piece;
pub mod random_source;
pub mod random_walk;
pub mod settings;
pub mod size_schedule;
