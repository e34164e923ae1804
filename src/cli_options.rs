/*
cli_options.rs

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

//! Process command-line options.
//!
//! In command-line mode, Piecemeal generates levels and prints them, either as a grid of
//! piece labels or in JSON format. Developers use it to check how the generator cuts a grid
//! for given settings.
//!
//! # Examples
//!
//! Generate a 6x4 level with pieces of at most 4 cells, from a fixed seed. Each row of the
//! grid is printed on its own line, and each cell shows the label of the piece covering it:
//!
//! ```
//! $ piecemeal -W 6 -H 4 -m 4 -s 12
//! ```
//!
//! Generate a level, save it in the current directory, and display it again later:
//!
//! ```
//! $ piecemeal -s 3 -o .
//! $ piecemeal -l .
//! ```

use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use piecemeal::config::{
    COPYRIGHT_NOTICE, DEFAULT_HEIGHT, DEFAULT_MAX_PIECE_SIZE, DEFAULT_WIDTH,
};
use piecemeal::generator::grid::GridError;
use piecemeal::generator::partition::{Partition, PartitionGenerator, PartitionStats};
use piecemeal::generator::random_source::RngSource;
use piecemeal::generator::settings::Settings;
use piecemeal::generator::size_schedule::split_cells;
use piecemeal::level::Level;
use piecemeal::render::TextRenderer;
use piecemeal::saver::SaverLevel;

/// Generate Piecemeal levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of columns in the grid
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    width: i64,

    /// Number of rows in the grid
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    height: i64,

    /// Largest number of cells in a piece
    #[arg(short, long, default_value_t = DEFAULT_MAX_PIECE_SIZE, allow_negative_numbers = true)]
    max_piece_size: i64,

    /// Seed for the random generator. Successive levels use the following seeds
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the levels in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Directory where the last generated level is saved
    #[arg(short, long, conflicts_with = "load")]
    output: Option<PathBuf>,

    /// Display the level saved in the given directory instead of generating one
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Print some statistics after generating the levels
    #[arg(short = 'S', long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Display a saved level
    //
    if let Some(dir) = &args.load {
        return match SaverLevel::new(dir.clone()).get_level() {
            Ok(Some(level)) => match print_level(&level, args.json) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {e}");
                    1
                }
            },
            Ok(None) => {
                eprintln!("No saved level in {}", dir.display());
                1
            }
            Err(e) => {
                eprintln!("Error: cannot load the saved level: {e}");
                1
            }
        };
    }

    let settings: Settings = Settings::new(args.width, args.height, args.max_piece_size);
    let mut generator: PartitionGenerator = match PartitionGenerator::new(&settings) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut pieces: usize = 0;
    let mut under_filled: usize = 0;
    let mut last: Option<Level> = None;

    for i in 0..args.count {
        debug!("Level {i}");

        let seed: Option<u64> = args.seed.map(|s| s.wrapping_add(i as u64));
        let ret: Result<Partition, GridError> = match seed {
            Some(s) => generator.generate(&mut RngSource::new(StdRng::seed_from_u64(s))),
            None => generator.generate(&mut RngSource::thread()),
        };
        let partition: Partition = match ret {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        };

        // Verify that the pieces cover the grid exactly
        if let Err(e) = partition.verify() {
            eprintln!("Bug: invalid partition: {e}");
            return 1;
        }

        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        let stats: PartitionStats = partition.stats();
        pieces += stats.pieces;
        under_filled += stats.under_filled;

        let level: Level = Level::new(settings, seed, partition);
        if let Err(e) = print_level(&level, args.json) {
            eprintln!("Error: {e}");
            return 1;
        }
        last = Some(level);
    }

    //
    // Save the last level
    //
    if let (Some(dir), Some(level)) = (&args.output, &last) {
        let saver: SaverLevel = SaverLevel::new(dir.clone());
        if let Err(e) = saver.save_level(level) {
            eprintln!("Error: cannot save the level: {e}");
            return 1;
        }
        info!("Level saved in {}", dir.display());
    }

    // Print some stats
    if args.summary && args.count > 0 {
        let plan: Vec<usize> = split_cells(
            generator.grid().size(),
            settings.max_piece_size as usize,
        );
        println!(
            "
            levels = {}
    average pieces = {}
     planned sizes = {:?}
      under-filled = {}
        total time = {}s
      average time = {}s
          max time = {}s",
            args.count,
            pieces as f32 / args.count as f32,
            plan,
            under_filled,
            total,
            total / args.count as f32,
            max
        );
    }
    0
}

/// Print a level as a grid of piece labels, or in JSON format.
fn print_level(level: &Level, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(level)?);
    } else {
        println!("{}", TextRenderer.render_partition(&level.partition));
    }
    Ok(())
}
