/*
saver.rs

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

//! Save and restore a generated level.
//!
//! The saved object is a serialization of the [`Level`] object in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::config::SAVE_FILE_NAME;
use crate::level::Level;

/// Object to save and restore a level.
pub struct SaverLevel {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverLevel {
    /// Create a [`SaverLevel`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the level must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(SAVE_FILE_NAME);
        debug!("Level file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved [`Level`] object.
    ///
    /// Return the [`Level`] object or None if there is no saved level.
    /// A level that does not pass [`Level::verify`] is an error.
    pub fn get_level(&self) -> Result<Option<Level>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let level: Level = serde_json::from_reader(reader)?;
        level.verify()?;
        Ok(Some(level))
    }

    /// Save the provided [`Level`] object.
    pub fn save_level(&self, level: &Level) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, level)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved level.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
