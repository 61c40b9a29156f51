//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based cache for puzzle inputs and hand-made samples
///
/// Directory structure:
/// - `{dir}/{year}_day{day:02}.txt` for downloaded inputs
/// - `{dir}/samples/{year}_day{day:02}.txt` for sample inputs
pub struct InputCache {
    dir: PathBuf,
}

fn file_name(year: u16, day: u8) -> String {
    format!("{}_day{:02}.txt", year, day)
}

fn read_optional(path: &Path) -> Result<Option<String>, CacheError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CacheError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl InputCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(file_name(year, day))
    }

    pub fn sample_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join("samples").join(file_name(year, day))
    }

    /// Get cached input or None if not cached
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        read_optional(&self.input_path(year, day))
    }

    /// Store input in cache
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).map_err(|source| CacheError::DirCreation {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.input_path(year, day);
        fs::write(&path, input).map_err(|source| CacheError::Write { path, source })
    }

    /// Sample input for a day, if one was saved
    pub fn sample(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        read_optional(&self.sample_path(year, day))
    }
}
