//! Persistent submission history
//!
//! The whole history lives in a single JSON file holding a flat list of
//! submissions. It is read once when the store is loaded and written once when
//! the store is flushed.

use crate::error::StoreError;
use crate::judge::judge;
use crate::model::{PuzzleId, SubmissionRecord, SubmissionStatus};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// History of past submissions keyed by puzzle
///
/// Records for one puzzle keep their insertion order, which is the order the
/// answers were submitted in. Nothing is ever removed or edited.
#[derive(Debug)]
pub struct SubmissionStore {
    path: PathBuf,
    history: BTreeMap<PuzzleId, Vec<SubmissionRecord>>,
    dirty: bool,
}

impl SubmissionStore {
    /// Load the history from `path`
    ///
    /// A missing file is created empty. A file that cannot be read or parsed is
    /// an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut store = Self {
            path,
            history: BTreeMap::new(),
            dirty: false,
        };

        if !store.path.exists() {
            store.create_empty()?;
            info!(path = %store.path.display(), "created empty submission store");
            return Ok(store);
        }

        let content = fs::read_to_string(&store.path).map_err(|source| StoreError::Read {
            path: store.path.clone(),
            source,
        })?;

        if !content.trim().is_empty() {
            let records: Vec<SubmissionRecord> =
                serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                    path: store.path.clone(),
                    source,
                })?;
            store.append(records);
        }

        debug!(
            path = %store.path.display(),
            submissions = store.len(),
            puzzles = store.history.len(),
            "loaded submission store"
        );
        Ok(store)
    }

    fn create_empty(&self) -> Result<(), StoreError> {
        let create_error = |source| StoreError::Create {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(create_error)?;
        }
        fs::File::create(&self.path).map_err(create_error)?;
        Ok(())
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append submissions to the history of their puzzles
    ///
    /// Nothing is written until [`flush`](Self::flush).
    pub fn record(&mut self, submissions: impl IntoIterator<Item = SubmissionRecord>) {
        if self.append(submissions) > 0 {
            self.dirty = true;
        }
    }

    fn append(&mut self, submissions: impl IntoIterator<Item = SubmissionRecord>) -> usize {
        let mut appended = 0;
        for submission in submissions {
            self.history
                .entry(submission.puzzle())
                .or_default()
                .push(submission);
            appended += 1;
        }
        appended
    }

    /// Whether any submission for `puzzle` was accepted
    pub fn is_already_solved(&self, puzzle: PuzzleId) -> bool {
        self.history(puzzle)
            .iter()
            .any(|submission| submission.status() == SubmissionStatus::Correct)
    }

    /// Submissions for `puzzle` in the order they were made
    pub fn history(&self, puzzle: PuzzleId) -> &[SubmissionRecord] {
        self.history.get(&puzzle).map_or(&[], Vec::as_slice)
    }

    /// Judge `answer` against the history of `puzzle`
    pub fn judge(&self, puzzle: PuzzleId, answer: &str) -> SubmissionStatus {
        judge(self.history(puzzle), answer)
    }

    /// Puzzles with at least one submission, ascending
    pub fn puzzles(&self) -> impl Iterator<Item = PuzzleId> + '_ {
        self.history.keys().copied()
    }

    /// Total number of submissions across all puzzles
    pub fn len(&self) -> usize {
        self.history.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Whether submissions were recorded since loading
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the full history back, replacing the file
    ///
    /// Consumes the store so the history is written at most once. When nothing
    /// was recorded since loading the file is left as it is.
    pub fn flush(mut self) -> Result<(), StoreError> {
        if !self.dirty {
            debug!(path = %self.path.display(), "no new submissions to persist");
            return Ok(());
        }
        self.dirty = false;
        self.write()?;
        info!(
            path = %self.path.display(),
            submissions = self.len(),
            "persisted submission history"
        );
        Ok(())
    }

    fn write(&self) -> Result<(), StoreError> {
        let records: Vec<&SubmissionRecord> = self.history.values().flatten().collect();
        let write_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        // Replace atomically so a failed write never truncates the old history.
        let staging = staging_path(&self.path);
        let file = fs::File::create(&staging).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &records).map_err(|source| {
            StoreError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(write_error)?;
        drop(writer);
        fs::rename(&staging, &self.path).map_err(write_error)
    }
}

impl Drop for SubmissionStore {
    fn drop(&mut self) {
        // Only reached with unsaved submissions when unwinding past the owner.
        if self.dirty {
            self.dirty = false;
            match self.write() {
                Ok(()) => warn!(
                    path = %self.path.display(),
                    "submission store dropped without flush; history written on drop"
                ),
                Err(e) => error!(
                    path = %self.path.display(),
                    error = %e,
                    "submission store dropped without flush; recent submissions are lost"
                ),
            }
        }
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Run `body` with a loaded store and always flush it afterwards
///
/// The store is flushed whether or not `body` fails. A flush failure is
/// returned when `body` succeeded; when both fail the flush failure is logged
/// at error level and the error from `body` is returned.
pub fn with_store<T, E, F>(path: impl Into<PathBuf>, body: F) -> Result<T, E>
where
    F: FnOnce(&mut SubmissionStore) -> Result<T, E>,
    E: From<StoreError>,
{
    let mut store = SubmissionStore::load(path)?;
    let outcome = body(&mut store);
    let flushed = store.flush();

    match (outcome, flushed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(flush_error)) => Err(flush_error.into()),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(flush_error)) => {
            error!(error = %flush_error, "failed to persist submission history");
            Err(e)
        }
    }
}
