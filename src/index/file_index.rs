//! Append-only index with one file per key.

use super::{IndexError, IndexKey, IndexResult};
use crate::domain::NoteId;
use crate::infra::{FILE_EXTENSION, FsError, append_line, read_lines, scan_files};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A keyed, append-only association from keys to note identifiers.
///
/// Every key has its own file holding one note id per line. Appending is a
/// single `O_APPEND` write with no read beforehand, so concurrent appends to
/// the same key never lose an entry. Entries are never removed.
///
/// An absent file and an empty file both read as an empty sequence.
#[derive(Debug, Clone)]
pub struct FileIndex<K> {
    dir: PathBuf,
    _key: PhantomData<fn() -> K>,
}

impl<K: IndexKey> FileIndex<K> {
    /// Creates an index rooted at `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            _key: PhantomData,
        }
    }

    /// Returns the directory holding the entry files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &K) -> PathBuf {
        self.dir
            .join(format!("{}.{}", key.file_stem(), FILE_EXTENSION))
    }

    /// Appends `note_id` to the entry for `key`, creating it if absent.
    ///
    /// Not idempotent: appending the same pair twice records it twice.
    pub fn append(&self, key: &K, note_id: &NoteId) -> IndexResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| IndexError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.entry_path(key);
        append_line(&path, &note_id.to_string())?;
        log::debug!("appended {} to {}", note_id, path.display());
        Ok(())
    }

    /// Returns every note id recorded for `key`, in append order.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::MalformedEntry` if a line is not a note id.
    pub fn list(&self, key: &K) -> IndexResult<Vec<NoteId>> {
        let path = self.entry_path(key);
        let Some(lines) = read_lines(&path)? else {
            return Ok(Vec::new());
        };

        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                line.parse::<NoteId>().map_err(|_| IndexError::MalformedEntry {
                    path: path.clone(),
                    line: i + 1,
                    value: line.clone(),
                })
            })
            .collect()
    }

    /// Returns every key whose entry contains `note_id`.
    ///
    /// This scans all entry files in file-name order. Each key appears at
    /// most once. Lines that are not note ids are ignored here, and so are
    /// entry files that are not valid UTF-8.
    pub fn entries_containing(&self, note_id: &NoteId) -> IndexResult<Vec<K>> {
        let mut keys = Vec::new();
        for (key, path) in self.entry_files()? {
            let Some(lines) = read_entry_lines(&path)? else {
                continue;
            };
            let found = lines
                .iter()
                .any(|line| line.parse::<NoteId>().is_ok_and(|id| id == *note_id));
            if found {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    /// Returns every key that has an entry file, in file-name order.
    pub fn keys(&self) -> IndexResult<Vec<K>> {
        Ok(self.entry_files()?.into_iter().map(|(key, _)| key).collect())
    }

    /// Returns every key with the length of its entry.
    ///
    /// Entry files that are not valid UTF-8 are left out.
    pub fn counts(&self) -> IndexResult<Vec<(K, usize)>> {
        let mut counts = Vec::new();
        for (key, path) in self.entry_files()? {
            if let Some(lines) = read_entry_lines(&path)? {
                counts.push((key, lines.len()));
            }
        }
        Ok(counts)
    }

    fn entry_files(&self) -> IndexResult<Vec<(K, PathBuf)>> {
        let files = scan_files(&self.dir, FILE_EXTENSION)?;
        Ok(files
            .into_iter()
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                K::from_file_stem(stem).map(|key| (key, path.clone()))
            })
            .collect())
    }
}

/// Reads an entry file found by a scan.
///
/// Returns `Ok(None)` for a file that vanished or is not valid UTF-8. The
/// latter is logged.
fn read_entry_lines(path: &Path) -> IndexResult<Option<Vec<String>>> {
    match read_lines(path) {
        Ok(lines) => Ok(lines),
        Err(err @ FsError::InvalidEncoding { .. }) => {
            log::warn!("skipping index entry: {}", err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
