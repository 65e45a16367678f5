//! File I/O for records and index entries: atomic writes, true appends, scans.

use std::fs::OpenOptions;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors during file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads a whole text file.
///
/// Returns `Ok(None)` if the file does not exist. A leading UTF-8 BOM is
/// stripped.
///
/// # Errors
///
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
/// Returns `FsError::PermissionDenied` or `FsError::Io` for other failures.
pub fn read_text(path: &Path) -> Result<Option<String>, FsError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(FsError::from_io(path, e)),
    };

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => Ok(Some(stripped.to_string())),
        None => Ok(Some(content)),
    }
}

/// Writes a file atomically.
///
/// Content goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either nothing or the whole file.
/// The parent directory must exist.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::ParentNotFound { path: path.into() })?;

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;

    temp.write_all(contents.as_bytes())
        .map_err(|e| FsError::from_io(path, e))?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Appends one line to a file, creating the file if needed.
///
/// The line and its terminator go out in a single `O_APPEND` write. Nothing
/// is read first, so concurrent appenders cannot overwrite each other.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
pub fn append_line(path: &Path, line: &str) -> Result<(), FsError> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FsError::ParentNotFound {
                path: path.parent().unwrap_or(path).into(),
            },
            _ => FsError::from_io(path, e),
        })?;

    file.write_all(buf.as_bytes())
        .map_err(|e| FsError::from_io(path, e))
}

/// Reads a file as trimmed, non-blank lines.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>, FsError> {
    Ok(read_text(path)?.map(|text| {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }))
}

/// Lists the files directly inside `dir` with the given extension.
///
/// Hidden files (starting with `.`, which includes in-flight temp files) are
/// skipped. Results are sorted by file name. A missing directory yields an
/// empty list.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if `dir` exists but is not a directory.
/// Returns `FsError::Io` if the directory cannot be read.
pub fn scan_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FsError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| FsError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() && has_extension(&entry, extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// The scanned directory itself is never hidden, whatever its name.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.'))
}

fn has_extension(entry: &DirEntry, extension: &str) -> bool {
    entry.path().extension().is_some_and(|e| e == extension)
}
