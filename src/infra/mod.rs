//! File I/O, record format, storage layout

mod fs;
mod layout;
pub mod record;

pub use fs::{FsError, append_line, read_lines, read_text, scan_files, write_atomic};
pub use layout::{FILE_EXTENSION, StorageLayout};
pub use record::{RecordError, decode, encode};
