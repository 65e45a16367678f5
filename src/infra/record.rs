//! Line-oriented record format for a single note.
//!
//! A record is five labeled lines followed by an informational tags line:
//!
//! ```text
//! NoteID: a6d8fcf3-1256-4e9e-bc3d-7b41f2a01385
//! Title: Test Note
//! Content: This is a test note.
//! Author ID: 1
//! Date: 2024-10-09T12:00:00Z
//! Tags: testtag
//! ```
//!
//! Fields are read by line position. Labels are stripped when present but
//! never matched, so a record with different label text still decodes as long
//! as each value is in its slot. The tags line is written for humans only;
//! tag membership always comes from the Tag Index.
//!
//! Values are written verbatim. A title or content containing a line break
//! shifts every following field and the record no longer decodes.
//!
//! A record whose first line ends in `\r` is read as CRLF and a trailing
//! `\r` is stripped from every field. Otherwise a trailing `\r` is part of
//! the value.

use crate::domain::{AuthorId, Note, NoteId};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::fmt;
use thiserror::Error;

const NOTE_ID_LABEL: &str = "NoteID:";
const TITLE_LABEL: &str = "Title:";
const CONTENT_LABEL: &str = "Content:";
const AUTHOR_LABEL: &str = "Author ID:";
const DATE_LABEL: &str = "Date:";
const TAGS_LABEL: &str = "Tags:";

/// Marker written on the tags line of a note without tags.
pub const NO_TAGS: &str = "None";

/// Minimum number of lines a decodable record must have.
pub const REQUIRED_LINES: usize = 5;

/// Naive date/time shapes accepted in the date field besides RFC 3339.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// A positional field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NoteId,
    Title,
    Content,
    AuthorId,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::NoteId => "note id",
            Field::Title => "title",
            Field::Content => "content",
            Field::AuthorId => "author id",
            Field::Date => "date",
        };
        write!(f, "{}", name)
    }
}

/// Errors while decoding a record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record is incomplete: expected at least {REQUIRED_LINES} lines, found {lines}")]
    Incomplete { lines: usize },

    #[error("record is malformed: invalid {field} '{value}'")]
    Malformed { field: Field, value: String },
}

/// Encodes a note as a record.
///
/// The output is deterministic and has no trailing newline.
pub fn encode(note: &Note) -> String {
    let tags = if note.tags().is_empty() {
        NO_TAGS.to_string()
    } else {
        note.tags()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    [
        format!("{} {}", NOTE_ID_LABEL, note.id()),
        format!("{} {}", TITLE_LABEL, note.title()),
        format!("{} {}", CONTENT_LABEL, note.content()),
        format!("{} {}", AUTHOR_LABEL, note.author_id()),
        format!(
            "{} {}",
            DATE_LABEL,
            note.created().to_rfc3339_opts(SecondsFormat::AutoSi, true)
        ),
        format!("{} {}", TAGS_LABEL, tags),
    ]
    .join("\n")
}

/// Decodes a record into a note with an empty tag list.
///
/// # Errors
///
/// Returns `RecordError::Incomplete` if the blob has fewer than five lines.
/// Returns `RecordError::Malformed` if the id, author id or date does not parse.
pub fn decode(blob: &str) -> Result<Note, RecordError> {
    let lines: Vec<&str> = blob.split('\n').collect();
    if lines.len() < REQUIRED_LINES {
        return Err(RecordError::Incomplete { lines: lines.len() });
    }

    let crlf = lines[0].ends_with('\r');

    let raw_id = value_of(lines[0], NOTE_ID_LABEL, crlf).trim();
    let id: NoteId = raw_id.parse().map_err(|_| malformed(Field::NoteId, raw_id))?;

    let title = value_of(lines[1], TITLE_LABEL, crlf);
    let content = value_of(lines[2], CONTENT_LABEL, crlf);

    let raw_author = value_of(lines[3], AUTHOR_LABEL, crlf).trim();
    let author_id: AuthorId = raw_author
        .parse()
        .map_err(|_| malformed(Field::AuthorId, raw_author))?;

    let raw_date = value_of(lines[4], DATE_LABEL, crlf).trim();
    let created = parse_date(raw_date).ok_or_else(|| malformed(Field::Date, raw_date))?;

    Ok(Note::new(id, title, content, author_id, created))
}

/// Strips the label and the single separating space, plus the CR of a CRLF
/// line ending.
fn value_of<'a>(line: &'a str, label: &str, crlf: bool) -> &'a str {
    let line = match line.strip_suffix('\r') {
        Some(stripped) if crlf => stripped,
        _ => line,
    };
    match line.strip_prefix(label) {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

fn malformed(field: Field, value: &str) -> RecordError {
    RecordError::Malformed {
        field,
        value: value.to_string(),
    }
}

/// Parses the date field. Values without an offset are taken as UTC.
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
