//! Bulk import of users from comma-delimited text files.
//!
//! Import is a three-step pipeline: [`load`] reads the raw lines, [`process`]
//! splits each line into fields, and a layout-specific step turns the parsed
//! lines into records. Bulk records are never validated.
//!
//! # File format
//!
//! Plain text with comma-separated fields. There is no header and no quoting,
//! so a comma inside a field is read as a separator.

use std::io::{self, Read};
use std::mem;
use std::path::Path;

use cap_std::{ambient_authority, fs::File};
use tracing::{debug, info};

use crate::error::{BulkError, Field};
use crate::record::UserRecord;

/// Number of leading parsed lines the legacy layout never reads.
const LEGACY_SKIPPED_LINES: usize = 3;

/// Width of the window the legacy layout takes at each index.
const LEGACY_WINDOW: usize = 3;

/// Fields that make up one user.
const FIELDS_PER_USER: usize = 3;

/// How parsed lines are turned into user records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BulkLayout {
    /// One record per line from the fourth line onward, as produced by
    /// [`register_bulk`].
    #[default]
    Legacy,
    /// Every three consecutive fields form one record, as produced by
    /// [`register_chunked`].
    Chunked,
}

/// Reads a bulk file into memory, one entry per line.
///
/// `\n`, `\r\n`, and a bare `\r` all end a line. Terminators are kept on
/// each entry; [`process`] strips them. The path is opened as given, so a
/// symlink is followed wherever it points.
///
/// # Errors
///
/// Returns [`BulkError::Read`] if the file cannot be opened or read.
pub fn load(path: &Path) -> Result<Vec<String>, BulkError> {
    let read_error = |err: io::Error| BulkError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let mut file = File::open_ambient(path, ambient_authority()).map_err(read_error)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(read_error)?;

    let lines = split_lines(&contents);
    debug!(path = %path.display(), lines = lines.len(), "loaded bulk file");
    Ok(lines)
}

fn split_lines(contents: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = contents.chars().peekable();
    while let Some(ch) = chars.next() {
        current.push(ch);
        let ends_line = match ch {
            '\n' => true,
            '\r' => {
                if let Some(lf) = chars.next_if_eq(&'\n') {
                    current.push(lf);
                }
                true
            }
            _ => false,
        };
        if ends_line {
            lines.push(mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Trims each line and splits it on commas, preserving order.
///
/// # Examples
///
/// ```
/// use user_registry::process;
///
/// let parsed = process(&["A,a@test.com,Pw0rd12\n"]);
///
/// assert_eq!(parsed, vec![vec!["A", "a@test.com", "Pw0rd12"]]);
/// ```
#[must_use]
pub fn process<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| line.as_ref().trim().split(',').map(str::to_owned).collect())
        .collect()
}

/// Builds records with the legacy layout.
///
/// For each index `i` from 3 to the end, the window `processed[i..i + 3]`
/// (shorter near the end) is taken and only its first line is read, so the
/// result holds one record per line after the first three.
///
/// # Errors
///
/// Returns [`BulkError::MissingField`] if a line read for a record has fewer
/// than three fields.
///
/// # Examples
///
/// ```
/// use user_registry::{process, register_bulk};
///
/// let parsed = process(&[
///     "A,a@test.com,Pw0rd12",
///     "B,b@test.com,Pw1rd34",
///     "C,c@test.com,Pw2rd56",
///     "D,d@test.com,Pw3rd78",
/// ]);
/// let records = register_bulk(&parsed).expect("well-formed lines");
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "D");
/// ```
pub fn register_bulk(processed: &[Vec<String>]) -> Result<Vec<UserRecord>, BulkError> {
    let mut records = Vec::new();
    for index in LEGACY_SKIPPED_LINES..processed.len() {
        let end = processed.len().min(index + LEGACY_WINDOW);
        let window = processed.get(index..end).unwrap_or_default();
        let Some(first) = window.first() else {
            continue;
        };
        records.push(record_from_fields(first, index)?);
    }
    Ok(records)
}

/// Builds records by reading the parsed fields three at a time.
///
/// Fields are taken in file order regardless of how they are split across
/// lines, so both `name,email,password` lines and one-field-per-line files
/// are read correctly. No lines are skipped.
///
/// # Errors
///
/// Returns [`BulkError::IncompleteRecord`] if the field count is not a
/// multiple of three.
pub fn register_chunked(processed: &[Vec<String>]) -> Result<Vec<UserRecord>, BulkError> {
    let fields: Vec<&String> = processed.iter().flatten().collect();
    fields
        .chunks(FIELDS_PER_USER)
        .map(|chunk| match chunk {
            [name, email, password] => Ok(UserRecord {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            }),
            partial => Err(BulkError::IncompleteRecord {
                fields: partial.len(),
            }),
        })
        .collect()
}

/// Runs the full pipeline for the file at `path`.
///
/// # Errors
///
/// Returns [`BulkError`] if the file cannot be read or its contents do not
/// fit `layout`.
pub fn import(path: &Path, layout: BulkLayout) -> Result<Vec<UserRecord>, BulkError> {
    let lines = load(path)?;
    let processed = process(&lines);
    let records = match layout {
        BulkLayout::Legacy => register_bulk(&processed)?,
        BulkLayout::Chunked => register_chunked(&processed)?,
    };
    info!(
        path = %path.display(),
        layout = ?layout,
        records = records.len(),
        "bulk import finished"
    );
    Ok(records)
}

fn record_from_fields(fields: &[String], line: usize) -> Result<UserRecord, BulkError> {
    let field_at = |position: usize, field: Field| {
        fields
            .get(position)
            .cloned()
            .ok_or(BulkError::MissingField { line, field })
    };
    Ok(UserRecord {
        name: field_at(0, Field::Name)?,
        email: field_at(1, Field::Email)?,
        password: field_at(2, Field::Password)?,
    })
}
