//! Shared capability-based filesystem helpers for user-registry tests.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Create a unique temp file path under `target/user-registry-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the temp directory.
pub fn unique_temp_path(prefix: &str, file_name: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir_name = format!("{prefix}-{process_id}-{counter}");
    let dir = Utf8PathBuf::from("target")
        .join("user-registry-tests")
        .join(dir_name);
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    Ok(dir.join(file_name))
}

/// Write `lines` to a fresh bulk file, one per line, and return its path.
///
/// # Errors
///
/// Returns any filesystem errors encountered while writing the file.
pub fn write_bulk_file(prefix: &str, lines: &[&str]) -> io::Result<Utf8PathBuf> {
    let path = unique_temp_path(prefix, "users.csv")?;
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    let file_name = path.file_name().unwrap_or("users.csv");
    let mut contents = lines.join("\n");
    contents.push('\n');
    dir.write(file_name, contents)?;
    Ok(path)
}
