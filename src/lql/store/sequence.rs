//! Sequence number allocation.
//!
//! Entry files are named by their sequence number. The next number is one past
//! the highest number already on disk, so allocation is a directory scan with
//! no state of its own.
//!
//! Two processes writing to the same category can both see the same next
//! number. Nothing here prevents that; the codec's create-new open turns the
//! collision into a write error instead of an overwrite.

use std::fs;
use std::path::Path;

/// Parses the leading run of ASCII digits in a file name.
///
/// Names without leading digits parse as 0. Runs too large for `u64`
/// saturate.
pub fn parse_sequence(name: &str) -> u64 {
    name.bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

/// Sequence numbers of the regular files in `dir`.
///
/// A directory that cannot be read yields nothing.
pub fn existing_sequences(dir: &Path) -> Vec<u64> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| parse_sequence(&entry.file_name().to_string_lossy()))
        .collect()
}

/// The sequence number the next entry in `dir` should use.
pub fn next_sequence(dir: &Path) -> u64 {
    let next = existing_sequences(dir)
        .into_iter()
        .max()
        .map_or(0, |max| max.saturating_add(1));
    log::debug!("next sequence in {} is {}", dir.display(), next);
    next
}
