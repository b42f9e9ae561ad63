//! Entry file format.
//!
//! One entry per file, one field per line, in a fixed order:
//!
//! ```text
//! Ardbeg          category
//! 10              age
//! 8.500000        rating
//! 2008            vintage
//! 2018            bottling year
//! Ardbeg          bottler
//! Uigeadail       display name (empty when absent)
//! ```
//!
//! Position is the only thing that identifies a field. Older files stop after
//! the rating line; the decoder treats every missing line as an absent field.

use super::sequence::parse_sequence;
use crate::error::{LqlError, Result};
use crate::model::{Entry, Note};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Fraction digits written for the rating.
pub const RATING_STORAGE_PRECISION: usize = 6;

/// Rejects text fields that would spill onto another line.
pub fn validate(entry: &Entry) -> Result<()> {
    let fields = [
        ("distillery", Some(entry.category.as_str())),
        ("bottler", Some(entry.bottler.as_str())),
        ("name", entry.name.as_deref()),
    ];
    for (field, value) in fields {
        if value.is_some_and(|v| v.contains(['\n', '\r'])) {
            return Err(LqlError::InvalidField {
                field,
                reason: "line breaks are not allowed".to_string(),
            });
        }
    }
    Ok(())
}

pub fn encode(entry: &Entry) -> Result<String> {
    validate(entry)?;
    Ok(format!(
        "{}\n{}\n{:.prec$}\n{}\n{}\n{}\n{}\n",
        entry.category,
        entry.age,
        entry.rating,
        entry.vintage,
        entry.bottled,
        entry.bottler,
        entry.display_name().unwrap_or(""),
        prec = RATING_STORAGE_PRECISION,
    ))
}

pub fn decode(sequence: u64, text: &str) -> Note {
    let mut lines = text.lines();

    let category = lines.next().unwrap_or_default().to_string();
    let age = parse_field(lines.next(), "age", sequence);
    let rating = parse_field(lines.next(), "rating", sequence);
    let vintage = parse_field(lines.next(), "vintage", sequence);
    let bottled = parse_field(lines.next(), "bottling year", sequence);
    let bottler = lines.next().map(str::to_string);
    let name = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string);

    Note {
        sequence,
        category,
        age,
        rating,
        vintage,
        bottled,
        bottler,
        name,
    }
}

fn parse_field<T: FromStr>(line: Option<&str>, field: &str, sequence: u64) -> Option<T> {
    let raw = line?.trim();
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("entry {}: unreadable {} {:?}", sequence, field, raw);
            None
        }
    }
}

/// Writes `entry` to `<dir>/<sequence>`.
///
/// The file must not exist yet. Failing to create it is fatal for the write
/// and is reported as [`LqlError::EntryWrite`].
pub fn write_entry(dir: &Path, sequence: u64, entry: &Entry) -> Result<PathBuf> {
    let text = encode(entry)?;
    let path = dir.join(sequence.to_string());
    let write_err = |source| LqlError::EntryWrite {
        path: path.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;

    log::debug!("wrote entry {}", path.display());
    Ok(path)
}

/// Reads and decodes one entry file. The sequence comes from the file name.
pub fn read_note(path: &Path) -> Result<Note> {
    let text = fs::read_to_string(path)?;
    let sequence = path
        .file_name()
        .map(|name| parse_sequence(&name.to_string_lossy()))
        .unwrap_or(0);
    Ok(decode(sequence, &text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry() -> Entry {
        Entry {
            category: "Ardbeg".into(),
            name: Some("Uigeadail".into()),
            bottler: "Ardbeg".into(),
            age: 10,
            vintage: 2008,
            bottled: 2018,
            rating: 8.5,
        }
    }

    #[test]
    fn encodes_fields_in_fixed_order() {
        assert_eq!(
            encode(&entry()).unwrap(),
            "Ardbeg\n10\n8.500000\n2008\n2018\nArdbeg\nUigeadail\n"
        );
    }

    #[test]
    fn absent_name_is_an_empty_line() {
        let mut e = entry();
        e.name = None;
        let text = encode(&e).unwrap();
        assert!(text.ends_with("Ardbeg\n\n"));
        assert_eq!(decode(0, &text).name, None);
    }

    #[test]
    fn blank_name_is_written_as_an_empty_line() {
        let mut e = entry();
        e.name = Some("  ".into());
        let text = encode(&e).unwrap();
        assert!(text.ends_with("Ardbeg\n\n"));
        assert_eq!(decode(0, &text), Note::from_entry(0, &e));
    }

    #[test]
    fn decodes_what_it_encodes() {
        let e = entry();
        assert_eq!(decode(4, &encode(&e).unwrap()), Note::from_entry(4, &e));
    }

    #[test]
    fn line_breaks_in_text_fields_are_refused() {
        let mut e = entry();
        e.bottler = "Gordon\nMacPhail".into();
        assert!(matches!(
            encode(&e),
            Err(LqlError::InvalidField {
                field: "bottler",
                ..
            })
        ));

        let mut e = entry();
        e.name = Some("Ten\r".into());
        assert!(matches!(
            encode(&e),
            Err(LqlError::InvalidField { field: "name", .. })
        ));
    }

    #[test]
    fn write_with_line_break_leaves_no_file() {
        let temp = TempDir::new().unwrap();
        let mut e = entry();
        e.category = "Ard\nbeg".into();

        assert!(matches!(
            write_entry(temp.path(), 0, &e),
            Err(LqlError::InvalidField { .. })
        ));
        assert!(!temp.path().join("0").exists());
    }

    #[test]
    fn category_line_has_no_terminator() {
        let note = decode(0, "Ardbeg\r\n10\r\n8.5\r\n");
        assert_eq!(note.category, "Ardbeg");
        assert_eq!(note.age, Some(10));
    }

    #[test]
    fn legacy_three_line_file() {
        let note = decode(2, "Laphroaig\n18\n9.000000\n");
        assert_eq!(note.category, "Laphroaig");
        assert_eq!(note.age, Some(18));
        assert_eq!(note.rating, Some(9.0));
        assert_eq!(note.vintage, None);
        assert_eq!(note.bottled, None);
        assert_eq!(note.bottler, None);
        assert_eq!(note.name, None);
    }

    #[test]
    fn unreadable_numbers_are_absent() {
        let note = decode(0, "Ardbeg\nten\n8.5\n");
        assert_eq!(note.age, None);
        assert_eq!(note.rating, Some(8.5));
    }

    #[test]
    fn empty_file_decodes_to_blank_note() {
        let note = decode(1, "");
        assert_eq!(note.category, "");
        assert_eq!(note.age, None);
        assert_eq!(note.rating, None);
    }

    #[test]
    fn write_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        write_entry(temp.path(), 0, &entry()).unwrap();

        let err = write_entry(temp.path(), 0, &entry()).unwrap_err();
        assert!(matches!(err, LqlError::EntryWrite { .. }));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let result = write_entry(&temp.path().join("gone"), 0, &entry());
        assert!(matches!(result, Err(LqlError::EntryWrite { .. })));
    }

    #[test]
    fn read_note_takes_sequence_from_file_name() {
        let temp = TempDir::new().unwrap();
        let path = write_entry(temp.path(), 12, &entry()).unwrap();

        let note = read_note(&path).unwrap();
        assert_eq!(note.sequence, 12);
        assert_eq!(note.name.as_deref(), Some("Uigeadail"));
    }
}
