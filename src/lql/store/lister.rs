//! Directory enumeration: distilleries under the root, notes inside a
//! distillery.
//!
//! A missing directory lists as empty. Only the root listing decides which
//! names are categories; index assignment and index lookup both read it.

use super::codec::read_note;
use crate::error::Result;
use crate::index::{index_categories, name_at, DisplayCategory};
use crate::model::Note;
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().map(|t| t.is_file()).unwrap_or(false)
}

fn children(dir: &Path) -> Vec<DirEntry> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            log::debug!("cannot list {}: {}", dir.display(), e);
            Vec::new()
        }
    }
}

/// Names of the category directories under `root`, sorted.
pub fn category_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = children(root)
        .into_iter()
        .filter(is_dir)
        .filter_map(|entry| match entry.file_name().into_string() {
            Ok(name) => Some(name),
            Err(raw) => {
                log::warn!("skipping non UTF-8 directory {:?}", raw);
                None
            }
        })
        .collect();
    names.sort();
    names
}

pub fn count_notes(category_dir: &Path) -> usize {
    children(category_dir).iter().filter(|e| is_file(e)).count()
}

pub fn list_categories(root: &Path) -> Vec<DisplayCategory> {
    let counted = category_names(root).into_iter().map(|name| {
        let count = count_notes(&root.join(&name));
        (name, count)
    });
    index_categories(counted)
}

pub fn lookup_by_index(root: &Path, index: usize) -> Option<String> {
    let names = category_names(root);
    name_at(&names, index).map(str::to_string)
}

/// Paths of the entry files in a category, in sequence order.
pub fn note_paths(category_dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = children(category_dir)
        .into_iter()
        .filter(is_file)
        .map(|entry| entry.path())
        .collect();
    paths.sort_by_key(|path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (super::sequence::parse_sequence(&name), name)
    });
    paths
}

/// Decodes every entry file in a category. A file that cannot be read is
/// logged and left out.
pub fn list_notes(category_dir: &Path) -> Result<Vec<Note>> {
    let expected = category_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut notes = Vec::new();
    for path in note_paths(category_dir) {
        let note = match read_note(&path) {
            Ok(note) => note,
            Err(e) => {
                log::warn!("skipping unreadable entry {}: {}", path.display(), e);
                continue;
            }
        };
        if note.category.trim_end() != expected {
            log::warn!(
                "{} names distillery {:?}, found in {:?}",
                path.display(),
                note.category,
                expected
            );
        }
        notes.push(note);
    }
    Ok(notes)
}
