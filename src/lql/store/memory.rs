use super::{codec, NoteStore};
use crate::error::Result;
use crate::index::{index_categories, DisplayCategory};
use crate::model::{Entry, Note};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Keeps notes in memory, keyed by distillery. BTreeMap keeps the names in
/// the same order the file store lists directories.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    categories: BTreeMap<String, Vec<Note>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for InMemoryStore {
    fn save_entry(&mut self, entry: &Entry) -> Result<Note> {
        codec::validate(entry)?;
        let notes = self.categories.entry(entry.category.clone()).or_default();
        let seq = notes
            .iter()
            .map(|n| n.sequence)
            .max()
            .map_or(0, |max| max + 1);
        let note = Note::from_entry(seq, entry);
        notes.push(note.clone());
        Ok(note)
    }

    fn list_categories(&self) -> Result<Vec<DisplayCategory>> {
        Ok(index_categories(
            self.categories
                .iter()
                .map(|(name, notes)| (name.clone(), notes.len())),
        ))
    }

    fn list_notes(&self, category: &str) -> Result<Vec<Note>> {
        Ok(self.categories.get(category).cloned().unwrap_or_default())
    }

    fn count_notes(&self, category: &str) -> Result<usize> {
        Ok(self.categories.get(category).map_or(0, Vec::len))
    }

    fn category_path(&self, category: &str) -> PathBuf {
        self.root_path().join(category)
    }

    fn root_path(&self) -> PathBuf {
        PathBuf::from("memory")
    }
}
