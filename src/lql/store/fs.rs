use super::{codec, lister, sequence, NoteStore};
use crate::error::Result;
use crate::index::DisplayCategory;
use crate::model::{Entry, Note};
use crate::paths::StoragePaths;
use std::path::PathBuf;

pub struct FileStore {
    paths: StoragePaths,
}

impl FileStore {
    pub fn new(paths: StoragePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }
}

impl NoteStore for FileStore {
    fn save_entry(&mut self, entry: &Entry) -> Result<Note> {
        codec::validate(entry)?;
        let dir = self.paths.ensure_category(&entry.category)?;
        let seq = sequence::next_sequence(&dir);
        codec::write_entry(&dir, seq, entry)?;
        Ok(Note::from_entry(seq, entry))
    }

    fn list_categories(&self) -> Result<Vec<DisplayCategory>> {
        Ok(lister::list_categories(&self.paths.root_path()))
    }

    fn list_notes(&self, category: &str) -> Result<Vec<Note>> {
        lister::list_notes(&self.paths.category_path(category))
    }

    fn count_notes(&self, category: &str) -> Result<usize> {
        Ok(lister::count_notes(&self.paths.category_path(category)))
    }

    fn category_path(&self, category: &str) -> PathBuf {
        self.paths.category_path(category)
    }

    fn root_path(&self) -> PathBuf {
        self.paths.root_path()
    }

    fn category_by_index(&self, index: usize) -> Result<Option<String>> {
        Ok(lister::lookup_by_index(&self.paths.root_path(), index))
    }
}
