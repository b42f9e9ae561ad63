//! # Storage Layer
//!
//! Tasting notes live in plain files:
//!
//! ```text
//! ~/.lql/
//! ├── config.json     # optional settings
//! ├── Ardbeg/         # one directory per distillery (mode 0700)
//! │   ├── 0           # one file per note, named by sequence number
//! │   └── 1
//! └── Balvenie/
//!     └── 0
//! ```
//!
//! The store is append-only: notes are written once and never updated or
//! removed.
//!
//! ## Pieces
//!
//! - [`sequence`]: picks the next free file number in a distillery
//! - [`codec`]: the line-per-field file format
//! - [`lister`]: enumerates distilleries and their notes
//! - [`fs::FileStore`]: ties the above together over [`crate::paths::StoragePaths`]
//! - [`memory::InMemoryStore`]: same contract without touching disk, for tests
//!
//! Commands are written against the [`NoteStore`] trait so they can be
//! exercised with either implementation.

use crate::error::Result;
use crate::index::DisplayCategory;
use crate::model::{Entry, Note};
use std::path::PathBuf;

pub mod codec;
pub mod fs;
pub mod lister;
pub mod memory;
pub mod sequence;

pub trait NoteStore {
    /// Appends a note to its distillery, creating the distillery if needed.
    /// Returns the note as stored, with its sequence number.
    fn save_entry(&mut self, entry: &Entry) -> Result<Note>;

    /// Every distillery, sorted by name, with 1-based display indexes.
    fn list_categories(&self) -> Result<Vec<DisplayCategory>>;

    /// Every readable note in a distillery. An unknown distillery has no
    /// notes.
    fn list_notes(&self, category: &str) -> Result<Vec<Note>>;

    /// How many notes a distillery holds, without decoding them. Counts
    /// files that `list_notes` would skip as unreadable.
    fn count_notes(&self, category: &str) -> Result<usize>;

    /// Where a distillery's notes live (or would live).
    fn category_path(&self, category: &str) -> PathBuf;

    /// Where the whole store lives.
    fn root_path(&self) -> PathBuf;

    /// Resolves a display index using the same listing as
    /// [`NoteStore::list_categories`].
    fn category_by_index(&self, index: usize) -> Result<Option<String>> {
        Ok(self
            .list_categories()?
            .into_iter()
            .find(|c| c.index == index)
            .map(|c| c.name))
    }
}
