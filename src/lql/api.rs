//! # API Facade
//!
//! Single entry point for every lql operation, whatever the front end. Each
//! method hands off to a command in `commands/` and returns its `CmdResult`;
//! nothing here prints or formats.
//!
//! `LqlApi<S: NoteStore>` is generic over the store: `FileStore` in the
//! binary, `InMemoryStore` in tests.

use crate::commands;
use crate::error::{LqlError, Result};
use crate::index::parse_index;
use crate::model::Entry;
use crate::paths::StoragePaths;
use crate::store::NoteStore;

pub struct LqlApi<S: NoteStore> {
    store: S,
    paths: StoragePaths,
}

impl<S: NoteStore> LqlApi<S> {
    pub fn new(store: S, paths: StoragePaths) -> Self {
        Self { store, paths }
    }

    pub fn create_note(&mut self, entry: Entry) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, entry)
    }

    pub fn list_categories(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_category(&self, index: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, parse_selector(index)?)
    }

    pub fn category_path(&self, index: Option<&str>) -> Result<commands::CmdResult> {
        let index = index.map(parse_selector).transpose()?;
        commands::paths::run(&self.store, index)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }
}

fn parse_selector(input: &str) -> Result<usize> {
    parse_index(input).ok_or_else(|| LqlError::Api(format!("Invalid index format: {}", input)))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> LqlApi<InMemoryStore> {
        LqlApi::new(InMemoryStore::new(), StoragePaths::new("/nonexistent"))
    }

    fn entry(category: &str) -> Entry {
        Entry {
            category: category.into(),
            name: None,
            bottler: "OB".into(),
            age: 8,
            vintage: 2012,
            bottled: 2020,
            rating: 6.5,
        }
    }

    #[test]
    fn create_then_view_by_index() {
        let mut api = api();
        api.create_note(entry("Kilchoman")).unwrap();

        let result = api.view_category("1").unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.category.unwrap().name, "Kilchoman");
    }

    #[test]
    fn rejects_malformed_index() {
        let api = api();
        assert!(matches!(
            api.view_category("first"),
            Err(LqlError::Api(_))
        ));
        assert!(matches!(
            api.category_path(Some("0")),
            Err(LqlError::Api(_))
        ));
    }

    #[test]
    fn path_without_index_is_root() {
        let api = api();
        let result = api.category_path(None).unwrap();
        assert_eq!(result.paths.len(), 1);
    }
}
