use crate::error::{LqlError, Result};
use crate::index::DisplayCategory;
use crate::store::NoteStore;

/// Resolves a display index to its distillery.
///
/// Goes through `category_by_index`, which reads the same listing `list`
/// shows, then counts the distillery's notes the way `list` does.
pub fn resolve_category<S: NoteStore>(store: &S, index: usize) -> Result<DisplayCategory> {
    let name = store
        .category_by_index(index)?
        .ok_or(LqlError::CategoryNotFound(index))?;

    let review_count = store.count_notes(&name)?;
    Ok(DisplayCategory {
        index,
        name,
        review_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crate::store::memory::InMemoryStore;

    fn entry(category: &str) -> Entry {
        Entry {
            category: category.into(),
            name: None,
            bottler: "OB".into(),
            age: 12,
            vintage: 2000,
            bottled: 2012,
            rating: 8.0,
        }
    }

    #[test]
    fn resolves_existing_index() {
        let mut store = InMemoryStore::new();
        store.save_entry(&entry("Balvenie")).unwrap();
        store.save_entry(&entry("Ardbeg")).unwrap();

        let found = resolve_category(&store, 2).unwrap();
        assert_eq!(found.name, "Balvenie");
        assert_eq!(found.review_count, 1);
    }

    #[test]
    fn unknown_index_is_an_error() {
        let store = InMemoryStore::new();
        assert!(matches!(
            resolve_category(&store, 1),
            Err(LqlError::CategoryNotFound(1))
        ));
    }
}
