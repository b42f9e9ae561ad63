use serde::{Deserialize, Serialize};

/// A tasting note as collected from the user, ready to be written.
///
/// Every field except the display name is required; the store never fills
/// in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Distillery name, used verbatim as the category directory name.
    pub category: String,
    /// A blank name is stored as absent; see [`Entry::display_name`].
    pub name: Option<String>,
    pub bottler: String,
    pub age: u32,
    pub vintage: i32,
    pub bottled: i32,
    pub rating: f64,
}

/// A tasting note as read back from disk.
///
/// Fields are optional because files written by older versions only carry
/// the category, age and rating lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub sequence: u64,
    pub category: String,
    pub age: Option<u32>,
    pub rating: Option<f64>,
    pub vintage: Option<i32>,
    pub bottled: Option<i32>,
    pub bottler: Option<String>,
    pub name: Option<String>,
}

impl Entry {
    /// The display name, or `None` when it is missing or only whitespace.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

impl Note {
    pub fn from_entry(sequence: u64, entry: &Entry) -> Self {
        Self {
            sequence,
            category: entry.category.clone(),
            age: Some(entry.age),
            rating: Some(entry.rating),
            vintage: Some(entry.vintage),
            bottled: Some(entry.bottled),
            bottler: Some(entry.bottler.clone()),
            name: entry.display_name().map(str::to_string),
        }
    }
}
