//! Presentation rules shared by every front end.
//!
//! Storage keeps ratings at full precision; how many digits a reader sees
//! depends on the configured scale. A 10-point scale shows one fraction digit
//! (`8.5`), anything larger shows whole numbers (`85`).

use crate::model::Note;

pub fn rating_precision(max_rating: f64) -> usize {
    if max_rating > 10.0 {
        0
    } else {
        1
    }
}

pub fn format_rating(rating: f64, max_rating: f64) -> String {
    format!("rated {:.*}", rating_precision(max_rating), rating)
}

pub fn format_age(age: u32) -> String {
    format!("{} Y.O.", age)
}

pub fn format_bottler(bottler: &str) -> String {
    format!("bottled by {}", bottler)
}

/// The detail lines shown for one note. Fields the file does not carry are
/// left out.
pub fn note_lines(note: &Note, max_rating: f64) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(age) = note.age {
        lines.push(format_age(age));
    }
    if let Some(rating) = note.rating {
        lines.push(format_rating(rating, max_rating));
    }
    match (note.vintage, note.bottled) {
        (Some(v), Some(b)) => lines.push(format!("distilled {}, bottled {}", v, b)),
        (Some(v), None) => lines.push(format!("distilled {}", v)),
        (None, Some(b)) => lines.push(format!("bottled {}", b)),
        (None, None) => {}
    }
    if let Some(bottler) = note.bottler.as_deref().filter(|b| !b.is_empty()) {
        lines.push(format_bottler(bottler));
    }
    lines
}

/// Heading for a note: its display name when it has one, otherwise the
/// distillery.
pub fn note_title(note: &Note) -> &str {
    note.name.as_deref().unwrap_or(&note.category)
}

pub fn review_count_label(count: usize) -> String {
    if count == 1 {
        "1 review".to_string()
    } else {
        format!("{} reviews", count)
    }
}
