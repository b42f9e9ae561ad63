use crate::commands::{helpers::resolve_category, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S, index: usize) -> Result<CmdResult> {
    let category = resolve_category(store, index)?;
    let notes = store.list_notes(&category.name)?;

    let mut result = CmdResult::default();
    let skipped = category.review_count.saturating_sub(notes.len());
    if skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} file(s) in {} could not be read.",
            skipped, category.name
        )));
    }
    if notes.is_empty() && skipped == 0 {
        result.add_message(CmdMessage::info(format!(
            "No tasting notes for {} yet.",
            category.name
        )));
    }
    Ok(result.with_listed_notes(category, notes))
}
