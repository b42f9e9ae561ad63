use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S) -> Result<CmdResult> {
    let categories = store.list_categories()?;

    let mut result = CmdResult::default();
    if categories.is_empty() {
        result.add_message(CmdMessage::info("No tasting notes found."));
    }
    Ok(result.with_listed_categories(categories))
}
