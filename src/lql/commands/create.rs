use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &mut S, entry: Entry) -> Result<CmdResult> {
    let note = store.save_entry(&entry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved tasting note #{} for {}",
        note.sequence, note.category
    )));
    Ok(result.with_affected_notes(vec![note]))
}
