use crate::commands::{helpers::resolve_category, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

/// The store root, or the directory of the distillery at `index`.
pub fn run<S: NoteStore>(store: &S, index: Option<usize>) -> Result<CmdResult> {
    let path = match index {
        Some(index) => {
            let category = resolve_category(store, index)?;
            store.category_path(&category.name)
        }
        None => store.root_path(),
    };
    Ok(CmdResult::default().with_paths(vec![path]))
}
