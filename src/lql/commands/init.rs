use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::paths::StoragePaths;

pub fn run(paths: &StoragePaths) -> Result<CmdResult> {
    let root = paths.ensure_root()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized lql store at {}",
        root.display()
    )));
    Ok(result)
}
