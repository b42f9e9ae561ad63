use crate::commands::{CmdMessage, CmdResult};
use crate::config::LqlConfig;
use crate::error::Result;
use crate::paths::StoragePaths;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StoragePaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.root_path();
    let mut config = LqlConfig::load(&dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}
