use crate::config::LqlConfig;
use crate::index::DisplayCategory;
use crate::model::Note;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod helpers;
pub mod init;
pub mod list;
pub mod paths;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_categories: Vec<DisplayCategory>,
    pub listed_notes: Vec<Note>,
    /// The distillery `listed_notes` belong to.
    pub category: Option<DisplayCategory>,
    pub paths: Vec<PathBuf>,
    pub config: Option<LqlConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_categories(mut self, categories: Vec<DisplayCategory>) -> Self {
        self.listed_categories = categories;
        self
    }

    pub fn with_listed_notes(mut self, category: DisplayCategory, notes: Vec<Note>) -> Self {
        self.category = Some(category);
        self.listed_notes = notes;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: LqlConfig) -> Self {
        self.config = Some(config);
        self
    }
}
