use console::Style;
use once_cell::sync::Lazy;

pub static PROMPT_STYLE: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static ERROR_STYLE: Lazy<Style> = Lazy::new(|| Style::new().red());
