use colored::Colorize;
use lql::api::{CmdMessage, MessageLevel};
use lql::display::{note_lines, note_title, review_count_label};
use lql::error::Result;
use lql::index::DisplayCategory;
use lql::model::Note;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

const RULE: &str = "--------------------------------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn render_category_list(categories: &[DisplayCategory]) -> String {
    let index_width = categories
        .iter()
        .map(|c| format!("{}.", c.index).len())
        .max()
        .unwrap_or(0);
    let name_width = categories
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for c in categories {
        let idx = format!("{:>width$}", format!("{}.", c.index), width = index_width);
        let padding = " ".repeat(name_width.saturating_sub(c.name.width()));
        out.push_str(&format!(
            "  {} {}{}  {}\n",
            idx.yellow(),
            c.name.bold(),
            padding,
            review_count_label(c.review_count).dimmed()
        ));
    }
    out
}

pub(super) fn render_notes(category: &DisplayCategory, notes: &[Note], max_rating: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} ({})\n",
        format!("{}.", category.index).yellow(),
        category.name.bold(),
        review_count_label(notes.len())
    ));
    out.push_str(RULE);
    out.push('\n');

    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            format!("#{}", note.sequence).dimmed(),
            note_title(note).bold()
        ));
        for line in note_lines(note, max_rating) {
            out.push_str(&format!("   {}\n", line));
        }
    }
    out
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message.dimmed());
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub(super) fn categories_json(categories: &[DisplayCategory]) -> Result<String> {
    Ok(serde_json::to_string_pretty(categories)?)
}

pub(super) fn notes_json(category: &DisplayCategory, notes: &[Note]) -> Result<String> {
    let value = json!({
        "category": category,
        "notes": notes,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
