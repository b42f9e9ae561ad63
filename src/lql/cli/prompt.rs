//! Interactive collection of a tasting note.
//!
//! Flags win; anything missing is asked for on the terminal. Input is checked
//! here, before the store sees it: text fields are bounded by
//! [`MAX_TEXT_LEN`] and must fit on one line. Rejected answers are asked again.

use super::setup::NewArgs;
use super::styles::{ERROR_STYLE, PROMPT_STYLE};
use console::Term;
use lql::error::{LqlError, Result};
use lql::model::Entry;
use std::str::FromStr;

pub const MAX_TEXT_LEN: usize = 127;

pub fn check_text(input: &str) -> std::result::Result<String, String> {
    let trimmed = input.trim();
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(format!("at most {} characters", MAX_TEXT_LEN));
    }
    if trimmed.contains(['\n', '\r']) {
        return Err("must be a single line".to_string());
    }
    Ok(trimmed.to_string())
}

pub fn check_required_text(input: &str) -> std::result::Result<String, String> {
    let text = check_text(input)?;
    if text.is_empty() {
        return Err("cannot be empty".to_string());
    }
    Ok(text)
}

pub fn check_number<T: FromStr>(input: &str) -> std::result::Result<T, String> {
    input
        .trim()
        .parse()
        .map_err(|_| format!("{:?} is not a number", input.trim()))
}

pub fn check_rating(rating: f64, max_rating: f64) -> std::result::Result<f64, String> {
    if !rating.is_finite() || rating < 0.0 || rating > max_rating {
        return Err(format!("rating must be between 0 and {}", max_rating));
    }
    Ok(rating)
}

/// Builds an entry from flags, prompting for whatever is missing.
///
/// Without a terminal nothing can be asked, so missing required fields are an
/// error.
pub fn collect_entry(args: NewArgs, max_rating: f64) -> Result<Entry> {
    let term = Term::stderr();
    let mut prompter = Prompter {
        term: &term,
        interactive: term.is_term(),
        missing: Vec::new(),
    };

    let category = match args.distillery {
        Some(d) => check_required_text(&d).map_err(|e| invalid("distillery", e))?,
        None => prompter.ask("Distillery", check_required_text)?,
    };
    let age = match args.age {
        Some(a) => a,
        None => prompter.ask("Age", check_number::<u32>)?,
    };
    let name = match args.name {
        Some(n) => Some(check_text(&n).map_err(|e| invalid("name", e))?),
        None if prompter.interactive => Some(prompter.ask("Name (optional)", check_text)?),
        None => None,
    }
    .filter(|n| !n.is_empty());
    let rating = match args.rating {
        Some(r) => check_rating(r, max_rating).map_err(|e| invalid("rating", e))?,
        None => prompter.ask("Rating", |s| {
            check_number::<f64>(s).and_then(|r| check_rating(r, max_rating))
        })?,
    };
    let vintage = match args.vintage {
        Some(v) => v,
        None => prompter.ask("Vintage", check_number::<i32>)?,
    };
    let bottled = match args.bottled {
        Some(b) => b,
        None => prompter.ask("Bottled", check_number::<i32>)?,
    };
    let bottler = match args.bottler {
        Some(b) => check_required_text(&b).map_err(|e| invalid("bottler", e))?,
        None => prompter.ask("Bottler", check_required_text)?,
    };

    if !prompter.missing.is_empty() {
        return Err(LqlError::Api(format!(
            "Missing {} (no terminal to prompt on)",
            prompter.missing.join(", ")
        )));
    }

    Ok(Entry {
        category,
        name,
        bottler,
        age,
        vintage,
        bottled,
        rating,
    })
}

fn invalid(field: &str, reason: String) -> LqlError {
    LqlError::Api(format!("Invalid {}: {}", field, reason))
}

struct Prompter<'a> {
    term: &'a Term,
    interactive: bool,
    missing: Vec<String>,
}

impl Prompter<'_> {
    /// Asks until `check` accepts the answer. When not interactive, records
    /// the field as missing and returns a placeholder that is never used.
    fn ask<T: Default, F>(&mut self, label: &str, check: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, String>,
    {
        if !self.interactive {
            self.missing.push(label.to_lowercase());
            return Ok(T::default());
        }

        loop {
            self.term
                .write_str(&format!("{}: ", PROMPT_STYLE.apply_to(label)))?;
            let answer = self.term.read_line()?;
            match check(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    self.term
                        .write_line(&ERROR_STYLE.apply_to(reason).to_string())?;
                }
            }
        }
    }
}
