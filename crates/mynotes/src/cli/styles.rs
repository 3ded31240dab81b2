//! Named console styles for mynotes output.
//!
//! Output code never builds a `Style` inline; it refers to one of these by
//! what the text *is* (an index, a title, a warning). `console` drops the
//! escape codes by itself when stdout is not a terminal, so piped output and
//! tests see plain text.

use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ACTIVE: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static PREVIEW: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static RULE: Lazy<Style> = Lazy::new(|| Style::new().dim());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());

pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().cyan());
