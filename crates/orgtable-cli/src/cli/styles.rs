//! Styles for the orgtable CLI.
//!
//! Renderers refer to styles by role (header, muted, warning), never by color, so the
//! palette can change in one place. `console` drops the escape codes on its own when
//! stdout is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static SORTED_HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().cyan());
pub static RULE: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static MISSING: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
