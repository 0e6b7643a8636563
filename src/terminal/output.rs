//! Terminal output utilities.
//!
//! Box drawing for the help screen, styled warning/error lines.

use std::io::{self, Write};

use crossterm::style::Stylize;

/// Print a warning line to stderr in yellow.
pub fn print_warning(msg: &str) {
    eprintln!("{}", msg.yellow());
}

/// Print an error line to stderr in red.
pub fn print_error(msg: &str) {
    eprintln!("{}", msg.red());
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Write box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Write box content line: │ content                                        │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    writeln!(out, "{}", pad_line(content, false))
}

/// Write centered box content line: │          content          │
pub fn box_line_center<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    writeln!(out, "{}", pad_line(content, true))
}

/// Write box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Write a help option with flag and description, wrapping the description.
pub fn box_opt<W: Write>(out: &mut W, flag: &str, desc: &str) -> io::Result<()> {
    for line in opt_lines(flag, desc) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn pad_line(content: &str, center: bool) -> String {
    let inner_width = BOX_WIDTH - 4;
    let len = content.chars().count();
    if len > inner_width {
        return format!("│ {} │", content);
    }

    let padding = inner_width - len;
    let left = if center { padding / 2 } else { 0 };
    format!(
        "│ {}{}{} │",
        " ".repeat(left),
        content,
        " ".repeat(padding - left)
    )
}

const FLAG_COL: usize = 24;

fn opt_lines(flag: &str, desc: &str) -> Vec<String> {
    let desc_col = BOX_WIDTH - 4 - FLAG_COL;

    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }

    wrapped
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { flag } else { "" };
            format!(
                "│ {:<flag_w$}{:<desc_w$} │",
                lead,
                text,
                flag_w = FLAG_COL,
                desc_w = desc_col
            )
        })
        .collect()
}
