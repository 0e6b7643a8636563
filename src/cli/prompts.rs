//! Centralized prompts and messages for CLI output.

use std::io::{self, BufRead, Write};
use std::path::Path;

use pwgen::pass::{self, LengthSpec};

use super::quiet;
use crate::terminal::{print_error, print_warning};

const LENGTH_PROMPT: &str = "How many characters do you want in your password (max 52)? ";

/// Ask for a length until a valid one is entered.
/// Returns `Ok(None)` if input ends first.
pub fn read_length<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<LengthSpec>> {
    let mut line = String::new();
    loop {
        write!(out, "{LENGTH_PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        match line.parse::<LengthSpec>() {
            Ok(length) => return Ok(Some(length)),
            Err(e) => {
                log::debug!("rejected length input: {e}");
                if matches!(e, pass::Error::NotANumber(_)) {
                    writeln!(out, "Please, Enter numbers only.")?;
                }
                writeln!(
                    out,
                    "Your number should be at least {} and no more than {}.",
                    LengthSpec::MIN,
                    LengthSpec::MAX
                )?;
            }
        }
    }
}

/// Print a warning to stderr - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        print_warning(msg);
    }
}

/// Print an error to stderr - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    print_error(msg);
}

pub fn usage_hint() {
    eprintln!("Try 'pwgen --help' for more information.");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() -> io::Result<()> {
    if quiet::enabled() {
        return Ok(());
    }
    writeln!(io::stdout().lock(), "*** -COPIED TO CLIPBOARD- ***")
}

/// Ask whether to print when the clipboard is unavailable.
/// Returns true to fall back to the terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = io::stderr().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(_) => confirm_default_yes(&input),
        Err(_) => true,
    }
}

fn confirm_default_yes(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input.is_empty() || input == "y" || input == "yes"
}

/// Suppressed in quiet mode
pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Defaults saved to {}", path.display());
    }
}

/// Suppressed in quiet mode
pub fn settings_removed(removed: bool) -> io::Result<()> {
    if quiet::enabled() {
        return Ok(());
    }
    write_settings_removed(&mut io::stdout().lock(), removed)
}

fn write_settings_removed<W: Write>(out: &mut W, removed: bool) -> io::Result<()> {
    if removed {
        writeln!(out, "Saved defaults cleared.")
    } else {
        writeln!(out, "(no saved defaults)")
    }
}

pub fn version() -> io::Result<()> {
    write_version(&mut io::stdout().lock())
}

fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "pwgen {}", env!("CARGO_PKG_VERSION"))
}
