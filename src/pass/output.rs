//! Password output.

use std::io::{self, Write};

/// How a generated password is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Labelled password plus a length line.
    Verbose,
    /// The password alone.
    Quiet,
}

pub fn write<W: Write>(out: &mut W, password: &str, style: Style) -> io::Result<()> {
    match style {
        Style::Verbose => {
            writeln!(out, "Strong Password:  {password}")?;
            writeln!(out, "len is {}", password.chars().count())?;
        }
        Style::Quiet => writeln!(out, "{password}")?,
    }
    out.flush()
}

/// Print to stdout.
pub fn print(password: &str, style: Style) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(&mut out, password, style)
}
