use std::io::{self, Write};

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_help(&mut out)
}

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    box_top(out, "pwgen")?;
    box_line_center(out, "Strong password generator")?;
    box_line(out, "")?;
    box_line(out, "Passwords are 12 to 52 characters long. The first three are a digit,")?;
    box_line(out, "a symbol and a letter; the rest is 60% letters and 40% digits and")?;
    box_line(out, "symbols, shuffled.")?;
    box_line(out, "")?;
    box_line(out, "USAGE:")?;
    box_line(out, "  pwgen [OPTIONS]")?;
    box_line(out, "")?;
    box_line(out, "OPTIONS:")?;
    box_opt(out, "  -l, --length <N>", "Password length, 12-52. Prompted for when omitted and no default is saved.")?;
    box_opt(out, "  -q, --quiet", "Print only the password")?;
    box_opt(out, "  -b, --board", "Copy to clipboard instead of printing")?;
    box_line(out, "")?;
    box_line(out, " Defaults:")?;
    box_opt(out, "  -s, --save", "Save -l/-q/-b from this run as defaults")?;
    box_opt(out, "      --reset", "Clear saved defaults")?;
    box_line(out, "")?;
    box_line(out, " Info:")?;
    box_opt(out, "  -h, --help", "Display this help message")?;
    box_opt(out, "  -v, --version", "Display version")?;
    box_line(out, "")?;
    box_line(out, "ENVIRONMENT:")?;
    box_opt(out, "  PWGEN_CONFIG", "Settings file (default: ~/.config/pwgen/settings)")?;
    box_opt(out, "  PWGEN_LOG", "Log filter, e.g. debug (default: warn)")?;
    box_line(out, "")?;
    box_line(out, "EXAMPLES:")?;
    box_line(out, "  pwgen                  Prompt for a length")?;
    box_line(out, "  pwgen -l 16            One 16-character password")?;
    box_line(out, "  pwgen -l 20 -q         Password only, for scripts")?;
    box_line(out, "  pwgen -l 24 -b -s      Copy to clipboard and keep as default")?;
    box_line(out, "")?;
    box_bottom(out)?;
    out.flush()
}
