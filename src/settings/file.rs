//! Settings file persistence.
//!
//! One line: `length,quiet,clipboard`, with an empty length when unset.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pwgen::pass::LengthSpec;

use super::Settings;

const FIELDS: usize = 3;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    log::debug!("saving settings to {}", path.display());
    fs::write(path, encode(settings))
}

pub fn load(path: &Path) -> io::Result<Settings> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no settings at {}", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e),
    };
    log::debug!("loaded settings from {}", path.display());
    Ok(decode(data.lines().next().unwrap_or("")))
}

pub fn remove(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn encode(settings: &Settings) -> String {
    let length = settings
        .length
        .map(|l| l.to_string())
        .unwrap_or_default();
    format!("{},{},{}\n", length, settings.quiet, settings.clipboard)
}

fn decode(line: &str) -> Settings {
    let mut settings = Settings::default();
    let line = line.trim();
    if line.is_empty() {
        return settings;
    }

    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        log::warn!("ignoring malformed settings line: expected {FIELDS} fields, got {}", parts.len());
        return settings;
    }

    if !parts[0].is_empty() {
        match parts[0].parse::<LengthSpec>() {
            Ok(length) => settings.length = Some(length),
            Err(e) => log::warn!("ignoring saved length: {e}"),
        }
    }
    settings.quiet = parts[1].parse().unwrap_or(settings.quiet);
    settings.clipboard = parts[2].parse().unwrap_or(settings.clipboard);
    settings
}

/// `$PWGEN_CONFIG`, else `$HOME/.config/pwgen/settings`.
#[inline]
pub fn get_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("PWGEN_CONFIG").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let home = env::var_os("HOME").filter(|h| !h.is_empty())?;
    Some(Path::new(&home).join(".config/pwgen/settings"))
}
