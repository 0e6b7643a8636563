//! Saved defaults for the CLI.

mod file;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use pwgen::pass::LengthSpec;

#[derive(Debug, Error)]
pub enum Error {
    #[error("settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no settings location: set PWGEN_CONFIG or HOME")]
    NoLocation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub length: Option<LengthSpec>,
    pub quiet: bool,
    pub clipboard: bool,
}

impl Settings {
    /// Load saved defaults. A missing file yields `Settings::default()`.
    pub fn load_from_file() -> Result<Self, Error> {
        let path = file::get_path().ok_or(Error::NoLocation)?;
        file::load(&path).map_err(|source| Error::Io { path, source })
    }

    pub fn save_to_file(&self) -> Result<PathBuf, Error> {
        let path = file::get_path().ok_or(Error::NoLocation)?;
        match file::save(&path, self) {
            Ok(()) => Ok(path),
            Err(source) => Err(Error::Io { path, source }),
        }
    }

    /// Delete saved defaults. Returns whether a file was removed.
    pub fn remove_file() -> Result<bool, Error> {
        let path = file::get_path().ok_or(Error::NoLocation)?;
        file::remove(&path).map_err(|source| Error::Io { path, source })
    }
}
