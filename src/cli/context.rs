//! CLI context - bundles flags and saved defaults.

use std::io;

use copypasta::{ClipboardContext, ClipboardProvider};
use rand::rngs::OsRng;
use thiserror::Error;

use super::{CliFlags, ParseError, help, prompts, quiet};
use crate::exits;
use crate::settings::{self, Settings};
use pwgen::pass::{self, LengthSpec, output::Style};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Length(#[from] pass::Error),

    #[error("No length entered")]
    NoInput,

    #[error(transparent)]
    Settings(#[from] settings::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) | CliError::Length(_) => exits::USAGE,
            _ => exits::FAILURE,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.exit_code() == exits::USAGE
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    pub saved: Settings,
}

impl Context {
    /// Parse command-line arguments and load saved defaults.
    pub fn new(args: &[String]) -> Result<Self, CliError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let saved = match Settings::load_from_file() {
            Ok(saved) => saved,
            Err(settings::Error::NoLocation) => {
                log::debug!("no settings location, using defaults");
                Settings::default()
            }
            Err(e) => {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            }
        };
        log::debug!("flags {flags:?}, saved {saved:?}");

        Ok(Self { flags, saved })
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.handle_info_flags()? {
            return Ok(());
        }
        if self.flags.reset {
            let removed = Settings::remove_file()?;
            prompts::settings_removed(removed)?;
            return Ok(());
        }

        quiet::set(self.quiet());
        let length = self.resolve_length()?;
        if self.flags.save {
            self.save_defaults(length)?;
        }

        let password = pass::generate_spec(length, &mut OsRng);
        self.emit(&password)
    }

    fn handle_info_flags(&self) -> io::Result<bool> {
        if self.flags.help {
            help::print_help()?;
            return Ok(true);
        }
        if self.flags.version {
            prompts::version()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn quiet(&self) -> bool {
        self.flags.quiet || self.saved.quiet
    }

    fn clipboard(&self) -> bool {
        self.flags.clipboard || self.saved.clipboard
    }

    /// Flag, then saved default, then the interactive prompt.
    fn resolve_length(&self) -> Result<LengthSpec, CliError> {
        if let Some(length) = self.flags.length {
            return Ok(LengthSpec::new(length)?);
        }
        if let Some(length) = self.saved.length {
            log::debug!("using saved length {length}");
            return Ok(length);
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let length = if self.quiet() {
            prompts::read_length(&mut input, &mut io::stderr().lock())?
        } else {
            prompts::read_length(&mut input, &mut io::stdout().lock())?
        };
        length.ok_or(CliError::NoInput)
    }

    fn save_defaults(&mut self, length: LengthSpec) -> Result<(), CliError> {
        self.saved = Settings {
            length: Some(length),
            quiet: self.flags.quiet,
            clipboard: self.flags.clipboard,
        };
        let path = self.saved.save_to_file()?;
        prompts::settings_saved(&path);
        Ok(())
    }

    fn style(&self) -> Style {
        if self.quiet() {
            Style::Quiet
        } else {
            Style::Verbose
        }
    }

    fn emit(&self, password: &str) -> Result<(), CliError> {
        if self.clipboard() {
            match ClipboardContext::new() {
                Ok(mut ctx) => {
                    copy_to(&mut ctx, password)?;
                    prompts::clipboard_copied()?;
                    return Ok(());
                }
                Err(e) => {
                    log::info!("clipboard unavailable: {e}");
                    if !prompts::clipboard_fallback_prompt() {
                        eprintln!("Aborted.");
                        return Ok(());
                    }
                }
            }
        }

        pass::output::print(password, self.style())?;
        Ok(())
    }
}

/// Set the clipboard and read it back; success only if it holds `password`.
fn copy_to<C: ClipboardProvider>(ctx: &mut C, password: &str) -> Result<(), CliError> {
    ctx.set_contents(password.to_owned())
        .map_err(|e| CliError::Clipboard(e.to_string()))?;
    let stored = ctx
        .get_contents()
        .map_err(|e| CliError::Clipboard(e.to_string()))?;
    if stored != password {
        return Err(CliError::Clipboard("contents did not match after copy".to_string()));
    }
    Ok(())
}
