mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::exits;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());

    match result {
        Ok(()) => exits::SUCCESS,
        Err(e) => {
            log::debug!("exiting on error: {e:?}");
            prompts::error(&e.to_string());
            if e.is_usage() {
                prompts::usage_hint();
            }
            e.exit_code()
        }
    }
}
