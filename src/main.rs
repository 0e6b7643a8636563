use std::env;
use std::process;

mod cli;
mod exits;
mod settings;
mod terminal;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PWGEN_LOG", "warn"))
        .format_timestamp(None)
        .init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    process::exit(cli::run(args));
}
