mod cli;
mod commands;
mod config;
mod error;
mod handler;
mod logging;
mod request;
mod sink;

use clap::Parser;
use cli::Cli;
use config::Mode;
use request::Request;
use sink::TracingSink;
use std::process;

fn main() {
    let mode = Mode::from_env();

    // Argument errors surface before any logging or execution.
    let cli = match mode {
        Mode::Local => Some(parse_args_or_exit()),
        Mode::Lambda => None,
    };

    let settings = config::load_settings().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });
    logging::init(&settings, mode);

    let result = match cli {
        Some(cli) => commands::message_post::execute(&TracingSink, &Request::new(cli.message)),
        None => handler::serve(),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn parse_args_or_exit() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        // --help and --version are not failures.
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    })
}
