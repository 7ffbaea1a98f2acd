// src/main.rs

use std::io::{self};
use std::process;

use crossterm::tty::IsTty;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use md_convert::{run, ConvertError, Options};

const USAGE: &str = "usage: cat input.csv | md-convert";

fn main() {
    // Library code logs below warn, so a successful run leaves stderr empty.
    // The logger is optional: if it cannot be installed, convert without it.
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );

    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        if matches!(err, ConvertError::NoInput) {
            eprintln!("{USAGE}");
        }
        process::exit(err.exit_code());
    }
}

fn try_main() -> Result<(), ConvertError> {
    let stdin = io::stdin();
    if stdin.is_tty() {
        return Err(ConvertError::NoInput);
    }
    run(stdin.lock(), io::stdout().lock(), &Options::default())
}
