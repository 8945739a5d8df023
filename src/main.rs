// src/main.rs
use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use plist_version::{cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    if let Err(e) = logging::init(&config.log_filter) {
        eprintln!("Error: {e:?}");
        return ExitCode::FAILURE;
    }

    match plist_version::run(&config) {
        Ok(value) => {
            let mut out = io::stdout().lock();
            match out.write_all(value.as_bytes()).and_then(|()| out.flush()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: failed to write result: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
