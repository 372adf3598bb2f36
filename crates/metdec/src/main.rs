use std::fs::File;
use std::io::{self, Read};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

mod app;
mod cli;

use cli::{Args, CliError};

fn main() {
    match metdec() {
        Ok(()) => {}
        Err(cli_error) => cli_error.exit(),
    }
}

fn metdec() -> Result<(), CliError> {
    // Parse options and start logging
    let args = Args::try_parse()?;
    log_setup(&args);

    let input = read_input(&args)?;
    app::run(&args, &input)
}

fn read_input(args: &Args) -> Result<String, CliError> {
    let mut input = String::new();

    let result = if args.input_is_stdin() {
        io::stdin()
            .lock()
            .read_to_string(&mut input)
            .context("unable to read standard input")
    } else {
        File::open(&args.file)
            .and_then(|mut file| file.read_to_string(&mut input))
            .with_context(|| format!("unable to read \"{}\"", args.file))
    };

    match result {
        Ok(_) => Ok(input),
        // EX_NOINPUT
        Err(err) => Err(CliError::new(err, 66)),
    }
}

fn log_setup(args: &Args) {
    if args.quiet {
        // no logging
        return;
    } else if std::env::var_os("RUST_LOG").is_none() {
        // parameter controls
        let log_filter = match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        pretty_env_logger::formatted_builder()
            .filter_module("metwx", log_filter)
            .filter_module("metdec", log_filter)
            .init();
    } else {
        // environment controls
        pretty_env_logger::init();
    }
}
