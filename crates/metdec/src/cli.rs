use std::fmt::Display;

use clap::{error::ErrorKind, value_parser, CommandFactory, Parser};

/// Standard input filename
const STDIN_FILE: &str = "-";

const USAGE_SHORT: &str = r#"
This program reads raw METAR and TAF bulletins as plain text and prints each one as a human-readable briefing. Reports are separated by blank lines; a report whose first token is "TAF" is decoded as a forecast.

See --help for more details.
"#;

const USAGE_LONG: &str = r#"
This program reads raw METAR and TAF bulletins as plain text and prints each one as a human-readable briefing.

Input is read from --file, or from standard input by default. Reports are separated by blank lines. A report may span several lines, the way TAF change groups are usually laid out. A report whose first token is "TAF" is decoded as a forecast; anything else is decoded as a surface observation.

    curl -s "$WX_SERVICE/metar?ids=WIII&taf=true" | metdec

The encoded grammar never carries a month or year. The --year and --month options supply that calendar context; they default to the current UTC month, which is correct for live reports but not for archived ones.

Reports that fail to decode are reported on standard error and skipped. The exit status is nonzero if no report could be decoded.
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print only the briefings, without the raw report text
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file (or "-" for stdin)
    #[arg(long, default_value_t = STDIN_FILE.to_string())]
    pub file: String,

    /// Calendar year the reports were issued in
    ///
    /// Defaults to the current UTC year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Calendar month (1-12) the reports were issued in
    ///
    /// Defaults to the current UTC month.
    #[arg(long)]
    #[arg(value_parser = value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

impl Args {
    /// Return true if the user requests input from stdin
    pub fn input_is_stdin(&self) -> bool {
        self.file == STDIN_FILE
    }
}

/// A program-level error with exit code
#[derive(Debug)]
pub struct CliError {
    error: anyhow::Error,
    exit_code: i32,
}

impl CliError {
    /// Create new error with a custom exit code
    pub fn new(error: anyhow::Error, code: i32) -> CliError {
        CliError {
            error,
            exit_code: code,
        }
    }

    /// Print this error to the terminal
    ///
    /// Errors from clap are printed verbatim. Other types of errors
    /// are printed indirectly via clap's fancy formatter.
    pub fn print(&self) -> std::io::Result<()> {
        if let Some(e) = self.error.downcast_ref::<clap::Error>() {
            e.print()
        } else {
            Args::command()
                .error(ErrorKind::Format, self.to_string())
                .print()
        }
    }

    /// Print this error to the terminal and exit
    pub fn exit(&self) -> ! {
        drop(self.print());
        std::process::exit(self.exit_code);
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.error)
    }
}

impl std::error::Error for CliError {}

impl From<clap::Error> for CliError {
    fn from(error: clap::Error) -> Self {
        let code = if error.use_stderr() { 2 } else { 0 };
        CliError::new(error.into(), code)
    }
}
