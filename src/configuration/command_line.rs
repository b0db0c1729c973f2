use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::time::timeunit::parse_duration;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug, Clone, Copy)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME, about = "Submits NUnit test events to Tesults")]
pub struct Opt {
    /// Event stream with one XML fragment per line, or `-` for stdin
    #[structopt(parse(from_os_str))]
    pub input: PathBuf,

    /// Treat the input as a complete NUnit result document and replay its events
    #[structopt(long)]
    pub replay: bool,

    /// Print the aggregate as JSON instead of uploading it
    #[structopt(long)]
    pub dry_run: bool,

    /// Results endpoint the aggregate is posted to
    #[structopt(long, env = "TESULTS_ENDPOINT", default_value = "https://www.tesults.com/results")]
    pub endpoint: String,

    /// Give up on the upload after this long, e.g. 30s or 2m. Waits indefinitely when absent
    #[structopt(long, parse(try_from_str = parse_duration))]
    pub upload_timeout: Option<Duration>,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
