#[macro_use]
extern crate log;

mod app;
mod configuration;
mod connection;
mod reporter;
mod time;

use log::LevelFilter;
use std::fs;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::exit;
use structopt::StructOpt;

use self::app::{App, Error};
use self::configuration::command_line::{LogLevel, Opt};
use self::connection::{DryRunSender, HttpSender, SendMessage};
use self::reporter::model::{ResultAggregate, UploadResponse};

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialize logging {}", e);
        exit(2);
    }
    debug!("Options {:#?}", options);

    let outcome = if options.dry_run {
        run(&options, DryRunSender::stdout())
    } else {
        match HttpSender::new(options.endpoint.clone(), options.upload_timeout) {
            Ok(sender) => run(&options, sender),
            Err(e) => {
                error!("Failed to create HTTP client {}", e);
                exit(1);
            }
        }
    };

    if let Err(e) = outcome {
        error!("{}", e);
        exit(1);
    }
}

fn run<S>(options: &Opt, sender: S) -> Result<(), Error>
where
    S: SendMessage<ResultAggregate, UploadResponse>,
{
    let mut app = App::new(options.input.clone(), sender);
    let input_error = |source| Error::Input {
        path: options.input.clone(),
        source,
    };
    if options.replay {
        let document = if is_stdin(&options.input) {
            io::read_to_string(io::stdin()).map_err(input_error)?
        } else {
            fs::read_to_string(&options.input).map_err(input_error)?
        };
        app.run_replay(&document)
    } else if is_stdin(&options.input) {
        app.run_stream(io::stdin().lock())
    } else {
        let file = fs::File::open(&options.input).map_err(input_error)?;
        app.run_stream(BufReader::new(file))
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        // stdout carries the --dry-run output
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
