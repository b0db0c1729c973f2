pub(crate) mod error;
pub(crate) mod extract;
pub(crate) mod files;
pub(crate) mod finalize;
pub(crate) mod listener;
pub(crate) mod normalize;
pub(crate) mod replay;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod xml;

pub use self::error::Error;
pub use self::listener::{Listener, Phase};

use crate::connection::SendMessage;
use crate::reporter::model::{ResultAggregate, UploadResponse};
use std::io::BufRead;
use std::path::PathBuf;

/// Feeds one run's events from an input source into a [`Listener`].
pub struct App<S> {
    source: PathBuf,
    listener: Listener<S>,
}

impl<S> App<S>
where
    S: SendMessage<ResultAggregate, UploadResponse>,
{
    pub fn new(source: PathBuf, sender: S) -> Self {
        Self {
            source,
            listener: Listener::new(sender),
        }
    }

    /// Delivers one fragment per non-blank line. A fragment that cannot be
    /// handled is logged and skipped; only a failing reader stops the run.
    pub fn run_stream<R: BufRead>(&mut self, reader: R) -> Result<(), Error> {
        info!("Reading events from {}", self.source.display());
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Input {
                path: self.source.clone(),
                source,
            })?;
            let fragment = line.trim();
            if fragment.is_empty() {
                continue;
            }
            if let Err(err) = self.listener.on_test_event(fragment) {
                warn!("Skipping event on line {}: {}", index + 1, err);
            }
        }
        self.report_unfinished();
        Ok(())
    }

    /// Replays a complete result document.
    pub fn run_replay(&mut self, document: &str) -> Result<(), Error> {
        info!("Replaying results from {}", self.source.display());
        let delivered = replay::replay(&mut self.listener, document)?;
        debug!("Replayed {} events", delivered);
        self.report_unfinished();
        Ok(())
    }

    fn report_unfinished(&self) {
        if matches!(self.listener.phase(), Phase::Idle | Phase::Accumulating) {
            warn!(
                "Input ended before the run finished, {} cases were not submitted",
                self.listener.cases().len()
            );
        }
    }

    #[cfg(test)]
    pub fn listener(&self) -> &Listener<S> {
        &self.listener
    }
}
