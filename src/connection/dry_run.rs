use crate::connection::SendMessage;
use crate::reporter::model::{ResultAggregate, UploadResponse};
use std::cell::RefCell;
use std::io::{self, Stdout, Write};

/// Writes the aggregate as pretty JSON instead of uploading it.
pub struct DryRunSender<W: Write = Stdout> {
    out: RefCell<W>,
}

impl DryRunSender<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DryRunSender<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write(&self, aggregate: &ResultAggregate) -> Result<(), String> {
        let mut out = self.out.borrow_mut();
        serde_json::to_writer_pretty(&mut *out, aggregate).map_err(|err| err.to_string())?;
        writeln!(out).and_then(|_| out.flush()).map_err(|err| err.to_string())
    }
}

impl<W: Write> SendMessage<ResultAggregate, UploadResponse> for DryRunSender<W> {
    fn send(&self, aggregate: ResultAggregate) -> UploadResponse {
        match self.write(&aggregate) {
            Ok(()) => UploadResponse::succeeded("Dry run"),
            Err(err) => UploadResponse::failed("Dry run output failed", vec![err]),
        }
    }
}
