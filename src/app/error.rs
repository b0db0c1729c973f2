use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed report fragment: {0}")]
    Parse(String),
    #[error("Invalid query '{path}': {message}")]
    Query { path: String, message: String },
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("Expected a <test-run> result document, found <{0}>")]
    NotAResultDocument(String),
    #[error("Cannot read events from {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
