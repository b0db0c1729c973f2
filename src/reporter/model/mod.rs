pub mod aggregate;
pub mod case;
pub mod status;

pub use aggregate::{ResultAggregate, UploadResponse};
pub use case::CaseRecord;
pub use status::CaseResult;
