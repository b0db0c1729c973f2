use crate::app::error::Error;
use crate::app::listener::Listener;
use crate::app::xml;
use crate::configuration::constants::report::RUN_END;
use crate::connection::SendMessage;
use crate::reporter::model::{ResultAggregate, UploadResponse};

/// Replays a complete result document as the events the runner would have
/// emitted: the first suite carrying settings, every case in document order,
/// then the run itself. Returns the number of events delivered.
pub fn replay<S>(listener: &mut Listener<S>, document: &str) -> Result<usize, Error>
where
    S: SendMessage<ResultAggregate, UploadResponse>,
{
    let package = xml::parse(document)?;
    let document = package.as_document();
    let root = xml::root_element(&document)
        .ok_or_else(|| Error::NotAResultDocument(String::new()))?;
    let root_name = root.name().local_part();
    if root_name != RUN_END {
        return Err(Error::NotAResultDocument(root_name.to_owned()));
    }

    let mut delivered = 0;
    if let Some(suite) = xml::select(root, "descendant::test-suite[settings]")?.into_iter().next() {
        listener.on_element(suite)?;
        delivered += 1;
    }
    for case in xml::select(root, "descendant::test-case")? {
        match listener.on_element(case) {
            Ok(()) => delivered += 1,
            Err(err) => warn!("Skipping case: {}", err),
        }
    }
    listener.on_element(root)?;
    Ok(delivered + 1)
}
