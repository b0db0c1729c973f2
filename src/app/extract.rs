use crate::app::xml;
use crate::configuration::constants::report::PARAMETERS_SETTING;
use crate::configuration::run_config::RunConfig;
use sxd_document::dom::Element;

/// Outcome of reading the parameter table of a run-start fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// The table was scanned; the target may or may not have been found.
    Scanned,
    /// The fragment carries no settings at all, nothing was read.
    Abandoned,
}

/// Copies recognized runner parameters from `suite` into `run`.
///
/// Items without a `key` or `value` attribute are skipped on their own.
pub fn extract_parameters(suite: Element<'_>, run: &mut RunConfig) -> Extraction {
    match xml::select(suite, "settings") {
        Ok(settings) if !settings.is_empty() => {}
        Ok(_) => return Extraction::Abandoned,
        Err(err) => {
            trace!("{}", err);
            return Extraction::Abandoned;
        }
    }
    let items = match xml::select(suite, &parameter_items()) {
        Ok(items) => items,
        Err(err) => {
            trace!("{}", err);
            return Extraction::Abandoned;
        }
    };
    for item in items {
        match (item.attribute_value("key"), item.attribute_value("value")) {
            (Some(key), Some(value)) => {
                if run.set_parameter(key, value) {
                    debug!("Parameter {} set", key);
                }
            }
            _ => trace!("Skipping parameter item without key or value"),
        }
    }
    Extraction::Scanned
}

fn parameter_items() -> String {
    format!("settings/setting[@name='{}']/item", PARAMETERS_SETTING)
}
