use crate::app::xml;
use config::{Config, ConfigError, File};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Key/value settings file referenced by the `tesults-config` parameter.
///
/// `.config` and `.xml` files are read as .NET application configuration,
/// taking the `<appSettings>` entries. Any other extension goes through the
/// `config` crate (TOML, JSON, YAML, INI, ...) and keys are read from the top
/// level of the document.
#[derive(Debug)]
pub struct ConfigFile {
    source: Source,
}

#[derive(Debug)]
enum Source {
    Layered(Config),
    AppSettings(HashMap<String, String>),
}

impl ConfigFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = if is_app_config(path) {
            Source::AppSettings(read_app_settings(path)?)
        } else {
            Source::Layered(Config::builder().add_source(File::from(path)).build()?)
        };
        Ok(Self { source })
    }

    /// Absent keys, keys that do not parse as a path and non-scalar values
    /// all read as `None`.
    pub fn lookup(&self, key: &str) -> Option<String> {
        match &self.source {
            Source::Layered(config) => match config.get_string(key) {
                Ok(value) => Some(value),
                Err(err) => {
                    trace!("No config value for '{}': {}", key, err);
                    None
                }
            },
            Source::AppSettings(settings) => settings.get(key).cloned(),
        }
    }
}

fn is_app_config(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("config") || ext.eq_ignore_ascii_case("xml"))
        .unwrap_or(false)
}

/// Applies `add`, `remove` and `clear` entries of `<appSettings>` in document
/// order. An `add` without `key` or `value` is skipped.
fn read_app_settings(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let package = xml::parse(&text).map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let document = package.as_document();
    let root = xml::root_element(&document)
        .filter(|root| root.name().local_part() == "configuration")
        .ok_or_else(|| {
            ConfigError::Message(format!("{} is not a <configuration> document", path.display()))
        })?;
    let entries =
        xml::select(root, "appSettings/*").map_err(|err| ConfigError::Foreign(Box::new(err)))?;

    let mut settings = HashMap::new();
    for entry in entries {
        let key = entry.attribute_value("key");
        match (entry.name().local_part(), key) {
            ("add", Some(key)) => match entry.attribute_value("value") {
                Some(value) => {
                    settings.insert(key.to_owned(), value.to_owned());
                }
                None => trace!("appSettings entry '{}' has no value", key),
            },
            ("remove", Some(key)) => {
                settings.remove(key);
            }
            ("clear", _) => settings.clear(),
            (other, _) => trace!("Skipping appSettings <{}> entry", other),
        }
    }
    Ok(settings)
}
