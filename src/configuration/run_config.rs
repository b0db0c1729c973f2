use crate::configuration::constants::keys;
use crate::configuration::settings::ConfigFile;

/// Run parameters collected from the runner and, at the end of the run, the
/// optional settings file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunConfig {
    /// Either the literal upload target or, when a settings file is present,
    /// the key under which the real target is stored. See [`RunConfig::apply_file`].
    pub target: Option<String>,
    pub config: Option<String>,
    pub files: Option<String>,
    pub build_name: Option<String>,
    pub build_desc: Option<String>,
    pub build_result: Option<String>,
    pub build_reason: Option<String>,
}

impl RunConfig {
    /// Stores a runner parameter. Returns `false` for keys this adapter does
    /// not know.
    pub fn set_parameter(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            keys::TARGET => &mut self.target,
            keys::CONFIG => &mut self.config,
            keys::FILES => &mut self.files,
            keys::BUILD_NAME => &mut self.build_name,
            keys::BUILD_DESC => &mut self.build_desc,
            keys::BUILD_RESULT => &mut self.build_result,
            keys::BUILD_REASON => &mut self.build_reason,
            _ => return false,
        };
        *slot = Some(value.to_owned());
        true
    }

    /// Merges values from the settings file.
    ///
    /// The target is resolved through the file: when the current target is a
    /// key of the file, its value replaces the target. Otherwise the target is
    /// used literally. The remaining fields are filled in only where the
    /// runner left them unset.
    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(indirect) = self.target.as_deref().and_then(|key| file.lookup(key)) {
            debug!("Target resolved through config file");
            self.target = Some(indirect);
        }
        let fallbacks = [
            (&mut self.files, keys::FILES),
            (&mut self.build_name, keys::BUILD_NAME),
            (&mut self.build_desc, keys::BUILD_DESC),
            (&mut self.build_result, keys::BUILD_RESULT),
            (&mut self.build_reason, keys::BUILD_REASON),
        ];
        for (slot, key) in fallbacks {
            if slot.is_none() {
                *slot = file.lookup(key);
            }
        }
    }
}
