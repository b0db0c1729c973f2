use serde_derive::Serialize;

use super::status::CaseResult;

/// A single reported case, either a test or the synthetic build case.
///
/// The typed fields are the ones the results service interprets. Everything
/// else lands in `supplementary`, kept in the order it was recorded and
/// written out with a leading underscore (`_Duration`, `_Author 1`, ...).
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CaseRecord {
    name: String,
    suite: String,
    result: CaseResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<String>>,
    #[serde(flatten, with = "crate::reporter::serialize::supplementary")]
    supplementary: Vec<(String, String)>,
}

impl CaseRecord {
    pub fn new(name: String, suite: String, result: CaseResult) -> Self {
        Self {
            name,
            suite,
            result,
            reason: None,
            desc: None,
            files: None,
            supplementary: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    #[cfg(test)]
    pub fn result(&self) -> CaseResult {
        self.result
    }

    #[cfg(test)]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    #[cfg(test)]
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    #[cfg(test)]
    pub fn files(&self) -> Option<&[String]> {
        self.files.as_deref()
    }

    pub fn set_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    /// Returns `false` without touching the record when a description is
    /// already present.
    pub fn set_desc(&mut self, desc: String) -> bool {
        if self.desc.is_some() {
            return false;
        }
        self.desc = Some(desc);
        true
    }

    /// An empty list leaves the record without a `files` field.
    pub fn attach_files(&mut self, files: Vec<String>) {
        if !files.is_empty() {
            self.files = Some(files);
        }
    }

    /// Records a supplementary field. Keys are unique; returns `false` and
    /// keeps the earlier value when `key` was already recorded.
    pub fn push_supplementary<K, V>(&mut self, key: K, value: V) -> bool
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        if self.supplementary(&key).is_some() {
            return false;
        }
        self.supplementary.push((key, value.into()));
        true
    }

    pub fn supplementary(&self, key: &str) -> Option<&str> {
        self.supplementary
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn supplementary_fields(&self) -> &[(String, String)] {
        &self.supplementary
    }
}
