use serde_derive::Serialize;

/// Outcome of a single case as the results service understands it.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseResult {
    Pass,
    Fail,
    Unknown,
}

impl CaseResult {
    /// Maps the runner's raw status. Only the exact strings `Passed` and
    /// `Failed` are recognized.
    pub fn from_runner_status(raw: &str) -> Self {
        match raw {
            "Passed" => CaseResult::Pass,
            "Failed" => CaseResult::Fail,
            _ => CaseResult::Unknown,
        }
    }

    /// Maps a user supplied build result, ignoring case.
    pub fn from_build_result(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("pass") => CaseResult::Pass,
            Some("fail") => CaseResult::Fail,
            _ => CaseResult::Unknown,
        }
    }
}
