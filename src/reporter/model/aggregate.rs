use serde_derive::{Deserialize, Serialize};

use super::case::CaseRecord;

/// Everything submitted at the end of a run.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResultAggregate {
    target: String,
    results: Results,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
struct Results {
    cases: Vec<CaseRecord>,
}

impl ResultAggregate {
    pub fn new(target: String, cases: Vec<CaseRecord>) -> Self {
        Self {
            target,
            results: Results { cases },
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.results.cases
    }
}

/// What the upload collaborator reports back. It is logged, never acted on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl UploadResponse {
    pub fn succeeded<M: Into<String>>(message: M) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn failed<M: Into<String>>(message: M, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            warnings: Vec::new(),
            errors,
        }
    }

    pub fn diagnostics(&self) -> [String; 4] {
        [
            format!("Success: {}", self.success),
            format!("Message: {}", self.message),
            format!("Warnings: {}", self.warnings.len()),
            format!("Errors: {}", self.errors.len()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::model::CaseResult;
    use serde_json::json;

    #[test]
    fn test_aggregate_nests_cases_under_results() {
        let aggregate = ResultAggregate::new(
            "token".into(),
            vec![CaseRecord::new("Adds".into(), "MathTests".into(), CaseResult::Pass)],
        );
        assert_eq!(
            serde_json::to_value(&aggregate).unwrap(),
            json!({
                "target": "token",
                "results": {
                    "cases": [{"name": "Adds", "suite": "MathTests", "result": "pass"}]
                }
            })
        );
    }

    #[test]
    fn test_diagnostics_report_counts() {
        let response = UploadResponse::succeeded("Success");
        assert_eq!(
            response.diagnostics(),
            [
                "Success: true".to_owned(),
                "Message: Success".to_owned(),
                "Warnings: 0".to_owned(),
                "Errors: 0".to_owned(),
            ]
        );

        let response = UploadResponse {
            success: false,
            message: "Bad target".into(),
            warnings: vec!["slow".into()],
            errors: vec!["a".into(), "b".into()],
        };
        assert_eq!(response.diagnostics()[2], "Warnings: 1");
        assert_eq!(response.diagnostics()[3], "Errors: 2");
    }
}
