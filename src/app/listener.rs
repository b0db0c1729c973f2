use crate::app::error::Error;
use crate::app::extract::{extract_parameters, Extraction};
use crate::app::finalize;
use crate::app::normalize::normalize_case;
use crate::app::xml;
use crate::configuration::constants::report::{CASE_RESULT, RUN_END, RUN_START};
use crate::configuration::run_config::RunConfig;
use crate::connection::SendMessage;
use crate::reporter::model::{CaseRecord, ResultAggregate, UploadResponse};
use derivative::*;
use sxd_document::dom::Element;

/// Where a run stands. `Disabled` and `Done` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No run parameters read yet. Cases are still accepted.
    Idle,
    /// Parameters read and a target known.
    Accumulating,
    /// No target; every further event is ignored.
    Disabled,
    /// The aggregate was submitted.
    Done,
}

/// Collects the events of one run and submits them when the run ends.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Listener<S> {
    run: RunConfig,
    cases: Vec<CaseRecord>,
    phase: Phase,
    response: Option<UploadResponse>,
    #[derivative(Debug = "ignore")]
    sender: S,
}

impl<S> Listener<S>
where
    S: SendMessage<ResultAggregate, UploadResponse>,
{
    pub fn new(sender: S) -> Self {
        Self {
            run: RunConfig::default(),
            cases: Vec::new(),
            phase: Phase::Idle,
            response: None,
            sender,
        }
    }

    /// Handles one event document as delivered by the runner.
    ///
    /// Malformed XML and cases missing identifying attributes are reported as
    /// errors without changing any state. Unknown events are ignored.
    pub fn on_test_event(&mut self, report: &str) -> Result<(), Error> {
        if !self.is_listening() {
            return Ok(());
        }
        let package = xml::parse(report)?;
        let document = package.as_document();
        match xml::root_element(&document) {
            Some(root) => self.on_element(root),
            None => Ok(()),
        }
    }

    /// Handles an event already parsed, e.g. an element of a result document.
    pub fn on_element(&mut self, event: Element<'_>) -> Result<(), Error> {
        if !self.is_listening() {
            return Ok(());
        }
        match event.name().local_part() {
            RUN_START if self.phase == Phase::Idle => self.on_run_start(event),
            RUN_START => trace!("Run parameters already read"),
            CASE_RESULT => {
                let record = normalize_case(event)?;
                trace!("Case {}.{} recorded", record.suite(), record.name());
                self.cases.push(record);
            }
            RUN_END => self.on_run_end(),
            other => trace!("Ignoring <{}> event", other),
        }
        Ok(())
    }

    fn on_run_start(&mut self, suite: Element<'_>) {
        if extract_parameters(suite, &mut self.run) == Extraction::Abandoned {
            trace!("Suite event without settings");
            return;
        }
        if self.run.target.is_none() {
            self.phase = Phase::Disabled;
            info!("Tesults disabled. No tesults-target param supplied.");
        } else {
            self.phase = Phase::Accumulating;
        }
    }

    fn on_run_end(&mut self) {
        let cases = std::mem::take(&mut self.cases);
        let aggregate = match finalize::assemble(&mut self.run, cases) {
            Some(aggregate) => aggregate,
            None => {
                self.phase = Phase::Disabled;
                info!("Tesults disabled. No tesults-target param supplied.");
                return;
            }
        };
        info!("Tesults results upload...");
        let response = self.sender.send(aggregate);
        for line in response.diagnostics().iter() {
            info!("{}", line);
        }
        self.response = Some(response);
        self.phase = Phase::Done;
    }

    fn is_listening(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Accumulating)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn run_config(&self) -> &RunConfig {
        &self.run
    }

    /// Cases recorded so far; empty once they have been submitted.
    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Reply of the upload collaborator, once the run has ended.
    #[cfg(test)]
    pub fn response(&self) -> Option<&UploadResponse> {
        self.response.as_ref()
    }

    #[cfg(test)]
    pub fn sender(&self) -> &S {
        &self.sender
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{case_event, run_end, run_start, Recorder};
    use crate::reporter::model::CaseResult;
    use std::fs;

    fn listener() -> Listener<Recorder> {
        Listener::new(Recorder::default())
    }

    #[test]
    fn test_full_run_is_submitted_in_arrival_order() {
        let mut listener = listener();
        listener.on_test_event(&run_start(&[("tesults-target", "token")])).unwrap();
        assert_eq!(listener.phase(), Phase::Accumulating);
        listener.on_test_event(&case_event("NS.MathTests", "Adds", "Passed", "")).unwrap();
        listener.on_test_event(&case_event("NS.MathTests", "Subtracts", "Failed", "")).unwrap();
        listener.on_test_event(&case_event("NS.Other.IoTests", "Reads", "Skipped", "")).unwrap();
        listener.on_test_event(&run_end()).unwrap();

        assert_eq!(listener.phase(), Phase::Done);
        let sent = listener.sender().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].target(), "token");
        let summary: Vec<(&str, &str, CaseResult)> = sent[0]
            .cases()
            .iter()
            .map(|case| (case.suite(), case.name(), case.result()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("MathTests", "Adds", CaseResult::Pass),
                ("MathTests", "Subtracts", CaseResult::Fail),
                ("IoTests", "Reads", CaseResult::Unknown),
            ]
        );
    }

    #[test]
    fn test_missing_target_disables_the_run() {
        let mut listener = listener();
        listener.on_test_event(&run_start(&[("tesults-build-name", "1.0")])).unwrap();
        assert_eq!(listener.phase(), Phase::Disabled);

        listener.on_test_event(&case_event("NS.MathTests", "Adds", "Passed", "")).unwrap();
        listener.on_test_event(&run_end()).unwrap();
        // malformed input is not even parsed any more
        listener.on_test_event("<broken").unwrap();

        assert!(listener.cases().is_empty());
        assert!(listener.sender().sent().is_empty());
        assert_eq!(listener.response(), None);
        assert_eq!(listener.phase(), Phase::Disabled);
    }

    #[test]
    fn test_parameters_are_read_once() {
        let mut listener = listener();
        listener.on_test_event(&run_start(&[("tesults-target", "first")])).unwrap();
        listener
            .on_test_event(&run_start(&[("tesults-target", "second"), ("tesults-build-name", "b")]))
            .unwrap();
        assert_eq!(listener.run_config().target.as_deref(), Some("first"));
        assert_eq!(listener.run_config().build_name, None);
    }

    #[test]
    fn test_suite_without_settings_does_not_disable() {
        let mut listener = listener();
        listener
            .on_test_event(r#"<test-suite type="TestFixture" name="MathTests" result="Passed" />"#)
            .unwrap();
        assert_eq!(listener.phase(), Phase::Idle);
        listener.on_test_event(&run_start(&[("tesults-target", "token")])).unwrap();
        assert_eq!(listener.phase(), Phase::Accumulating);
    }

    #[test]
    fn test_cases_before_run_start_are_kept() {
        let mut listener = listener();
        listener.on_test_event(&case_event("NS.MathTests", "Adds", "Passed", "")).unwrap();
        listener.on_test_event(&run_start(&[("tesults-target", "token")])).unwrap();
        listener.on_test_event(&run_end()).unwrap();

        let sent = listener.sender().sent();
        assert_eq!(sent[0].cases().len(), 1);
    }

    #[test]
    fn test_run_end_without_target_submits_nothing() {
        let mut listener = listener();
        listener.on_test_event(&case_event("NS.MathTests", "Adds", "Passed", "")).unwrap();
        listener.on_test_event(&run_end()).unwrap();

        assert_eq!(listener.phase(), Phase::Disabled);
        assert!(listener.sender().sent().is_empty());
    }

    #[test]
    fn test_unknown_and_malformed_events() {
        let mut listener = listener();
        listener.on_test_event(r#"<start-test id="0-1001" name="Adds" />"#).unwrap();
        listener.on_test_event(r#"<test-output stream="Out">hello</test-output>"#).unwrap();
        assert!(matches!(listener.on_test_event("<test-case"), Err(Error::Parse(_))));
        assert!(matches!(
            listener.on_test_event(r#"<test-case name="Adds" />"#),
            Err(Error::MissingAttribute { .. })
        ));
        assert_eq!(listener.phase(), Phase::Idle);
        assert!(listener.cases().is_empty());
    }

    #[test]
    fn test_events_after_submission_are_ignored() {
        let mut listener = listener();
        listener.on_test_event(&run_start(&[("tesults-target", "token")])).unwrap();
        listener.on_test_event(&run_end()).unwrap();
        listener.on_test_event(&case_event("NS.MathTests", "Late", "Passed", "")).unwrap();
        listener.on_test_event(&run_end()).unwrap();

        assert_eq!(listener.sender().sent().len(), 1);
        assert!(listener.cases().is_empty());
    }

    #[test]
    fn test_response_is_recorded() {
        let mut listener = listener();
        listener.on_test_event(&run_start(&[("tesults-target", "token")])).unwrap();
        listener.on_test_event(&run_end()).unwrap();

        let response = listener.response().unwrap();
        assert_eq!(
            response.diagnostics(),
            [
                "Success: true".to_owned(),
                "Message: Success".to_owned(),
                "Warnings: 0".to_owned(),
                "Errors: 0".to_owned(),
            ]
        );
    }

    #[test]
    fn test_build_case_and_files() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("MathTests").join("Adds");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("one.txt"), b"1").unwrap();
        fs::write(dir.join("two.txt"), b"2").unwrap();
        let root_path = root.path().display().to_string();

        let mut listener = listener();
        listener
            .on_test_event(&run_start(&[
                ("tesults-target", "token"),
                ("tesults-files", &root_path),
                ("tesults-build-name", "1.2.0"),
                ("tesults-build-result", "FAIL"),
            ]))
            .unwrap();
        listener.on_test_event(&case_event("NS.MathTests", "Adds", "Passed", "")).unwrap();
        listener.on_test_event(&case_event("NS.MathTests", "Divides", "Passed", "")).unwrap();
        listener.on_test_event(&run_end()).unwrap();

        let sent = listener.sender().sent();
        let cases = sent[0].cases();
        assert_eq!(cases.len(), 3);
        assert_eq!(
            cases[0].files().unwrap(),
            &[
                dir.join("one.txt").display().to_string(),
                dir.join("two.txt").display().to_string(),
            ]
        );
        assert_eq!(cases[1].files(), None);
        assert_eq!(cases[2].suite(), "[build]");
        assert_eq!(cases[2].result(), CaseResult::Fail);
    }
}
