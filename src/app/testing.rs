//! Event documents and an upload double shared by the unit tests.

use crate::connection::SendMessage;
use crate::reporter::model::{ResultAggregate, UploadResponse};
use std::cell::{Ref, RefCell};

/// Keeps every aggregate it is given and answers with `response`.
#[derive(Debug)]
pub struct Recorder {
    sent: RefCell<Vec<ResultAggregate>>,
    response: UploadResponse,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::answering(UploadResponse::succeeded("Success"))
    }
}

impl Recorder {
    pub fn answering(response: UploadResponse) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            response,
        }
    }

    pub fn sent(&self) -> Ref<'_, Vec<ResultAggregate>> {
        self.sent.borrow()
    }
}

impl SendMessage<ResultAggregate, UploadResponse> for Recorder {
    fn send(&self, data: ResultAggregate) -> UploadResponse {
        self.sent.borrow_mut().push(data);
        self.response.clone()
    }
}

pub fn run_start(parameters: &[(&str, &str)]) -> String {
    let items: String = parameters
        .iter()
        .map(|(key, value)| format!(r#"<item key="{}" value="{}" />"#, key, value))
        .collect();
    format!(
        r#"<test-suite type="Assembly" id="0-1000" name="Math.dll" result="Passed"><settings><setting name="TestParametersDictionary">{}</setting></settings></test-suite>"#,
        items
    )
}

pub fn case_event(classname: &str, name: &str, result: &str, body: &str) -> String {
    format!(
        r#"<test-case id="0-1001" name="{name}" fullname="{classname}.{name}" classname="{classname}" result="{result}" start-time="2020-06-01 10:00:00Z" end-time="2020-06-01 10:00:00Z" duration="0.012">{body}</test-case>"#,
        name = name,
        classname = classname,
        result = result,
        body = body
    )
}

pub fn run_end() -> String {
    r#"<test-run id="2" testcasecount="2" result="Passed" total="2" passed="2" failed="0" />"#
        .to_owned()
}
