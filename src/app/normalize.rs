use crate::app::error::Error;
use crate::app::xml;
use crate::configuration::constants::report::CASE_RESULT;
use crate::reporter::model::{CaseRecord, CaseResult};
use sxd_document::dom::Element;

/// Builds the record of one finished case.
///
/// Only the attributes identifying the case are required. Failure detail and
/// properties are read when present and well formed.
pub fn normalize_case(case: Element<'_>) -> Result<CaseRecord, Error> {
    let classname = required(case, "classname")?;
    let name = required(case, "name")?;
    let start = required(case, "start-time")?;
    let end = required(case, "end-time")?;
    let duration = required(case, "duration")?;
    let status = required(case, "result")?;

    let result = CaseResult::from_runner_status(status);
    let mut record = CaseRecord::new(name.to_owned(), suite_name(classname).to_owned(), result);
    record.push_supplementary("Start Time", start);
    record.push_supplementary("End Time", end);
    record.push_supplementary("Duration", duration);

    if result == CaseResult::Fail {
        match failure_detail(case) {
            Some((message, stack_trace)) => {
                record.set_reason(message);
                record.push_supplementary("Stack Trace", stack_trace);
            }
            None => trace!("No failure detail for {}", name),
        }
    }
    read_properties(case, &mut record);
    Ok(record)
}

fn required<'d>(case: Element<'d>, attribute: &'static str) -> Result<&'d str, Error> {
    case.attribute_value(attribute)
        .ok_or(Error::MissingAttribute {
            element: CASE_RESULT,
            attribute,
        })
}

/// Last segment of a dotted class name: `NS.Sub.MyTests` is `MyTests`.
fn suite_name(classname: &str) -> &str {
    classname.rsplit('.').next().unwrap_or(classname)
}

fn failure_detail(case: Element<'_>) -> Option<(String, String)> {
    let message = xml::first_text(case, "failure[1]/message")?;
    let stack_trace = xml::first_text(case, "failure[1]/stack-trace")?;
    Some((message, stack_trace))
}

/// The author index counts every property, not only authors.
/// A malformed or duplicate property ends the scan; earlier fields stay.
fn read_properties(case: Element<'_>, record: &mut CaseRecord) {
    let properties = match xml::select(case, "properties[1]/property") {
        Ok(properties) => properties,
        Err(err) => {
            trace!("{}", err);
            return;
        }
    };
    for (index, property) in (1..).zip(properties) {
        let (name, value) = match (property.attribute_value("name"), property.attribute_value("value")) {
            (Some(name), Some(value)) => (name, value),
            _ => {
                trace!("Property without name or value, skipping the remaining properties");
                return;
            }
        };
        let recorded = match name.to_lowercase().as_str() {
            "description" => record.set_desc(value.to_owned()),
            "author" => record.push_supplementary(format!("Author {}", index), value),
            _ => record.push_supplementary(name, value),
        };
        if !recorded {
            trace!("Duplicate property '{}', skipping the remaining properties", name);
            return;
        }
    }
}
