use crate::app::files::files_for_case;
use crate::configuration::constants::common::BUILD_SUITE;
use crate::configuration::run_config::RunConfig;
use crate::configuration::settings::ConfigFile;
use crate::reporter::model::{CaseRecord, CaseResult, ResultAggregate};

/// Turns the accumulated run into the aggregate to submit.
///
/// Returns `None` when no target is known once the settings file has been
/// applied; nothing may be submitted in that case.
pub fn assemble(run: &mut RunConfig, mut cases: Vec<CaseRecord>) -> Option<ResultAggregate> {
    apply_config_file(run);
    let target = run.target.clone()?;

    let files_root = run.files.as_deref();
    for case in cases.iter_mut() {
        let files = files_for_case(files_root, case.suite(), case.name());
        case.attach_files(files);
    }
    if let Some(build) = build_case(run) {
        cases.push(build);
    }
    Some(ResultAggregate::new(target, cases))
}

fn apply_config_file(run: &mut RunConfig) {
    let path = match run.config.as_deref() {
        Some(path) => path.to_owned(),
        None => return,
    };
    match ConfigFile::open(&path) {
        Ok(file) => run.apply_file(&file),
        Err(err) => debug!("Config file {} not used: {}", path, err),
    }
}

/// The synthetic case describing the whole build, when a build name is known.
pub fn build_case(run: &RunConfig) -> Option<CaseRecord> {
    let name = run.build_name.clone()?;
    let result = CaseResult::from_build_result(run.build_result.as_deref());
    let mut build = CaseRecord::new(name, BUILD_SUITE.to_owned(), result);
    if let Some(desc) = &run.build_desc {
        build.set_desc(desc.clone());
    }
    if let Some(reason) = &run.build_reason {
        build.set_reason(reason.clone());
    }
    let files = files_for_case(run.files.as_deref(), build.suite(), build.name());
    build.attach_files(files);
    Some(build)
}
