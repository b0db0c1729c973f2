pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

/// Keys read from the runner's parameter table and from the config file.
pub mod keys {
    pub const TARGET: &'static str = "tesults-target";
    pub const CONFIG: &'static str = "tesults-config";
    pub const FILES: &'static str = "tesults-files";
    pub const BUILD_NAME: &'static str = "tesults-build-name";
    pub const BUILD_DESC: &'static str = "tesults-build-desc";
    pub const BUILD_RESULT: &'static str = "tesults-build-result";
    pub const BUILD_REASON: &'static str = "tesults-build-reason";
}

/// Element and attribute names of the runner's event documents.
pub mod report {
    pub const RUN_START: &'static str = "test-suite";
    pub const CASE_RESULT: &'static str = "test-case";
    pub const RUN_END: &'static str = "test-run";
    pub const PARAMETERS_SETTING: &'static str = "TestParametersDictionary";
}

pub mod common {
    /// Suite of the synthetic build case, never a valid class name.
    pub const BUILD_SUITE: &'static str = "[build]";
}
