pub mod command_line;
pub mod constants;
pub mod run_config;
pub mod settings;
