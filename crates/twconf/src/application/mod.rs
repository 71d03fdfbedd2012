//! Application layer: the use cases behind each CLI command.

pub mod expand_content;
pub mod inspect_config;
