//! Storage infrastructure: configuration file discovery and reading.
//!
//! The `config` sub-module finds the project's config file, reads it, and
//! hands the text to `twconf_core` for validation.  File-system concerns
//! stay here so the core crate never touches the disk.

pub mod config;
