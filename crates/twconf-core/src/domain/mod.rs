//! Domain entities for twconf.
//!
//! This module contains the validated configuration model with no
//! infrastructure dependencies.  Nothing in here reads files or environment
//! variables; values arrive already decoded from [`crate::source`].
//!
//! The central type is [`descriptor::ConfigDescriptor`].  Once constructed it
//! is never mutated: the generation engine reads it for the duration of one
//! build and then drops it.

pub mod content;
pub mod dark_mode;
/// Built-in default theme used as the merge base when none is supplied.
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod plugin;
/// Theme categories, tokens, and the extend/override merge.
pub mod theme;
