//! Infrastructure layer for twconf.
//!
//! Contains OS-facing adapters: locating and reading config files.
//!
//! **Dependency rule**: this layer may depend on `twconf_core`, and the
//! `application` layer calls into it; it never imports from `application`.

pub mod storage;
