//! Source decoding: text in, [`crate::ConfigDescriptor`] out.
//!
//! Loading happens in two steps so that parse failures and validation
//! failures stay separate:
//!
//! ```text
//! &str ──(toml / serde_json)──▶ RawConfig ──(validate)──▶ ConfigDescriptor
//! ```
//!
//! [`raw`] holds the serde schema, which mirrors the file layout exactly
//! (camelCase keys, untagged value shapes).  [`loader`] turns it into domain
//! types and back.

pub mod format;
pub mod loader;
pub mod raw;
