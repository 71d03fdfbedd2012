//! # twconf-core
//!
//! Shared library for twconf containing the configuration descriptor of a
//! utility-class CSS build, the source decoders that produce it, and the
//! theme merge the generation engine applies to it.
//!
//! This crate has zero dependencies on the file system, the terminal, or any
//! process-level state.  Everything here works on in-memory strings and
//! values, which keeps it usable from the CLI, from tests, and from any other
//! build tool that wants to read the same configuration.
//!
//! # Architecture overview
//!
//! A build of a utility-class framework is driven by one declarative file: it
//! names the templates to scan, how dark-mode variants activate, which theme
//! tokens to add on top of the framework defaults, and which plugins to load.
//!
//! - **`domain`** – The validated, immutable [`ConfigDescriptor`] and its
//!   parts: [`DarkMode`], [`ContentSources`], [`Theme`], [`PluginRef`].  The
//!   [`merge`] function overlays theme extensions on a base theme.
//!
//! - **`source`** – How text becomes a descriptor.  TOML and JSON sources are
//!   decoded into a raw serde schema and then validated into domain types.
//!   Any failure is reported as a single error kind, [`MalformedConfig`].

pub mod domain;
pub mod source;

// Re-export the most-used types at the crate root so callers can write
// `twconf_core::ConfigDescriptor` instead of the full module path.
pub use domain::content::{ContentGlob, ContentSources};
pub use domain::dark_mode::{DarkMode, DarkModeStrategy};
pub use domain::defaults::builtin_theme;
pub use domain::descriptor::{ConfigDescriptor, DescriptorSummary, ImportantMode};
pub use domain::error::MalformedConfig;
pub use domain::plugin::PluginRef;
pub use domain::theme::{
    merge, EffectiveTheme, Theme, ThemeCategory, ThemeConfig, ThemeDefaults, ThemeExtensions,
    TokenMap, TokenValue,
};
pub use source::format::SourceFormat;
pub use source::loader::{decode_theme, load};
