//! Content globs: which template files the generation engine scans.
//!
//! Patterns are compiled with the `glob` crate when the descriptor is loaded,
//! so a syntactically broken pattern is a load error.  Whether any file
//! actually matches is never checked here; a pattern with no matches simply
//! contributes nothing to the scan.
//!
//! Two conveniences of the framework's own glob dialect are supported on top
//! of plain `glob` syntax:
//!
//! - brace alternation: `./src/**/*.{html,js}` compiles to two patterns;
//! - negation: a leading `!` excludes files matched by the rest of the
//!   pattern from the scan set.

use std::fmt;
use std::path::Path;

use glob::{MatchOptions, Pattern};

use super::error::MalformedConfig;

/// Options used for every content match.  `*` never crosses a path
/// separator; only `**` does.
pub const CONTENT_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Most patterns one `content` entry may expand to through brace groups.
pub const MAX_BRACE_ALTERNATIVES: usize = 1024;

/// One validated `content` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentGlob {
    /// The pattern as written, without the leading `!`.
    source: String,
    negated: bool,
    /// One compiled pattern per brace alternative, with any leading `./`
    /// removed so they match root-relative paths.
    patterns: Vec<Pattern>,
}

impl ContentGlob {
    /// Validates and compiles one `content` entry.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedConfig::InvalidGlob`] if the pattern is empty, has
    /// an unclosed brace group, or any alternative fails to compile.
    pub fn parse(raw: &str) -> Result<Self, MalformedConfig> {
        let invalid = |message: String| MalformedConfig::InvalidGlob {
            pattern: raw.to_string(),
            message,
        };

        let (negated, body) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if body.trim().is_empty() {
            return Err(invalid("pattern is empty".to_string()));
        }

        let patterns = expand_braces(body)
            .map_err(invalid)?
            .iter()
            .map(|alt| Pattern::new(strip_current_dir(alt)).map_err(|e| invalid(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: body.to_string(),
            negated,
            patterns,
        })
    }

    /// The pattern as written, without the negation marker.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The compiled alternatives, relative to the scan root.
    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }

    /// Returns `true` if a root-relative `path` matches any alternative.
    ///
    /// Negation is not applied here; callers decide what a match means.
    pub fn matches_path(&self, path: &Path) -> bool {
        let path = path.strip_prefix(".").unwrap_or(path);
        self.patterns
            .iter()
            .any(|p| p.matches_path_with(path, CONTENT_MATCH_OPTIONS))
    }
}

impl fmt::Display for ContentGlob {
    /// Writes the entry back in source form, including any `!`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        f.write_str(&self.source)
    }
}

/// The ordered `content` list of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSources {
    globs: Vec<ContentGlob>,
    relative: bool,
}

impl ContentSources {
    /// Compiles every entry, preserving declaration order.
    ///
    /// `relative` records whether patterns resolve against the config file's
    /// directory rather than the working directory.
    ///
    /// # Errors
    ///
    /// Returns the first [`MalformedConfig::InvalidGlob`] encountered.
    pub fn parse<I, S>(entries: I, relative: bool) -> Result<Self, MalformedConfig>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let globs = entries
            .into_iter()
            .map(|entry| ContentGlob::parse(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { globs, relative })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentGlob> {
        self.globs.iter()
    }

    /// Patterns that add files to the scan set.
    pub fn includes(&self) -> impl Iterator<Item = &ContentGlob> {
        self.globs.iter().filter(|g| !g.is_negated())
    }

    /// Patterns that remove files from the scan set.
    pub fn excludes(&self) -> impl Iterator<Item = &ContentGlob> {
        self.globs.iter().filter(|g| g.is_negated())
    }

    pub fn len(&self) -> usize {
        self.globs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// Entries in source form and declaration order.
    pub fn to_source_strings(&self) -> Vec<String> {
        self.globs.iter().map(ToString::to_string).collect()
    }

    /// Returns `true` if `path` is selected by some include and by no exclude.
    pub fn selects(&self, path: &Path) -> bool {
        self.includes().any(|g| g.matches_path(path)) && !self.excludes().any(|g| g.matches_path(path))
    }
}

impl<'a> IntoIterator for &'a ContentSources {
    type Item = &'a ContentGlob;
    type IntoIter = std::slice::Iter<'a, ContentGlob>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn strip_current_dir(pattern: &str) -> &str {
    let mut rest = pattern;
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest
}

/// Expands `{a,b}` groups into one pattern per alternative.  Groups may nest
/// and a pattern may contain several of them.  Braces inside a `[...]`
/// character class are literal.
fn expand_braces(pattern: &str) -> Result<Vec<String>, String> {
    let bytes = pattern.as_bytes();
    let mut open = None;
    let mut close = None;
    let mut depth = 0usize;
    let mut commas = Vec::new();
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'[' => {
                if let Some(end) = class_end(bytes, idx) {
                    idx = end + 1;
                    continue;
                }
            }
            b'{' => {
                if depth == 0 {
                    open = Some(idx);
                }
                depth += 1;
            }
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    close = Some(idx);
                    break;
                }
            }
            b',' if depth == 1 => commas.push(idx),
            _ => {}
        }
        idx += 1;
    }

    let Some(open) = open else {
        return Ok(vec![pattern.to_string()]);
    };
    let close = close.ok_or_else(|| "unclosed '{' in brace group".to_string())?;

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = Vec::with_capacity(commas.len() + 2);
    bounds.push(open);
    bounds.extend(commas);
    bounds.push(close);

    let mut expanded = Vec::new();
    for window in bounds.windows(2) {
        let alternative = &pattern[window[0] + 1..window[1]];
        expanded.extend(expand_braces(&format!("{prefix}{alternative}{suffix}"))?);
        if expanded.len() > MAX_BRACE_ALTERNATIVES {
            return Err(format!(
                "brace groups expand to more than {MAX_BRACE_ALTERNATIVES} patterns"
            ));
        }
    }
    Ok(expanded)
}

/// Index of the `]` closing the class opened at `open`, or `None` if the
/// class is never closed.  A `]` directly after `[` or `[!` is a member.
fn class_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut idx = open + 1;
    if bytes.get(idx) == Some(&b'!') {
        idx += 1;
    }
    if bytes.get(idx) == Some(&b']') {
        idx += 1;
    }
    bytes
        .get(idx..)?
        .iter()
        .position(|&b| b == b']')
        .map(|offset| idx + offset)
}
