//! ExpandContentUseCase: list the template files the content globs select.
//!
//! This is a diagnostic: the files are found but never opened.  Include
//! patterns are expanded in declaration order, duplicates are dropped, and
//! then every negated pattern removes what it matches, wherever it appears
//! in the list.
//!
//! A pattern that matches nothing is reported with a zero count and a
//! warning; it is not an error.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use glob::Pattern;
use thiserror::Error;
use tracing::{debug, warn};
use twconf_core::domain::content::CONTENT_MATCH_OPTIONS;
use twconf_core::ContentSources;

/// Error type for content expansion.
#[derive(Debug, Error)]
pub enum ExpandContentError {
    /// The scan root combined with a pattern did not compile.
    #[error("could not expand content pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Match count for one `content` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatches {
    /// The entry in source form (with `!` if negated).
    pub pattern: String,
    pub negated: bool,
    /// Files the entry selected (includes) or removed (excludes).
    pub matched: usize,
}

/// Result of expanding a descriptor's content globs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReport {
    pub root: PathBuf,
    /// One entry per content glob, in declaration order.
    pub patterns: Vec<PatternMatches>,
    /// Selected files in discovery order, relative to `root` unless an
    /// absolute pattern selected them from outside it.
    pub files: Vec<PathBuf>,
}

/// Expands `content` against `root`.
///
/// # Errors
///
/// Returns [`ExpandContentError::Pattern`] if a pattern stops compiling once
/// joined to `root`.  Unreadable directories are skipped with a warning.
pub fn expand_content(content: &ContentSources, root: &Path) -> Result<ContentReport, ExpandContentError> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());

    let mut files = Vec::new();
    let mut seen = BTreeSet::new();
    let mut include_counts = HashMap::new();

    for (index, content_glob) in content.iter().enumerate() {
        if content_glob.is_negated() {
            continue;
        }
        let mut matched_here = BTreeSet::new();
        for alternative in content_glob.alternatives() {
            let full = if Path::new(alternative).is_absolute() {
                alternative.to_string()
            } else {
                format!("{escaped_root}/{alternative}")
            };
            debug!("expanding {full}");
            let paths = glob::glob_with(&full, CONTENT_MATCH_OPTIONS).map_err(|source| {
                ExpandContentError::Pattern {
                    pattern: content_glob.to_string(),
                    source,
                }
            })?;
            for entry in paths {
                match entry {
                    Ok(path) if path.is_file() => {
                        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
                        matched_here.insert(relative.clone());
                        if seen.insert(relative.clone()) {
                            files.push(relative);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => warn!("skipping unreadable path while scanning '{content_glob}': {e}"),
                }
            }
        }
        if matched_here.is_empty() {
            warn!("content pattern '{content_glob}' matched no files under {}", root.display());
        }
        include_counts.insert(index, matched_here.len());
    }

    let patterns = content
        .iter()
        .enumerate()
        .map(|(index, content_glob)| PatternMatches {
            pattern: content_glob.to_string(),
            negated: content_glob.is_negated(),
            matched: if content_glob.is_negated() {
                files.iter().filter(|f| content_glob.matches_path(f)).count()
            } else {
                include_counts.get(&index).copied().unwrap_or_default()
            },
        })
        .collect();

    files.retain(|f| !content.excludes().any(|exclude| exclude.matches_path(f)));

    Ok(ContentReport {
        root: root.to_path_buf(),
        patterns,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "<div class=\"p-4\"></div>").unwrap();
    }

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "templates/base.html");
        touch(dir.path(), "templates/admin/login.html");
        touch(dir.path(), "apps/blog/templates/blog/post_detail.html");
        touch(dir.path(), "apps/portfolio/templates/portfolio/index.html");
        touch(dir.path(), "static/js/app.js");
        dir
    }

    #[test]
    fn test_expands_portfolio_globs_in_order() {
        // Arrange
        let dir = site();
        let content = ContentSources::parse(
            [
                "./apps/portfolio/templates/**/*.html",
                "./apps/blog/templates/**/*.html",
                "./templates/**/*.html",
            ],
            false,
        )
        .unwrap();

        // Act
        let report = expand_content(&content, dir.path()).expect("expansion succeeds");

        // Assert: pattern order decides file order across patterns
        assert_eq!(report.files.len(), 4);
        assert_eq!(
            report.files[..2],
            [
                PathBuf::from("apps/portfolio/templates/portfolio/index.html"),
                PathBuf::from("apps/blog/templates/blog/post_detail.html"),
            ]
        );
        let mut last: Vec<_> = report.files[2..].to_vec();
        last.sort();
        assert_eq!(
            last,
            [
                PathBuf::from("templates/admin/login.html"),
                PathBuf::from("templates/base.html"),
            ]
        );
        let counts: Vec<_> = report.patterns.iter().map(|p| p.matched).collect();
        assert_eq!(counts, [1, 1, 2]);
    }

    #[test]
    fn test_pattern_without_matches_is_reported_not_failed() {
        let dir = site();
        let content = ContentSources::parse(["./missing/**/*.html"], false).unwrap();

        let report = expand_content(&content, dir.path()).unwrap();

        assert!(report.files.is_empty());
        assert_eq!(report.patterns[0].matched, 0);
    }

    #[test]
    fn test_overlapping_patterns_do_not_duplicate_files() {
        let dir = site();
        let content =
            ContentSources::parse(["./templates/**/*.html", "./templates/*.html"], false).unwrap();

        let report = expand_content(&content, dir.path()).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.patterns[1].matched, 1);
    }

    #[test]
    fn test_negated_pattern_removes_files_regardless_of_position() {
        let dir = site();
        let content = ContentSources::parse(
            ["!./templates/admin/**", "./templates/**/*.html"],
            false,
        )
        .unwrap();

        let report = expand_content(&content, dir.path()).unwrap();

        assert_eq!(report.files, [PathBuf::from("templates/base.html")]);
        assert!(report.patterns[0].negated);
        assert_eq!(report.patterns[0].matched, 1);
        assert_eq!(report.patterns[0].pattern, "!./templates/admin/**");
    }

    #[test]
    fn test_brace_alternatives_are_expanded() {
        let dir = site();
        let content = ContentSources::parse(["./{templates,static}/**/*.{html,js}"], false).unwrap();

        let report = expand_content(&content, dir.path()).unwrap();

        assert_eq!(report.files.len(), 3);
        assert!(report.files.contains(&PathBuf::from("static/js/app.js")));
    }

    #[test]
    fn test_absolute_pattern_is_not_joined_to_root() {
        // Arrange: templates live outside the scan root
        let shared = site();
        let root = tempfile::tempdir().unwrap();
        let pattern = format!("{}/templates/*.html", shared.path().display());
        let content = ContentSources::parse([pattern.as_str()], false).unwrap();

        // Act
        let report = expand_content(&content, root.path()).unwrap();

        // Assert
        assert_eq!(report.root, root.path());
        assert_eq!(report.files, [shared.path().join("templates/base.html")]);
        assert_eq!(report.patterns[0].matched, 1);
    }

    #[test]
    fn test_directories_are_not_reported_as_files() {
        let dir = site();
        let content = ContentSources::parse(["./templates/*"], false).unwrap();

        let report = expand_content(&content, dir.path()).unwrap();

        assert_eq!(report.files, [PathBuf::from("templates/base.html")]);
    }
}
