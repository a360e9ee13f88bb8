//! Class-reference propagation for `tinct-refs`.
//!
//! After a color key is renamed, every JSX/TSX source file referencing the
//! old class must follow. [`update_references`] enumerates the project's
//! source files, rewrites matching `className` attributes, and persists the
//! changed files concurrently — per-file outcomes are collected into a
//! [`ReferenceReport`]; one failing file never blocks the rest.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use regex::Regex;
use thiserror::Error;
use tinct_core::types::ClassReplacement;
use walkdir::WalkDir;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Aggregate outcome of one propagation batch.
#[derive(Debug, Default)]
pub struct ReferenceReport {
    /// Number of source files scanned.
    pub scanned: usize,
    /// Files whose class lists changed and were rewritten.
    pub updated: Vec<PathBuf>,
    /// Files that could not be read, rewritten, or persisted.
    pub failed: Vec<(PathBuf, String)>,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Errors from a single file rewrite.
#[derive(Debug, Error)]
pub enum RefsError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RefsError {
    RefsError::Io {
        path: path.into(),
        source,
    }
}

// ---------------------------------------------------------------------------
// File enumeration
// ---------------------------------------------------------------------------

const SKIP_DIRS: &[&str] = &["node_modules", ".git", ".next", "dist", "build", "out"];
const SOURCE_EXTENSIONS: &[&str] = &["jsx", "tsx", "js", "ts"];

/// All rewritable source files under `root`, build and dependency
/// directories excluded.
pub fn find_source_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !(entry.file_type().is_dir() && SKIP_DIRS.contains(&name.as_ref()))
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
        })
        .map(|entry| entry.into_path())
        .collect()
}

// ---------------------------------------------------------------------------
// Class rewriting
// ---------------------------------------------------------------------------

/// Compiled `className` attribute scanner, reused across files.
pub struct ClassRewriter {
    attr: Regex,
    replacements: Vec<ClassReplacement>,
}

impl ClassRewriter {
    pub fn new(replacements: &[ClassReplacement]) -> Self {
        // Double- and single-quoted attributes, plus the braced string and
        // template-literal forms.
        let attr = Regex::new(
            r#"className\s*=\s*(?:"([^"]*)"|'([^']*)'|\{\s*"([^"]*)"\s*\}|\{\s*'([^']*)'\s*\}|\{\s*`([^`]*)`\s*\})"#,
        )
        .expect("className pattern compiles");
        Self {
            attr,
            replacements: replacements.to_vec(),
        }
    }

    /// Rewrite every matching class token in `source`. Returns `None` when
    /// nothing matched.
    ///
    /// Pending edits are gathered in one scan pass and applied back-to-front
    /// in a second, so byte offsets stay valid throughout.
    pub fn rewrite(&self, source: &str) -> Option<String> {
        let mut edits: Vec<(std::ops::Range<usize>, String)> = Vec::new();
        for captures in self.attr.captures_iter(source) {
            let group = (1..=5).find_map(|i| captures.get(i));
            let Some(value) = group else { continue };
            if let Some(rewritten) = self.rewrite_class_list(value.as_str()) {
                edits.push((value.range(), rewritten));
            }
        }
        if edits.is_empty() {
            return None;
        }
        let mut out = source.to_owned();
        for (range, replacement) in edits.into_iter().rev() {
            out.replace_range(range, &replacement);
        }
        Some(out)
    }

    /// Rewrite a whitespace-separated class list, preserving the original
    /// spacing. Returns `None` when no token changed.
    fn rewrite_class_list(&self, list: &str) -> Option<String> {
        let mut out = String::with_capacity(list.len());
        let mut changed = false;
        let mut rest = list;
        while !rest.is_empty() {
            let token_len = rest
                .find(char::is_whitespace)
                .unwrap_or(rest.len());
            if token_len == 0 {
                let ws_len = rest
                    .find(|c: char| !c.is_whitespace())
                    .unwrap_or(rest.len());
                out.push_str(&rest[..ws_len]);
                rest = &rest[ws_len..];
                continue;
            }
            let token = &rest[..token_len];
            match self.rewrite_token(token) {
                Some(replacement) => {
                    changed = true;
                    out.push_str(&replacement);
                }
                None => out.push_str(token),
            }
            rest = &rest[token_len..];
        }
        changed.then_some(out)
    }

    /// A token matches a replacement when it equals the old class or ends
    /// with `-<old>`; the old class substring is substituted, preserving any
    /// prefix before it (`hover:bg-brand-accent` → `hover:bg-brand-accent2`).
    fn rewrite_token(&self, token: &str) -> Option<String> {
        for rep in &self.replacements {
            if token == rep.old_class {
                return Some(rep.new_class.clone());
            }
            let suffix = format!("-{}", rep.old_class);
            if token.ends_with(&suffix) {
                let prefix = &token[..token.len() - rep.old_class.len()];
                return Some(format!("{prefix}{}", rep.new_class));
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Fan-out update
// ---------------------------------------------------------------------------

/// Rewrite class references in every source file under `root`.
///
/// Files are processed concurrently with no ordering guarantee; outcomes are
/// collected per file.
pub fn update_references(root: &Path, replacements: &[ClassReplacement]) -> ReferenceReport {
    if replacements.is_empty() {
        return ReferenceReport::default();
    }
    let rewriter = ClassRewriter::new(replacements);
    let files = find_source_files(root);
    let scanned = files.len();

    let outcomes: Vec<Option<Result<PathBuf, (PathBuf, String)>>> = files
        .par_iter()
        .map(|path| match rewrite_file(path, &rewriter) {
            Ok(true) => Some(Ok(path.clone())),
            Ok(false) => None,
            Err(err) => Some(Err((path.clone(), err.to_string()))),
        })
        .collect();

    let mut report = ReferenceReport {
        scanned,
        ..ReferenceReport::default()
    };
    for outcome in outcomes.into_iter().flatten() {
        match outcome {
            Ok(path) => report.updated.push(path),
            Err(failure) => report.failed.push(failure),
        }
    }
    report.updated.sort();
    report.failed.sort();

    tracing::debug!(
        "class propagation: {} scanned, {} updated, {} failed",
        report.scanned,
        report.updated.len(),
        report.failed.len()
    );
    report
}

/// Rewrite one file. Returns whether the file changed.
fn rewrite_file(path: &Path, rewriter: &ClassRewriter) -> Result<bool, RefsError> {
    let source = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let Some(rewritten) = rewriter.rewrite(&source) else {
        return Ok(false);
    };

    // Same tmp + rename protocol as the theme writer.
    let tmp = PathBuf::from(format!("{}.tinct.tmp", path.display()));
    std::fs::write(&tmp, &rewritten).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn replacement(old: &str, new: &str) -> Vec<ClassReplacement> {
        vec![ClassReplacement {
            old_class: old.to_owned(),
            new_class: new.to_owned(),
        }]
    }

    #[test]
    fn exact_token_is_replaced() {
        let rw = ClassRewriter::new(&replacement("brand-accent", "brand-accent2"));
        let out = rw
            .rewrite(r#"<div className="brand-accent p-2" />"#)
            .expect("rewrite");
        assert_eq!(out, r#"<div className="brand-accent2 p-2" />"#);
    }

    #[test]
    fn suffix_token_keeps_its_utility_prefix() {
        let rw = ClassRewriter::new(&replacement("brand-accent", "brand-accent2"));
        let out = rw
            .rewrite(r#"<div className="bg-brand-accent hover:text-brand-accent" />"#)
            .expect("rewrite");
        assert_eq!(
            out,
            r#"<div className="bg-brand-accent2 hover:text-brand-accent2" />"#
        );
    }

    #[test]
    fn unrelated_tokens_are_untouched() {
        let rw = ClassRewriter::new(&replacement("brand", "identity"));
        assert!(rw
            .rewrite(r#"<div className="brandish bg-brander p-2" />"#)
            .is_none());
    }

    #[test]
    fn single_quoted_and_braced_forms_are_scanned() {
        let rw = ClassRewriter::new(&replacement("brand", "identity"));
        let out = rw
            .rewrite("<a className='bg-brand' /><b className={'brand'} /><c className={`text-brand p-1`} />")
            .expect("rewrite");
        assert!(out.contains("className='bg-identity'"));
        assert!(out.contains("className={'identity'}"));
        assert!(out.contains("className={`text-identity p-1`}"));
    }

    #[test]
    fn spacing_inside_the_class_list_is_preserved() {
        let rw = ClassRewriter::new(&replacement("brand", "identity"));
        let out = rw
            .rewrite("<div className=\"p-2  bg-brand\n  m-1\" />")
            .expect("rewrite");
        assert_eq!(out, "<div className=\"p-2  bg-identity\n  m-1\" />");
    }

    #[test]
    fn multiple_replacements_apply_in_one_pass() {
        let reps = vec![
            ClassReplacement {
                old_class: "brand".into(),
                new_class: "identity".into(),
            },
            ClassReplacement {
                old_class: "mono-ink".into(),
                new_class: "mono-pen".into(),
            },
        ];
        let rw = ClassRewriter::new(&reps);
        let out = rw
            .rewrite(r#"<div className="bg-brand text-mono-ink" />"#)
            .expect("rewrite");
        assert_eq!(out, r#"<div className="bg-identity text-mono-pen" />"#);
    }
}
