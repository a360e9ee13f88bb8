//! Custom-property patching for the `:root` and `.dark` stylesheet scopes.
//!
//! Declarations are edited line-wise inside the located rule block; all text
//! outside the block is preserved byte-for-byte. Deletion is deliberately
//! textual — [`remove_lines_with_prefix`] drops every line whose trimmed
//! text starts with the property prefix, regardless of scope, because
//! deletion never needs to reason about declaration structure.

use std::collections::BTreeMap;

use tinct_core::color;
use tinct_core::types::ThemeScope;

use crate::error::ThemeError;

// ---------------------------------------------------------------------------
// Block location
// ---------------------------------------------------------------------------

struct ScopeBlock {
    /// Index of the block's `{`.
    open: usize,
    /// Index of the block's `}`.
    close: usize,
}

fn scope_block(text: &str, scope: ThemeScope) -> Option<ScopeBlock> {
    let selector = scope.selector();
    let bytes = text.as_bytes();
    let mut search = 0;
    while let Some(rel) = text[search..].find(selector) {
        let at = search + rel;
        search = at + selector.len();

        if at > 0 {
            let prev = bytes[at - 1];
            if prev.is_ascii_alphanumeric() || matches!(prev, b'-' | b'_' | b'.' | b'#' | b':') {
                continue;
            }
        }
        let mut i = at + selector.len();
        // `.dark` must not match `.darker`.
        if i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'-' | b'_'))
        {
            continue;
        }
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'{' {
            continue;
        }
        let close = block_close(bytes, i)?;
        return Some(ScopeBlock { open: i, close });
    }
    None
}

fn block_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth: i32 = 0;
    for (i, b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Declaration parsing
// ---------------------------------------------------------------------------

/// Parse one `--name: value;` line. The returned name has no `--` prefix.
fn parse_declaration(line: &str) -> Option<(String, String)> {
    let rest = line.trim().strip_prefix("--")?;
    let (name, value) = rest.split_once(':')?;
    let value = value.split(';').next().unwrap_or_default().trim();
    Some((name.trim().to_owned(), value.to_owned()))
}

/// All custom-property declarations in the scope, in document order.
pub fn declarations(text: &str, scope: ThemeScope) -> Vec<(String, String)> {
    let Some(block) = scope_block(text, scope) else {
        return Vec::new();
    };
    text[block.open + 1..block.close]
        .lines()
        .filter_map(parse_declaration)
        .collect()
}

/// The value declared for `name` in the scope, if any.
pub fn declaration_value(text: &str, scope: ThemeScope, name: &str) -> Option<String> {
    declarations(text, scope)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v)
}

/// Flat property→value mapping with recognized color encodings
/// canonicalized to hex. A missing scope yields an empty mapping.
pub fn extract(text: &str, scope: ThemeScope) -> BTreeMap<String, String> {
    declarations(text, scope)
        .into_iter()
        .map(|(name, value)| (name, color::canonicalize(&value)))
        .collect()
}

// ---------------------------------------------------------------------------
// Line edits
// ---------------------------------------------------------------------------

enum LineEdit {
    Keep,
    Replace(String),
    Remove,
}

/// Apply `edit` to every line inside the scope block. Returns the rebuilt
/// text, or the input unchanged when the scope is absent or nothing matched.
fn edit_scope_lines<F>(text: &str, scope: ThemeScope, mut edit: F) -> String
where
    F: FnMut(&str) -> LineEdit,
{
    let Some(block) = scope_block(text, scope) else {
        return text.to_owned();
    };
    let inner = &text[block.open + 1..block.close];
    let mut new_inner = String::with_capacity(inner.len());
    let mut changed = false;
    for piece in inner.split_inclusive('\n') {
        let line = piece.trim_end_matches(['\n', '\r']);
        let ending = &piece[line.len()..];
        match edit(line) {
            LineEdit::Keep => new_inner.push_str(piece),
            LineEdit::Replace(replacement) => {
                changed = true;
                new_inner.push_str(&replacement);
                new_inner.push_str(ending);
            }
            LineEdit::Remove => changed = true,
        }
    }
    if !changed {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..block.open + 1]);
    out.push_str(&new_inner);
    out.push_str(&text[block.close..]);
    out
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Append `--name: value;` at the end of the scope block, matching the
/// block's declaration indentation. The scope block must exist.
pub fn append_declaration(
    text: &str,
    scope: ThemeScope,
    name: &str,
    value: &str,
) -> Result<String, ThemeError> {
    let block = scope_block(text, scope).ok_or(ThemeError::MissingScope {
        selector: scope.selector(),
    })?;
    let inner = &text[block.open + 1..block.close];
    let indent = inner
        .lines()
        .find(|line| line.trim_start().starts_with("--"))
        .map(leading_whitespace)
        .unwrap_or("  ")
        .to_owned();

    // Insert just before the closing brace, in front of its indentation.
    let bytes = text.as_bytes();
    let mut insert_at = block.close;
    while insert_at > block.open + 1 && matches!(bytes[insert_at - 1], b' ' | b'\t') {
        insert_at -= 1;
    }
    let needs_newline = insert_at == block.open + 1 || bytes[insert_at - 1] != b'\n';

    let mut out = String::with_capacity(text.len() + name.len() + value.len() + 16);
    out.push_str(&text[..insert_at]);
    if needs_newline {
        out.push('\n');
    }
    out.push_str(&indent);
    out.push_str("--");
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(";\n");
    out.push_str(&text[insert_at..]);
    Ok(out)
}

/// Update the value of an existing declaration in place. Lines are left
/// untouched when the scope or the declaration is absent.
pub fn set_declaration(text: &str, scope: ThemeScope, name: &str, value: &str) -> String {
    edit_scope_lines(text, scope, |line| match parse_declaration(line) {
        Some((n, _)) if n == name => {
            LineEdit::Replace(format!("{}--{name}: {value};", leading_whitespace(line)))
        }
        _ => LineEdit::Keep,
    })
}

/// Remove the declaration for `old` and append a replacement `--new: value;`.
pub fn rename_declaration(
    text: &str,
    scope: ThemeScope,
    old: &str,
    new: &str,
    value: &str,
) -> Result<String, ThemeError> {
    let removed = edit_scope_lines(text, scope, |line| match parse_declaration(line) {
        Some((n, _)) if n == old => LineEdit::Remove,
        _ => LineEdit::Keep,
    });
    append_declaration(&removed, scope, new, value)
}

/// Move every declaration named `--old-<rest>` to `--new-<rest>`, values
/// preserved. Declarations named exactly `--old` are not touched.
pub fn migrate_prefix(text: &str, scope: ThemeScope, old: &str, new: &str) -> String {
    let old_prefix = format!("{old}-");
    edit_scope_lines(text, scope, |line| match parse_declaration(line) {
        Some((n, value)) => match n.strip_prefix(&old_prefix) {
            Some(rest) => LineEdit::Replace(format!(
                "{}--{new}-{rest}: {value};",
                leading_whitespace(line)
            )),
            None => LineEdit::Keep,
        },
        None => LineEdit::Keep,
    })
}

/// Drop every line (in any scope) whose trimmed text starts with
/// `--<prefix>`. This is a raw prefix match: a property that merely shares
/// the prefix is removed along with the target.
pub fn remove_lines_with_prefix(text: &str, prefix: &str) -> String {
    let needle = format!("--{prefix}");
    let mut out: String = text
        .lines()
        .filter(|line| !line.trim_start().starts_with(&needle))
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
