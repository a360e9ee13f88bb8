//! Targeted parser/printer for the `theme.extend.colors` object literal.
//!
//! The config file is never parsed as a whole. [`ColorsBlock::parse`] walks
//! the raw text to the `colors` object along the key path `theme` → `extend`
//! → `colors` (brace matching that skips strings and comments), parses only
//! that region into an order-preserving tree, and [`ColorsBlock::splice`]
//! re-prints the region into the otherwise untouched source. Each parsed
//! block is an owned, single-use value — one parse → mutate → splice cycle
//! per operation, never shared across edits.

use crate::error::ThemeError;

// ---------------------------------------------------------------------------
// Tree model
// ---------------------------------------------------------------------------

/// One `key: value` pair in the colors object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: ValueNode,
}

/// A parsed value in the colors tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    /// A quoted string value, stored without its quotes.
    Str(String),
    /// An unquoted expression (an import reference, a number), preserved
    /// verbatim and re-printed without quotes.
    Raw(String),
    /// A nested object — a color group.
    Object(Vec<Entry>),
}

impl ValueNode {
    fn is_object(&self) -> bool {
        matches!(self, ValueNode::Object(_))
    }
}

/// The parsed `theme.extend.colors` region of one config file.
#[derive(Debug, Clone)]
pub struct ColorsBlock {
    entries: Vec<Entry>,
    /// Byte range of the colors object in the source, braces included.
    span: (usize, usize),
    base_indent: String,
    unit: String,
    quote: char,
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

impl ColorsBlock {
    /// Locate and parse the colors object in `source`.
    pub fn parse(source: &str) -> Result<Self, ThemeError> {
        let len = source.len();
        let theme =
            find_key_object(source, "theme", 0, len, false).ok_or(ThemeError::MissingColorsBlock)?;
        let extend = find_key_object(source, "extend", theme.0 + 1, theme.1, true)
            .ok_or(ThemeError::MissingColorsBlock)?;
        let colors = find_key_object(source, "colors", extend.0 + 1, extend.1, true)
            .ok_or(ThemeError::MissingColorsBlock)?;

        let mut parser = Parser {
            text: source,
            pos: colors.0 + 1,
            end: colors.1,
            quote: None,
        };
        let entries = parser.parse_entries()?;
        let (base_indent, unit) = infer_indentation(source, colors.0, colors.1);

        Ok(Self {
            entries,
            span: (colors.0, colors.1 + 1),
            base_indent,
            unit,
            quote: parser.quote.unwrap_or('\''),
        })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&ValueNode> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn get_child(&self, group: &str, key: &str) -> Option<&ValueNode> {
        match self.get(group)? {
            ValueNode::Object(children) => {
                children.iter().find(|e| e.key == key).map(|e| &e.value)
            }
            _ => None,
        }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a top-level color entry.
    pub fn insert_root(&mut self, key: &str, value: String) {
        self.entries.push(Entry {
            key: key.to_owned(),
            value: ValueNode::Str(value),
        });
    }

    /// Append a color entry inside the named group.
    ///
    /// The group must already exist as a nested object.
    pub fn insert_child(&mut self, group: &str, key: &str, value: String) -> Result<(), ThemeError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.key == group)
            .ok_or_else(|| ThemeError::UnknownGroup(group.to_owned()))?;
        match &mut entry.value {
            ValueNode::Object(children) => {
                children.push(Entry {
                    key: key.to_owned(),
                    value: ValueNode::Str(value),
                });
                Ok(())
            }
            _ => Err(ThemeError::UnknownGroup(group.to_owned())),
        }
    }

    /// Rename a top-level key (group or flat color) and rewrite every
    /// `var(--old…)` reference beneath it to the new property prefix.
    pub fn rename_group(
        &mut self,
        old_key: &str,
        new_key: &str,
        old_prop: &str,
        new_prop: &str,
    ) -> Result<(), ThemeError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.key == old_key)
            .ok_or_else(|| ThemeError::UnknownGroup(old_key.to_owned()))?;
        entry.key = new_key.to_owned();
        rewrite_references(&mut entry.value, old_prop, new_prop);
        Ok(())
    }

    /// Rename a color inside a group and point it at a new reference.
    pub fn rename_child(
        &mut self,
        group: &str,
        old_key: &str,
        new_key: &str,
        reference: String,
    ) -> Result<(), ThemeError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.key == group && e.value.is_object())
            .ok_or_else(|| ThemeError::UnknownGroup(group.to_owned()))?;
        let ValueNode::Object(children) = &mut entry.value else {
            unreachable!("filtered to objects above");
        };
        let child = children
            .iter_mut()
            .find(|e| e.key == old_key)
            .ok_or_else(|| ThemeError::UnknownColor {
                group: group.to_owned(),
                color: old_key.to_owned(),
            })?;
        child.key = new_key.to_owned();
        child.value = ValueNode::Str(reference);
        Ok(())
    }

    /// Remove a color from a group; an emptied group is removed entirely.
    pub fn remove_child(&mut self, group: &str, key: &str) -> Result<(), ThemeError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.key == group && e.value.is_object())
            .ok_or_else(|| ThemeError::UnknownGroup(group.to_owned()))?;
        let ValueNode::Object(children) = &mut self.entries[position].value else {
            unreachable!("filtered to objects above");
        };
        let child = children
            .iter()
            .position(|e| e.key == key)
            .ok_or_else(|| ThemeError::UnknownColor {
                group: group.to_owned(),
                color: key.to_owned(),
            })?;
        children.remove(child);
        if children.is_empty() {
            self.entries.remove(position);
        }
        Ok(())
    }

    /// Remove a top-level key (group or flat color).
    pub fn remove_group(&mut self, key: &str) -> Result<(), ThemeError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.key == key)
            .ok_or_else(|| ThemeError::UnknownGroup(key.to_owned()))?;
        self.entries.remove(position);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Print
    // -----------------------------------------------------------------------

    /// Re-print the colors object and splice it into `source`, leaving all
    /// surrounding text byte-identical.
    pub fn splice(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() + 64);
        out.push_str(&source[..self.span.0]);
        out.push_str(&self.print());
        out.push_str(&source[self.span.1..]);
        out
    }

    fn print(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_owned();
        }
        let mut out = String::from("{\n");
        for entry in &self.entries {
            self.print_entry(&mut out, entry, 1);
        }
        out.push_str(&self.base_indent);
        out.push('}');
        out
    }

    fn print_entry(&self, out: &mut String, entry: &Entry, depth: usize) {
        let indent = format!("{}{}", self.base_indent, self.unit.repeat(depth));
        out.push_str(&indent);
        out.push_str(&self.format_key(&entry.key));
        out.push_str(": ");
        match &entry.value {
            ValueNode::Str(s) => {
                out.push(self.quote);
                out.push_str(s);
                out.push(self.quote);
            }
            ValueNode::Raw(raw) => out.push_str(raw),
            ValueNode::Object(children) => {
                if children.is_empty() {
                    out.push_str("{}");
                } else {
                    out.push_str("{\n");
                    for child in children {
                        self.print_entry(out, child, depth + 1);
                    }
                    out.push_str(&indent);
                    out.push('}');
                }
            }
        }
        out.push_str(",\n");
    }

    fn format_key(&self, key: &str) -> String {
        if is_bare_key(key) {
            key.to_owned()
        } else {
            format!("{q}{key}{q}", q = self.quote)
        }
    }

    /// Nested `serde_json`-shaped mapping of the tree, for scan output.
    pub fn to_value(&self) -> serde_json::Value {
        entries_to_value(&self.entries)
    }
}

fn entries_to_value(entries: &[Entry]) -> serde_json::Value {
    let map = entries
        .iter()
        .map(|e| (e.key.clone(), node_to_value(&e.value)))
        .collect();
    serde_json::Value::Object(map)
}

fn node_to_value(node: &ValueNode) -> serde_json::Value {
    match node {
        ValueNode::Str(s) | ValueNode::Raw(s) => serde_json::Value::String(s.clone()),
        ValueNode::Object(children) => entries_to_value(children),
    }
}

fn rewrite_references(node: &mut ValueNode, old_prop: &str, new_prop: &str) {
    match node {
        ValueNode::Str(s) | ValueNode::Raw(s) => {
            let exact = format!("var(--{old_prop})");
            let prefix = format!("var(--{old_prop}-");
            if *s == exact {
                *s = format!("var(--{new_prop})");
            } else if let Some(rest) = s.strip_prefix(&prefix) {
                *s = format!("var(--{new_prop}-{rest}");
            }
        }
        ValueNode::Object(children) => {
            for child in children {
                rewrite_references(&mut child.value, old_prop, new_prop);
            }
        }
    }
}

fn is_bare_key(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    // Numeric keys (Tailwind shade scales) print bare too.
    if key.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    let mut bytes = key.bytes();
    let first = bytes.next().unwrap_or_default();
    is_ident_start(first) && bytes.all(is_ident_char)
}

// ---------------------------------------------------------------------------
// Scanning primitives
// ---------------------------------------------------------------------------

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn skip_string(bytes: &[u8], start: usize, end: usize) -> usize {
    let q = bytes[start];
    let mut i = start + 1;
    while i < end {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == q => return i + 1,
            _ => i += 1,
        }
    }
    end
}

fn skip_comment(bytes: &[u8], start: usize, end: usize) -> usize {
    if start + 1 >= end {
        return end;
    }
    match bytes[start + 1] {
        b'/' => {
            let mut i = start + 2;
            while i < end && bytes[i] != b'\n' {
                i += 1;
            }
            i
        }
        b'*' => {
            let mut i = start + 2;
            while i + 1 < end {
                if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                    return i + 2;
                }
                i += 1;
            }
            end
        }
        _ => start + 1,
    }
}

fn is_comment_start(bytes: &[u8], i: usize, end: usize) -> bool {
    bytes[i] == b'/' && i + 1 < end && matches!(bytes[i + 1], b'/' | b'*')
}

/// Find the `{…}` object assigned to `key` within `source[start..end]`.
///
/// Returns the byte indices of the opening and closing braces. With
/// `direct_child_only`, the key must sit at the top nesting level of the
/// scanned region (`start` points just past the parent object's brace).
fn find_key_object(
    source: &str,
    key: &str,
    start: usize,
    end: usize,
    direct_child_only: bool,
) -> Option<(usize, usize)> {
    let bytes = source.as_bytes();
    let mut i = start;
    let mut depth: i32 = 0;
    while i < end {
        let b = bytes[i];
        if is_comment_start(bytes, i, end) {
            i = skip_comment(bytes, i, end);
            continue;
        }
        match b {
            b'\'' | b'"' | b'`' => {
                let string_end = skip_string(bytes, i, end);
                // Quoted keys count as keys too.
                let inner = &source[i + 1..string_end.saturating_sub(1).max(i + 1)];
                if inner == key && (!direct_child_only || depth == 0) {
                    if let Some(found) = object_after_key(bytes, string_end, end) {
                        return Some(found);
                    }
                }
                i = string_end;
            }
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                i += 1;
            }
            b if is_ident_start(b) => {
                let word_start = i;
                while i < end && is_ident_char(bytes[i]) {
                    i += 1;
                }
                if &source[word_start..i] == key && (!direct_child_only || depth == 0) {
                    if let Some(found) = object_after_key(bytes, i, end) {
                        return Some(found);
                    }
                }
            }
            _ => i += 1,
        }
    }
    None
}

fn object_after_key(bytes: &[u8], mut i: usize, end: usize) -> Option<(usize, usize)> {
    i = skip_trivia_bytes(bytes, i, end);
    if i >= end || bytes[i] != b':' {
        return None;
    }
    i = skip_trivia_bytes(bytes, i + 1, end);
    if i >= end || bytes[i] != b'{' {
        return None;
    }
    let close = match_brace(bytes, i, end)?;
    Some((i, close))
}

fn skip_trivia_bytes(bytes: &[u8], mut i: usize, end: usize) -> usize {
    while i < end {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
        } else if is_comment_start(bytes, i, end) {
            i = skip_comment(bytes, i, end);
        } else {
            break;
        }
    }
    i
}

/// Index of the `}` matching the `{` at `open`, honoring strings and comments.
fn match_brace(bytes: &[u8], open: usize, end: usize) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut i = open;
    while i < end {
        if is_comment_start(bytes, i, end) {
            i = skip_comment(bytes, i, end);
            continue;
        }
        match bytes[i] {
            b'\'' | b'"' | b'`' => i = skip_string(bytes, i, end),
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

fn infer_indentation(source: &str, open: usize, close: usize) -> (String, String) {
    let line_start = source[..open].rfind('\n').map_or(0, |p| p + 1);
    let base: String = source[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    let inner = &source[open + 1..close];
    let unit = inner
        .lines()
        .find_map(|line| {
            if line.trim().is_empty() {
                return None;
            }
            let ws: String = line.chars().take_while(|c| c.is_whitespace()).collect();
            ws.strip_prefix(base.as_str())
                .filter(|u| !u.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "  ".to_owned());
    (base, unit)
}

// ---------------------------------------------------------------------------
// Entry parser
// ---------------------------------------------------------------------------

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    end: usize,
    quote: Option<char>,
}

impl<'a> Parser<'a> {
    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn skip_trivia(&mut self) {
        self.pos = skip_trivia_bytes(self.bytes(), self.pos, self.end);
    }

    fn parse_entries(&mut self) -> Result<Vec<Entry>, ThemeError> {
        let mut entries = Vec::new();
        loop {
            self.skip_trivia();
            if self.pos >= self.end {
                break;
            }
            let key = self.parse_key()?;
            self.skip_trivia();
            if self.pos >= self.end || self.bytes()[self.pos] != b':' {
                return Err(ThemeError::ConfigParse(format!(
                    "expected ':' after key '{key}'"
                )));
            }
            self.pos += 1;
            self.skip_trivia();
            let value = self.parse_value()?;
            entries.push(Entry { key, value });
            self.skip_trivia();
            if self.pos < self.end && self.bytes()[self.pos] == b',' {
                self.pos += 1;
            }
        }
        Ok(entries)
    }

    fn parse_key(&mut self) -> Result<String, ThemeError> {
        let bytes = self.bytes();
        match bytes[self.pos] {
            q @ (b'\'' | b'"' | b'`') => {
                let string_end = skip_string(bytes, self.pos, self.end);
                if string_end > self.end || bytes.get(string_end - 1) != Some(&q) {
                    return Err(ThemeError::ConfigParse("unterminated string key".into()));
                }
                let key = self.text[self.pos + 1..string_end - 1].to_owned();
                self.pos = string_end;
                Ok(key)
            }
            b if is_ident_start(b) || b.is_ascii_digit() => {
                let start = self.pos;
                while self.pos < self.end && (is_ident_char(bytes[self.pos])) {
                    self.pos += 1;
                }
                Ok(self.text[start..self.pos].to_owned())
            }
            other => Err(ThemeError::ConfigParse(format!(
                "unexpected character '{}' where a key was expected",
                other as char
            ))),
        }
    }

    fn parse_value(&mut self) -> Result<ValueNode, ThemeError> {
        if self.pos >= self.end {
            return Err(ThemeError::ConfigParse("missing value".into()));
        }
        let bytes = self.bytes();
        match bytes[self.pos] {
            b'{' => {
                let close = match_brace(bytes, self.pos, self.end)
                    .ok_or_else(|| ThemeError::ConfigParse("unbalanced braces".into()))?;
                let mut inner = Parser {
                    text: self.text,
                    pos: self.pos + 1,
                    end: close,
                    quote: self.quote,
                };
                let entries = inner.parse_entries()?;
                self.quote = self.quote.or(inner.quote);
                self.pos = close + 1;
                Ok(ValueNode::Object(entries))
            }
            q @ (b'\'' | b'"' | b'`') => {
                let string_end = skip_string(bytes, self.pos, self.end);
                if bytes.get(string_end - 1) != Some(&q) {
                    return Err(ThemeError::ConfigParse("unterminated string value".into()));
                }
                let value = self.text[self.pos + 1..string_end - 1].to_owned();
                self.quote.get_or_insert(q as char);
                self.pos = string_end;
                Ok(ValueNode::Str(value))
            }
            _ => {
                let start = self.pos;
                let mut depth: i32 = 0;
                while self.pos < self.end {
                    match bytes[self.pos] {
                        b'(' | b'[' | b'{' => {
                            depth += 1;
                            self.pos += 1;
                        }
                        b')' | b']' | b'}' => {
                            depth -= 1;
                            self.pos += 1;
                        }
                        b',' if depth == 0 => break,
                        b'\'' | b'"' | b'`' => {
                            self.pos = skip_string(bytes, self.pos, self.end);
                        }
                        b'/' if is_comment_start(bytes, self.pos, self.end) => {
                            self.pos = skip_comment(bytes, self.pos, self.end);
                        }
                        _ => self.pos += 1,
                    }
                }
                let raw = self.text[start..self.pos].trim();
                if raw.is_empty() {
                    return Err(ThemeError::ConfigParse("missing value".into()));
                }
                Ok(ValueNode::Raw(raw.to_owned()))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./src/**/*.{ts,tsx}'],
  theme: {
    extend: {
      colors: {
        accent: 'var(--accent)',
        brand: {
          DEFAULT: 'var(--brand)',
          muted: 'var(--brand-muted)',
        },
      },
      borderRadius: {
        lg: 'var(--radius)',
      },
    },
  },
  plugins: [],
};
"#;

    #[test]
    fn parses_nested_entries() {
        let block = ColorsBlock::parse(CONFIG).expect("parse");
        assert_eq!(block.entries().len(), 2);
        assert_eq!(
            block.get("accent"),
            Some(&ValueNode::Str("var(--accent)".into()))
        );
        assert_eq!(
            block.get_child("brand", "muted"),
            Some(&ValueNode::Str("var(--brand-muted)".into()))
        );
    }

    #[test]
    fn splice_without_mutation_preserves_content() {
        let block = ColorsBlock::parse(CONFIG).expect("parse");
        assert_eq!(block.splice(CONFIG), CONFIG);
    }

    #[test]
    fn splice_preserves_surrounding_text() {
        let mut block = ColorsBlock::parse(CONFIG).expect("parse");
        block.insert_root("ink", "var(--ink)".into());
        let out = block.splice(CONFIG);
        assert!(out.contains("ink: 'var(--ink)',"));
        assert!(out.contains("content: ['./src/**/*.{ts,tsx}'],"));
        assert!(out.contains("borderRadius: {"));
        assert!(out.contains("plugins: [],"));
    }

    #[test]
    fn double_quote_style_is_detected() {
        let config = CONFIG.replace('\'', "\"");
        let mut block = ColorsBlock::parse(&config).expect("parse");
        block.insert_root("ink", "var(--ink)".into());
        assert!(block.splice(&config).contains(r#"ink: "var(--ink)","#));
    }

    #[test]
    fn missing_colors_is_an_error() {
        let config = "module.exports = { theme: { extend: {} } };";
        assert!(matches!(
            ColorsBlock::parse(config),
            Err(ThemeError::MissingColorsBlock)
        ));
    }

    #[test]
    fn colors_outside_extend_is_not_matched() {
        let config = "module.exports = { colors: { a: '#fff' }, theme: { extend: {} } };";
        assert!(ColorsBlock::parse(config).is_err());
    }

    #[test]
    fn comments_and_strings_do_not_confuse_the_scan() {
        let config = r#"
// theme: { extend: { colors: { decoy: '#000' } } }
const note = "theme: not this one";
module.exports = {
  theme: {
    extend: {
      colors: {
        real: 'var(--real)', // trailing note
      },
    },
  },
};
"#;
        let block = ColorsBlock::parse(config).expect("parse");
        assert_eq!(block.entries().len(), 1);
        assert_eq!(block.entries()[0].key, "real");
    }

    #[test]
    fn numeric_and_quoted_keys_roundtrip() {
        let config = r#"
module.exports = {
  theme: {
    extend: {
      colors: {
        gray: {
          100: 'var(--gray-100)',
          'warm-white': 'var(--gray-warmWhite)',
        },
      },
    },
  },
};
"#;
        let block = ColorsBlock::parse(config).expect("parse");
        let out = block.splice(config);
        assert!(out.contains("100: 'var(--gray-100)',"));
        assert!(out.contains("'warm-white': 'var(--gray-warmWhite)',"));
    }

    #[test]
    fn rename_group_rewrites_nested_references() {
        let mut block = ColorsBlock::parse(CONFIG).expect("parse");
        block
            .rename_group("brand", "identity", "brand", "identity")
            .expect("rename");
        let out = block.splice(CONFIG);
        assert!(out.contains("identity: {"));
        assert!(out.contains("DEFAULT: 'var(--identity)',"));
        assert!(out.contains("muted: 'var(--identity-muted)',"));
        assert!(!out.contains("var(--brand"));
    }

    #[test]
    fn remove_last_child_drops_the_group() {
        let config = CONFIG.replace("muted: 'var(--brand-muted)',\n        ", "");
        let mut block = ColorsBlock::parse(&config).expect("parse");
        block.remove_child("brand", "DEFAULT").expect("remove");
        assert!(block.get("brand").is_none());
    }

    #[test]
    fn unknown_targets_are_checked() {
        let mut block = ColorsBlock::parse(CONFIG).expect("parse");
        assert!(matches!(
            block.insert_child("nope", "x", String::new()),
            Err(ThemeError::UnknownGroup(_))
        ));
        assert!(matches!(
            block.remove_child("brand", "nope"),
            Err(ThemeError::UnknownColor { .. })
        ));
        // A flat color is not a group.
        assert!(matches!(
            block.insert_child("accent", "x", String::new()),
            Err(ThemeError::UnknownGroup(_))
        ));
    }

    #[test]
    fn raw_values_are_preserved_unquoted() {
        let config = r#"
const palette = require('./palette');
module.exports = {
  theme: {
    extend: {
      colors: {
        slate: palette.slate,
        accent: 'var(--accent)',
      },
    },
  },
};
"#;
        let block = ColorsBlock::parse(config).expect("parse");
        assert_eq!(
            block.get("slate"),
            Some(&ValueNode::Raw("palette.slate".into()))
        );
        assert!(block.splice(config).contains("slate: palette.slate,"));
    }

    #[test]
    fn to_value_shapes_nested_mapping() {
        let block = ColorsBlock::parse(CONFIG).expect("parse");
        let value = block.to_value();
        assert_eq!(value["accent"], "var(--accent)");
        assert_eq!(value["brand"]["DEFAULT"], "var(--brand)");
        assert_eq!(value["brand"]["muted"], "var(--brand-muted)");
    }
}
