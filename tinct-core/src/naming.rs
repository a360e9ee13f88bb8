//! Naming conventions shared by the config tree, the stylesheet, and the
//! class names derived from both.
//!
//! A logical color is addressed everywhere by one property name:
//! `camelCase(name)` for a root-level color, `<group>-camelCase(name)` for a
//! color inside a group. The key literally named `DEFAULT` is Tailwind's
//! convention for a group's unqualified color: `group` and `group-DEFAULT`
//! resolve to the same property `--group`.

use crate::types::PropertyName;

/// The Tailwind key naming a group's unqualified color.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Convert a user-facing color name to the camelCase form used as a config
/// key and as a property-name segment.
///
/// Word boundaries are spaces, hyphens and underscores. Interior
/// capitalization of each word is preserved (`"SpaceGray"` → `"spaceGray"`),
/// except that an all-caps word is folded to lowercase first
/// (`"WARM RED"` → `"warmRed"`).
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut first_word = true;
    for word in name.split(|c: char| c == ' ' || c == '-' || c == '_') {
        if word.is_empty() {
            continue;
        }
        let folded;
        let word = if word.len() > 1 && word.chars().all(|c| !c.is_lowercase()) {
            folded = word.to_lowercase();
            folded.as_str()
        } else {
            word
        };
        let mut chars = word.chars();
        let head = chars.next().unwrap_or_default();
        if first_word {
            out.extend(head.to_lowercase());
            first_word = false;
        } else {
            out.extend(head.to_uppercase());
        }
        out.push_str(chars.as_str());
    }
    out
}

/// Compose the custom-property name for a color.
///
/// `camelCase(name)` when there is no parent group, otherwise
/// `<parent>-camelCase(name)`. The parent segment is used verbatim — it is an
/// existing key, not a user-facing name.
pub fn property_name(name: &str, parent: Option<&str>) -> PropertyName {
    match parent {
        Some(group) => PropertyName(format!("{group}-{}", camel_case(name))),
        None => PropertyName(camel_case(name)),
    }
}

/// The property a `(group, child-key)` pair resolves to.
///
/// A `DEFAULT` child resolves to the bare group property `--group`, every
/// other child to `--group-key`.
pub fn child_property(group: &str, key: &str) -> PropertyName {
    if key == DEFAULT_KEY {
        PropertyName(group.to_owned())
    } else {
        PropertyName(format!("{group}-{key}"))
    }
}

/// Split an original property name on its *first* hyphen into
/// `(parent_key, key_name)`.
///
/// `"brand-accent"` → `("brand", Some("accent"))`; `"brand"` →
/// `("brand", None)`. A name with further hyphens keeps them in the key:
/// `"brand-accent-soft"` → `("brand", Some("accent-soft"))`.
pub fn split_property(original: &str) -> (&str, Option<&str>) {
    match original.split_once('-') {
        Some((parent, key)) => (parent, Some(key)),
        None => (original, None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("accent", "accent")]
    #[case("accent2", "accent2")]
    #[case("space gray", "spaceGray")]
    #[case("space-gray", "spaceGray")]
    #[case("space_gray", "spaceGray")]
    #[case("SpaceGray", "spaceGray")]
    #[case("warm  red", "warmRed")]
    #[case("WARM-RED", "warmRed")]
    #[case("", "")]
    fn camel_case_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_case(input), expected);
    }

    #[rstest]
    #[case("accent", None, "accent")]
    #[case("soft red", None, "softRed")]
    #[case("accent", Some("brand"), "brand-accent")]
    #[case("soft red", Some("brand"), "brand-softRed")]
    fn property_name_cases(
        #[case] name: &str,
        #[case] parent: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(property_name(name, parent).0, expected);
    }

    #[test]
    fn split_on_first_hyphen_only() {
        assert_eq!(split_property("brand"), ("brand", None));
        assert_eq!(split_property("brand-accent"), ("brand", Some("accent")));
        assert_eq!(
            split_property("brand-accent-soft"),
            ("brand", Some("accent-soft"))
        );
    }

    #[test]
    fn default_child_resolves_to_bare_group() {
        assert_eq!(child_property("brand", DEFAULT_KEY).0, "brand");
        assert_eq!(child_property("brand", "accent").0, "brand-accent");
    }
}
