//! Create / rename-recolor / delete mutations over a loaded file pair.
//!
//! Each operation is a pure transformation: it takes the [`ColorUpdate`]
//! texts and returns new texts (plus an optional class rename to propagate).
//! Every structural precondition is checked before any output is produced,
//! so a failed operation can never leave the config and stylesheet out of
//! sync with each other.

use tinct_core::naming::{self, DEFAULT_KEY};
use tinct_core::types::{ClassReplacement, ColorUpdate, PropertyName, ThemeScope};

use crate::css;
use crate::error::ThemeError;
use crate::object::{ColorsBlock, ValueNode};

/// The result of a mutation: new file contents and, when a referenceable
/// key changed, the class rename to fan out into project sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorsMutation {
    pub config_content: String,
    pub css_content: String,
    pub class_replacement: Option<ClassReplacement>,
}

impl ColorsMutation {
    fn unchanged(update: &ColorUpdate) -> Self {
        Self {
            config_content: update.config_content.clone(),
            css_content: update.css_content.clone(),
            class_replacement: None,
        }
    }

    /// True when the mutation leaves both files byte-identical.
    pub fn is_noop(&self, update: &ColorUpdate) -> bool {
        self.config_content == update.config_content && self.css_content == update.css_content
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Add a new color.
///
/// The config gains a `var(--prop)` reference (top-level, or inside
/// `parent` when given); both stylesheet scopes gain a declaration with the
/// literal value — theme scoping affects updates only, never creation.
pub fn create(
    update: &ColorUpdate,
    name: &str,
    value: &str,
    parent: Option<&str>,
) -> Result<ColorsMutation, ThemeError> {
    let mut block = ColorsBlock::parse(&update.config_content)?;
    let prop = naming::property_name(name, parent);
    let key = naming::camel_case(name);
    match parent {
        Some(group) => block.insert_child(group, &key, prop.reference())?,
        None => block.insert_root(&key, prop.reference()),
    }

    let css_content =
        css::append_declaration(&update.css_content, ThemeScope::Root, &prop.0, value)?;
    let css_content = css::append_declaration(&css_content, ThemeScope::Dark, &prop.0, value)?;

    Ok(ColorsMutation {
        config_content: block.splice(&update.config_content),
        css_content,
        class_replacement: None,
    })
}

// ---------------------------------------------------------------------------
// Rename / recolor
// ---------------------------------------------------------------------------

/// Rename a color (and/or give it a new value).
///
/// `original` is a property name of shape `group` or `group-variant`;
/// `group-DEFAULT` denotes the same property as `group`. With a `scope`
/// filter the new value applies to that scope only; without one it applies
/// to both. When nothing actually changes the operation succeeds and both
/// files stay byte-identical.
pub fn rename(
    update: &ColorUpdate,
    original: &str,
    new_name: &str,
    new_value: Option<&str>,
    scope: Option<ThemeScope>,
) -> Result<ColorsMutation, ThemeError> {
    let (parent_raw, key_raw) = naming::split_property(original);
    let (parent_key, key_name) = match key_raw {
        Some(k) if k == DEFAULT_KEY => (parent_raw, None),
        other => (parent_raw, other),
    };

    let old_prop = match key_name {
        Some(k) => naming::child_property(parent_key, k),
        None => PropertyName::from(parent_key),
    };
    let new_prop = new_property(parent_key, key_name, new_name, &old_prop);
    let key_changed = new_prop != old_prop;

    // Structural precondition: the target must exist in the config tree.
    let mut block = ColorsBlock::parse(&update.config_content)?;
    match key_name {
        None => {
            if block.get(parent_key).is_none() {
                return Err(ThemeError::UnknownGroup(parent_key.to_owned()));
            }
        }
        Some(k) => match block.get(parent_key) {
            Some(ValueNode::Object(_)) => {
                if block.get_child(parent_key, k).is_none() {
                    return Err(ThemeError::UnknownColor {
                        group: parent_key.to_owned(),
                        color: k.to_owned(),
                    });
                }
            }
            _ => return Err(ThemeError::UnknownGroup(parent_key.to_owned())),
        },
    }

    let value_changed = new_value.is_some_and(|v| {
        ThemeScope::all().iter().any(|&s| {
            scope.map_or(true, |f| f == s)
                && css::declaration_value(&update.css_content, s, &old_prop.0)
                    .is_some_and(|existing| existing != v)
        })
    });
    if !key_changed && !value_changed {
        tracing::debug!(
            "rename of '{original}' changes neither key nor value; leaving files untouched"
        );
        return Ok(ColorsMutation::unchanged(update));
    }

    let config_content = if key_changed {
        match key_name {
            None => {
                let new_key = tree_key(new_name, parent_key);
                block.rename_group(parent_key, &new_key, &old_prop.0, &new_prop.0)?;
            }
            Some(k) => {
                let new_key = tree_key(new_name, k);
                block.rename_child(parent_key, k, &new_key, new_prop.reference())?;
            }
        }
        block.splice(&update.config_content)
    } else {
        update.config_content.clone()
    };

    let mut css_content = update.css_content.clone();
    for s in ThemeScope::all() {
        // The scope filter selects where a new value lands; other scopes
        // keep their old value.
        let recolor_value = match scope {
            Some(f) if f != s => None,
            _ => new_value,
        };
        let existing = css::declaration_value(&css_content, s, &old_prop.0);
        if key_changed {
            match existing {
                Some(old_value) => {
                    let value = recolor_value.map_or(old_value, str::to_owned);
                    css_content =
                        css::rename_declaration(&css_content, s, &old_prop.0, &new_prop.0, &value)?;
                }
                None => {
                    tracing::debug!("no '--{old_prop}' declaration in the {s} scope; skipping")
                }
            }
            // Derived variables (`--old-*`) follow the new prefix, values
            // preserved.
            css_content = css::migrate_prefix(&css_content, s, &old_prop.0, &new_prop.0);
        } else if let Some(value) = recolor_value {
            if existing.is_some() {
                css_content = css::set_declaration(&css_content, s, &old_prop.0, value);
            } else {
                tracing::debug!(
                    "no '--{old_prop}' declaration in the {s} scope; skipping recolor"
                );
            }
        }
    }

    let class_replacement = key_changed.then(|| ClassReplacement {
        old_class: old_prop.0.clone(),
        new_class: new_prop.0.clone(),
    });

    Ok(ColorsMutation {
        config_content,
        css_content,
        class_replacement,
    })
}

/// The property a rename targets, mirroring the create naming rule. An
/// unchanged name reuses the original property exactly; a child renamed to
/// `DEFAULT` takes the bare group property.
fn new_property(
    parent_key: &str,
    key_name: Option<&str>,
    new_name: &str,
    old_prop: &PropertyName,
) -> PropertyName {
    match key_name {
        Some(k) if new_name == k => old_prop.clone(),
        Some(_) if new_name == DEFAULT_KEY => PropertyName::from(parent_key),
        Some(_) => naming::property_name(new_name, Some(parent_key)),
        None if new_name == parent_key => old_prop.clone(),
        None => naming::property_name(new_name, None),
    }
}

/// The config-tree key for a renamed entry.
fn tree_key(new_name: &str, unchanged: &str) -> String {
    if new_name == unchanged || new_name == DEFAULT_KEY {
        new_name.to_owned()
    } else {
        naming::camel_case(new_name)
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Remove a color from a group, or a whole group.
///
/// Removing a group's last color removes the group key too. The stylesheet
/// side is raw line-prefix removal (`--group-color` with a color name,
/// `--group` without), which also takes any other property sharing the
/// prefix.
pub fn delete(
    update: &ColorUpdate,
    group: &str,
    color: Option<&str>,
) -> Result<ColorsMutation, ThemeError> {
    let mut block = ColorsBlock::parse(&update.config_content)?;
    let prefix = match color {
        Some(c) => {
            block.remove_child(group, c)?;
            format!("{group}-{c}")
        }
        None => {
            block.remove_group(group)?;
            group.to_owned()
        }
    };
    Ok(ColorsMutation {
        config_content: block.splice(&update.config_content),
        css_content: css::remove_lines_with_prefix(&update.css_content, &prefix),
        class_replacement: None,
    })
}
