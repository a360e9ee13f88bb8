//! Mutation tests over a realistic config/stylesheet pair.
//!
//! Each test works on fresh fixture text — no shared state.

use std::path::PathBuf;

use rstest::rstest;
use tinct_core::types::{ColorUpdate, ThemeScope};
use tinct_theme::{create, delete, rename, ThemeError};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./src/**/*.{ts,tsx}'],
  theme: {
    extend: {
      colors: {
        accent: 'var(--accent)',
        brand: {
          DEFAULT: 'var(--brand)',
          accent: 'var(--brand-accent)',
        },
        mono: {
          ink: 'var(--mono-ink)',
        },
      },
    },
  },
  plugins: [],
};
"#;

const SHEET: &str = r#"@tailwind base;

:root {
  --accent: #f59e0b;
  --brand: #1d4ed8;
  --brand-accent: #60a5fa;
  --mono-ink: #111827;
}

.dark {
  --accent: #b45309;
  --brand: #60a5fa;
  --brand-accent: #1e3a8a;
  --mono-ink: #e5e7eb;
}
"#;

fn fixture() -> ColorUpdate {
    ColorUpdate {
        config_path: PathBuf::from("tailwind.config.ts"),
        css_path: PathBuf::from("app/globals.css"),
        config_content: CONFIG.to_owned(),
        css_content: SHEET.to_owned(),
    }
}

fn root_value(css: &str, name: &str) -> Option<String> {
    tinct_theme::css::declaration_value(css, ThemeScope::Root, name)
}

fn dark_value(css: &str, name: &str) -> Option<String> {
    tinct_theme::css::declaration_value(css, ThemeScope::Dark, name)
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_root_color() {
    let update = fixture();
    let m = create(&update, "ink", "#00ff00", None).expect("create");

    assert!(m.config_content.contains("ink: 'var(--ink)',"));
    assert_eq!(root_value(&m.css_content, "ink").as_deref(), Some("#00ff00"));
    assert_eq!(dark_value(&m.css_content, "ink").as_deref(), Some("#00ff00"));
    assert!(m.class_replacement.is_none());
}

#[test]
fn create_grouped_color() {
    let update = fixture();
    let m = create(&update, "soft blue", "#93c5fd", Some("brand")).expect("create");

    assert!(m.config_content.contains("softBlue: 'var(--brand-softBlue)',"));
    assert_eq!(
        root_value(&m.css_content, "brand-softBlue").as_deref(),
        Some("#93c5fd")
    );
    assert_eq!(
        dark_value(&m.css_content, "brand-softBlue").as_deref(),
        Some("#93c5fd")
    );
}

#[test]
fn create_under_unknown_parent_is_checked() {
    let update = fixture();
    let err = create(&update, "x", "#fff", Some("nonexistent")).expect_err("must fail");
    assert!(matches!(err, ThemeError::UnknownGroup(_)));
}

#[test]
fn create_without_dark_scope_is_checked() {
    let mut update = fixture();
    update.css_content = ":root {\n  --accent: #fff;\n}\n".to_owned();
    let err = create(&update, "x", "#fff", None).expect_err("must fail");
    assert!(matches!(err, ThemeError::MissingScope { selector: ".dark" }));
}

// ---------------------------------------------------------------------------
// Rename / recolor
// ---------------------------------------------------------------------------

#[test]
fn rename_child_updates_all_three_representations() {
    let update = fixture();
    let m = rename(&update, "brand-accent", "accent2", None, None).expect("rename");

    // Config: key and reference replaced.
    assert!(m.config_content.contains("accent2: 'var(--brand-accent2)',"));
    assert!(!m.config_content.contains("'var(--brand-accent)'"));

    // Stylesheet: old declaration removed, new one carries the old value,
    // per scope.
    assert!(root_value(&m.css_content, "brand-accent").is_none());
    assert!(dark_value(&m.css_content, "brand-accent").is_none());
    assert_eq!(
        root_value(&m.css_content, "brand-accent2").as_deref(),
        Some("#60a5fa")
    );
    assert_eq!(
        dark_value(&m.css_content, "brand-accent2").as_deref(),
        Some("#1e3a8a")
    );

    // Class rename to propagate.
    let rep = m.class_replacement.expect("replacement");
    assert_eq!(rep.old_class, "brand-accent");
    assert_eq!(rep.new_class, "brand-accent2");
}

#[test]
fn rename_default_variant_targets_the_bare_group_property() {
    let update = fixture();
    let m = rename(&update, "brand-DEFAULT", "identity", None, None).expect("rename");

    // Operates on --brand, never on --brand-DEFAULT.
    assert!(root_value(&m.css_content, "brand").is_none());
    assert_eq!(
        root_value(&m.css_content, "identity").as_deref(),
        Some("#1d4ed8")
    );
    // Derived variable migrates with its value.
    assert_eq!(
        root_value(&m.css_content, "identity-accent").as_deref(),
        Some("#60a5fa")
    );
    assert!(root_value(&m.css_content, "brand-accent").is_none());

    // Config group renamed with nested references rewritten.
    assert!(m.config_content.contains("identity: {"));
    assert!(m.config_content.contains("DEFAULT: 'var(--identity)',"));
    assert!(m.config_content.contains("accent: 'var(--identity-accent)',"));

    let rep = m.class_replacement.expect("replacement");
    assert_eq!(rep.old_class, "brand");
    assert_eq!(rep.new_class, "identity");
}

#[test]
fn rename_group_is_equivalent_to_renaming_its_default() {
    let update = fixture();
    let via_group = rename(&update, "brand", "identity", None, None).expect("rename");
    let via_default = rename(&update, "brand-DEFAULT", "identity", None, None).expect("rename");
    assert_eq!(via_group, via_default);
}

#[test]
fn rename_child_to_default_takes_the_bare_property() {
    let update = fixture();
    let m = rename(&update, "mono-ink", "DEFAULT", None, None).expect("rename");

    assert!(m.config_content.contains("DEFAULT: 'var(--mono)',"));
    assert_eq!(root_value(&m.css_content, "mono").as_deref(), Some("#111827"));
    assert!(root_value(&m.css_content, "mono-ink").is_none());
}

#[test]
fn recolor_with_scope_filter_touches_one_scope() {
    let update = fixture();
    let m = rename(
        &update,
        "brand-accent",
        "accent",
        Some("#ff0000"),
        Some(ThemeScope::Dark),
    )
    .expect("recolor");

    assert_eq!(
        dark_value(&m.css_content, "brand-accent").as_deref(),
        Some("#ff0000")
    );
    assert_eq!(
        root_value(&m.css_content, "brand-accent").as_deref(),
        Some("#60a5fa")
    );
    // A pure recolor never renames classes or touches the config.
    assert!(m.class_replacement.is_none());
    assert_eq!(m.config_content, CONFIG);
}

#[test]
fn recolor_without_filter_touches_both_scopes() {
    let update = fixture();
    let m = rename(&update, "accent", "accent", Some("#ff0000"), None).expect("recolor");
    assert_eq!(root_value(&m.css_content, "accent").as_deref(), Some("#ff0000"));
    assert_eq!(dark_value(&m.css_content, "accent").as_deref(), Some("#ff0000"));
}

#[test]
fn rename_and_recolor_together() {
    let update = fixture();
    let m = rename(&update, "brand-accent", "sky", Some("#0ea5e9"), None).expect("rename");

    assert_eq!(root_value(&m.css_content, "brand-sky").as_deref(), Some("#0ea5e9"));
    assert_eq!(dark_value(&m.css_content, "brand-sky").as_deref(), Some("#0ea5e9"));
    assert!(m.config_content.contains("sky: 'var(--brand-sky)',"));
}

#[rstest]
#[case("brand-accent", "accent")]
#[case("brand", "brand")]
#[case("brand-DEFAULT", "brand")]
#[case("accent", "accent")]
fn noop_rename_leaves_files_byte_identical(#[case] original: &str, #[case] new_name: &str) {
    let update = fixture();
    let m = rename(&update, original, new_name, None, None).expect("rename");
    assert!(m.is_noop(&update));
    assert_eq!(m.config_content, CONFIG);
    assert_eq!(m.css_content, SHEET);
    assert!(m.class_replacement.is_none());
}

#[test]
fn noop_recolor_with_current_value_is_untouched() {
    let update = fixture();
    let m = rename(&update, "accent", "accent", Some("#f59e0b"), Some(ThemeScope::Root))
        .expect("rename");
    assert!(m.is_noop(&update));
}

#[test]
fn rename_unknown_target_is_checked() {
    let update = fixture();
    assert!(matches!(
        rename(&update, "ghost", "spirit", None, None),
        Err(ThemeError::UnknownGroup(_))
    ));
    assert!(matches!(
        rename(&update, "brand-ghost", "spirit", None, None),
        Err(ThemeError::UnknownColor { .. })
    ));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_last_color_removes_the_group() {
    let update = fixture();
    let m = delete(&update, "mono", Some("ink")).expect("delete");

    assert!(!m.config_content.contains("mono"));
    assert!(root_value(&m.css_content, "mono-ink").is_none());
    assert!(dark_value(&m.css_content, "mono-ink").is_none());
}

#[test]
fn delete_one_color_keeps_the_rest_of_the_group() {
    let update = fixture();
    let m = delete(&update, "brand", Some("accent")).expect("delete");

    assert!(m.config_content.contains("brand: {"));
    assert!(m.config_content.contains("DEFAULT: 'var(--brand)',"));
    assert!(!m.config_content.contains("var(--brand-accent)"));
    assert!(root_value(&m.css_content, "brand-accent").is_none());
    assert_eq!(root_value(&m.css_content, "brand").as_deref(), Some("#1d4ed8"));
}

#[test]
fn delete_group_removes_every_prefixed_line() {
    let update = fixture();
    let m = delete(&update, "brand", None).expect("delete");

    assert!(!m.config_content.contains("brand"));
    // Prefix removal takes the derived declarations with the group.
    assert!(root_value(&m.css_content, "brand").is_none());
    assert!(root_value(&m.css_content, "brand-accent").is_none());
    assert!(dark_value(&m.css_content, "brand-accent").is_none());
    // Unrelated declarations survive.
    assert_eq!(root_value(&m.css_content, "accent").as_deref(), Some("#f59e0b"));
}

#[test]
fn delete_unknown_target_is_checked() {
    let update = fixture();
    assert!(matches!(
        delete(&update, "ghost", None),
        Err(ThemeError::UnknownGroup(_))
    ));
    assert!(matches!(
        delete(&update, "brand", Some("ghost")),
        Err(ThemeError::UnknownColor { .. })
    ));
}
