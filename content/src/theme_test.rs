use super::*;

#[test]
fn hsl_of_primary_and_neutrals() {
    assert_eq!(hex_to_hsl("#0ea5e9").as_deref(), Some("199 89% 48%"));
    assert_eq!(hex_to_hsl("#64748b").as_deref(), Some("215 16% 47%"));
    assert_eq!(hex_to_hsl("#ffffff").as_deref(), Some("0 0% 100%"));
    assert_eq!(hex_to_hsl("#000000").as_deref(), Some("0 0% 0%"));
}

#[test]
fn hsl_of_pure_hues() {
    assert_eq!(hex_to_hsl("#ff0000").as_deref(), Some("0 100% 50%"));
    assert_eq!(hex_to_hsl("#00ff00").as_deref(), Some("120 100% 50%"));
    assert_eq!(hex_to_hsl("#0000ff").as_deref(), Some("240 100% 50%"));
    assert_eq!(hex_to_hsl("#ef4444").as_deref(), Some("0 84% 60%"));
}

#[test]
fn invalid_hex_has_no_hsl() {
    assert_eq!(hex_to_hsl("0ea5e9"), None);
    assert_eq!(hex_to_hsl("#0ea5e"), None);
    assert_eq!(hex_to_hsl("#zzzzzz"), None);
    assert_eq!(hex_to_hsl("#fff").as_deref(), Some("0 0% 100%"));
}

#[test]
fn complete_hex_detection() {
    assert!(is_complete_hex("#12ab9f"));
    assert!(!is_complete_hex("#12ab9"));
    assert!(!is_complete_hex("12ab9f0"));
}

#[test]
fn css_variables_skip_invalid_colors() {
    let mut theme = ThemeColors::default();
    theme.muted = "not a color".to_owned();
    let vars = theme.css_variables();
    assert_eq!(vars.len(), 8);
    assert_eq!(vars[0], ("--primary".to_owned(), "199 89% 48%".to_owned()));
    assert!(vars.iter().all(|(name, _)| name != "--muted"));
}

#[test]
fn export_then_import_preserves_palette() {
    let mut theme = ThemeColors::default();
    theme.accent = "#abcdef".to_owned();
    let text = export_theme(&theme);
    assert!(text.contains("\n  \"accent\": \"#abcdef\""));
    assert_eq!(import_theme(&text), Ok(theme));
}

#[test]
fn import_rejects_non_palette_files() {
    assert!(matches!(import_theme("hello"), Err(ImportError::InvalidFile(_))));
    assert!(matches!(import_theme("42"), Err(ImportError::InvalidFile(_))));
    assert!(matches!(import_theme(r#"{"primary": 5}"#), Err(ImportError::InvalidFile(_))));
}

#[test]
fn import_rejects_json_without_palette_colors() {
    assert!(matches!(import_theme("[]"), Err(ImportError::InvalidFile(_))));
    assert!(matches!(import_theme("{}"), Err(ImportError::InvalidFile(_))));

    let services = serde_json::to_string(&crate::schema::ServicesContent::default()).unwrap();
    assert!(matches!(import_theme(&services), Err(ImportError::InvalidFile(_))));
}

#[test]
fn import_fills_missing_colors_from_default() {
    let theme = import_theme(r##"{"primary":"#111111"}"##).unwrap();
    assert_eq!(theme.primary, "#111111");
    assert_eq!(theme.border, ThemeColors::default().border);
}
