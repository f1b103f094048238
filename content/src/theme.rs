//! Theme palette, hex→HSL conversion, and theme file import/export.
//!
//! SYSTEM CONTEXT
//! ==============
//! The palette is stored as hex strings and applied to the document as CSS
//! custom properties (`--primary: 199 89% 48%`), the format the stylesheet
//! consumes through `hsl(var(--primary))`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};

/// File name offered when exporting the palette.
pub const EXPORT_FILE_NAME: &str = "theme-colors.json";

/// Swatches offered by the color field quick picker.
pub const PRESET_COLORS: [&str; 15] = [
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", "#FFA500",
    "#800080", "#FFC0CB", "#A52A2A", "#808080", "#000080", "#008000",
];

/// Site color palette as `#rrggbb` strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub card: String,
    pub border: String,
    pub destructive: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#0ea5e9".to_owned(),
            secondary: "#64748b".to_owned(),
            accent: "#f1f5f9".to_owned(),
            background: "#ffffff".to_owned(),
            foreground: "#0f172a".to_owned(),
            muted: "#f8fafc".to_owned(),
            card: "#ffffff".to_owned(),
            border: "#e2e8f0".to_owned(),
            destructive: "#ef4444".to_owned(),
        }
    }
}

impl Content for ThemeColors {
    const DOMAIN: ContentDomain = ContentDomain::Theme;
}

impl ThemeColors {
    /// `(name, hex)` pairs in palette order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("muted", &self.muted),
            ("card", &self.card),
            ("border", &self.border),
            ("destructive", &self.destructive),
        ]
    }

    /// CSS custom properties for the palette. Colors that are not valid hex
    /// are left out so the stylesheet default stays in effect.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        self.entries()
            .into_iter()
            .filter_map(|(name, hex)| hex_to_hsl(hex).map(|hsl| (format!("--{name}"), hsl)))
            .collect()
    }
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Convert a hex color to the `"H S% L%"` triple used by the stylesheet.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<String> {
    let (r8, g8, b8) = parse_hex_rgb(hex)?;
    let max8 = r8.max(g8).max(b8);
    let min8 = r8.min(g8).min(b8);

    let r = f64::from(r8) / 255.0;
    let g = f64::from(g8) / 255.0;
    let b = f64::from(b8) / 255.0;
    let max = f64::from(max8) / 255.0;
    let min = f64::from(min8) / 255.0;
    let l = (max + min) / 2.0;

    let (h, s) = if max8 == min8 {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max8 == r8 {
            (g - b) / d + if g8 < b8 { 6.0 } else { 0.0 }
        } else if max8 == g8 {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Some(format!("{} {}% {}%", (h * 360.0).round(), (s * 100.0).round(), (l * 100.0).round()))
}

/// Whether free-typed text is a complete `#rrggbb` entry.
#[must_use]
pub fn is_complete_hex(input: &str) -> bool {
    input.starts_with('#') && input.chars().count() == 7
}

/// Theme import failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// The file is not JSON or not a palette object.
    #[error("invalid theme file: {0}")]
    InvalidFile(String),
}

/// Serialize the palette for download (2-space indented JSON).
#[must_use]
pub fn export_theme(theme: &ThemeColors) -> String {
    serde_json::to_string_pretty(theme).unwrap_or_default()
}

/// Parse an operator-supplied theme file.
///
/// # Errors
///
/// Returns [`ImportError::InvalidFile`] when the text is not a JSON object
/// naming at least one palette color; the caller's draft is left untouched.
/// Colors the file leaves out take their default.
pub fn import_theme(raw: &str) -> Result<ThemeColors, ImportError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| ImportError::InvalidFile(e.to_string()))?;
    let Some(object) = value.as_object() else {
        return Err(ImportError::InvalidFile("expected a JSON object".to_owned()));
    };
    let defaults = ThemeColors::default();
    if !defaults.entries().iter().any(|(name, _)| object.contains_key(*name)) {
        return Err(ImportError::InvalidFile("no palette colors found".to_owned()));
    }
    serde_json::from_value(value).map_err(|e| ImportError::InvalidFile(e.to_string()))
}
