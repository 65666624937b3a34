//! The persisted settings record for the picker module.

use serde::{Deserialize, Serialize};

/// Module name keying the picker's settings file on disk.
pub const MODULE_NAME: &str = "picker";

/// Default activation shortcut chord.
pub const DEFAULT_ACTIVATION_SHORTCUT: &str = "Ctrl + Break";

/// Default capacity of the color history.
pub const DEFAULT_COLOR_HISTORY_LIMIT: u32 = 20;

/// Color representation written to the clipboard when a color is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorFormat {
    /// Hex triplet (#RRGGBB)
    #[default]
    Hex,
    /// rgb(r, g, b)
    Rgb,
    /// hsl(h, s%, l%)
    Hsl,
    /// hsv(h, s%, v%)
    Hsv,
    /// cmyk(c%, m%, y%, k%)
    Cmyk,
}

/// The whole-module settings record, serialized as camelCase JSON.
///
/// Instances are ephemeral: constructed fresh on every load or save call and
/// never cached across calls. The two list fields may be `null` on disk;
/// [`PickerSettings::normalize`] replaces nulls with defaults before the
/// record is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerSettings {
    /// Global shortcut chord that activates the picker.
    pub activation_shortcut: String,
    /// Swap the mouse cursor for a crosshair while picking.
    pub change_cursor: bool,
    /// Representation copied to the clipboard on pick.
    pub copied_color_representation: ColorFormat,
    /// Open the editor window after picking.
    pub use_editor: bool,
    /// Maximum number of entries kept in the color history.
    pub color_history_limit: u32,
    /// Recently picked colors, most recent first.
    pub color_history: Option<Vec<String>>,
    /// Color formats shown in the editor.
    pub visible_color_formats: Option<Vec<String>>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            activation_shortcut: DEFAULT_ACTIVATION_SHORTCUT.to_string(),
            change_cursor: true,
            copied_color_representation: ColorFormat::Hex,
            use_editor: true,
            color_history_limit: DEFAULT_COLOR_HISTORY_LIMIT,
            color_history: Some(Vec::new()),
            visible_color_formats: Some(Self::default_visible_formats()),
        }
    }
}

impl PickerSettings {
    /// Formats shown in the editor when the record carries none.
    pub fn default_visible_formats() -> Vec<String> {
        ["HEX", "RGB", "HSL"].iter().map(|s| s.to_string()).collect()
    }

    /// Replace `null` list fields with their defaults.
    ///
    /// Both lists are guaranteed `Some` after this call.
    pub fn normalize(&mut self) {
        if self.color_history.is_none() {
            self.color_history = Some(Vec::new());
        }
        if self.visible_color_formats.is_none() {
            self.visible_color_formats = Some(Self::default_visible_formats());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = PickerSettings::default();
        assert_eq!(settings.activation_shortcut, "Ctrl + Break");
        assert!(settings.change_cursor);
        assert_eq!(settings.copied_color_representation, ColorFormat::Hex);
        assert!(settings.use_editor);
        assert_eq!(settings.color_history_limit, 20);
        assert_eq!(settings.color_history, Some(Vec::new()));
        assert_eq!(
            settings.visible_color_formats,
            Some(PickerSettings::default_visible_formats())
        );
    }

    #[test]
    fn null_lists_deserialize_as_none() {
        let json = r#"{"colorHistory": null, "visibleColorFormats": null}"#;
        let settings: PickerSettings = serde_json::from_str(json).unwrap();
        assert!(settings.color_history.is_none());
        assert!(settings.visible_color_formats.is_none());
    }

    #[test]
    fn normalize_fills_null_lists() {
        let json = r#"{"colorHistory": null, "visibleColorFormats": null}"#;
        let mut settings: PickerSettings = serde_json::from_str(json).unwrap();
        settings.normalize();
        assert_eq!(settings.color_history, Some(Vec::new()));
        assert_eq!(
            settings.visible_color_formats,
            Some(PickerSettings::default_visible_formats())
        );
    }

    #[test]
    fn normalize_preserves_populated_lists() {
        let mut settings = PickerSettings {
            color_history: Some(vec!["#112233".to_string()]),
            visible_color_formats: Some(vec!["CMYK".to_string()]),
            ..Default::default()
        };
        settings.normalize();
        assert_eq!(settings.color_history, Some(vec!["#112233".to_string()]));
        assert_eq!(
            settings.visible_color_formats,
            Some(vec!["CMYK".to_string()])
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: PickerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, PickerSettings::default());
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let json = serde_json::to_string(&PickerSettings::default()).unwrap();
        assert!(json.contains("\"activationShortcut\""));
        assert!(json.contains("\"changeCursor\""));
        assert!(json.contains("\"copiedColorRepresentation\""));
        assert!(json.contains("\"colorHistoryLimit\""));
        assert!(json.contains("\"visibleColorFormats\""));
    }

    #[test]
    fn color_format_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&ColorFormat::Hsl).unwrap(), "\"HSL\"");
        let parsed: ColorFormat = serde_json::from_str("\"CMYK\"").unwrap();
        assert_eq!(parsed, ColorFormat::Cmyk);
    }
}
