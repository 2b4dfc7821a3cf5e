//! Configuration snapshots.
//!
//! Persistence is owned by the host; this module only models the read-only
//! snapshot the engine consumes. [`Settings`] mirrors the flat persisted
//! record (every absent field deserializes to its documented default), and the
//! two profile structs are the per-call views the entry points take: the
//! primary [`ConversionProfile`] and the independently configured
//! [`SearchProfile`] used by find-and-convert.

use serde::Deserialize;

use crate::{CategorySet, Locale};

/// Rendering policy for a converted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `original (converted)`
    #[default]
    Parentheses,
    /// `converted`
    Replace,
    /// `original = converted`
    Inline,
    /// A two-line callout block with a bolded `original = converted` line.
    Callout,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name {
            "parentheses" => Some(OutputFormat::Parentheses),
            "replace" => Some(OutputFormat::Replace),
            "inline" => Some(OutputFormat::Inline),
            "callout" => Some(OutputFormat::Callout),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Parentheses => "parentheses",
            OutputFormat::Replace => "replace",
            OutputFormat::Inline => "inline",
            OutputFormat::Callout => "callout",
        }
    }
}

/// Per-category enable flags, in the persisted record's shape.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitToggles {
    pub length: bool,
    pub weight: bool,
    pub volume: bool,
    pub time: bool,
}

impl Default for UnitToggles {
    fn default() -> Self {
        Self { length: true, weight: true, volume: true, time: true }
    }
}

impl UnitToggles {
    pub fn as_set(self) -> CategorySet {
        let mut set = CategorySet::empty();
        if self.length {
            set |= CategorySet::LENGTH;
        }
        if self.weight {
            set |= CategorySet::WEIGHT;
        }
        if self.volume {
            set |= CategorySet::VOLUME;
        }
        if self.time {
            set |= CategorySet::TIME;
        }
        set
    }
}

/// The flat persisted settings record, as loaded by the host.
///
/// Unknown fields are ignored and absent fields take the documented defaults,
/// so older snapshots deserialize cleanly without schema versioning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub enabled_units: UnitToggles,
    pub find_and_convert_units: UnitToggles,
    pub output_format: OutputFormat,
    /// Decimal places in converted values, clamped to 0..=5 when a profile is
    /// built.
    pub precision: u8,
    /// Locale name; unrecognized values fall back to Russian.
    pub interface_lang: String,
    pub bold_converted_values: bool,
    pub find_and_convert_output_format: OutputFormat,
    pub find_and_convert_bold_values: bool,
    pub show_monetary_equivalent: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_units: UnitToggles::default(),
            find_and_convert_units: UnitToggles::default(),
            output_format: OutputFormat::Parentheses,
            precision: 2,
            interface_lang: "Russian".to_string(),
            bold_converted_values: false,
            find_and_convert_output_format: OutputFormat::Parentheses,
            find_and_convert_bold_values: false,
            show_monetary_equivalent: false,
        }
    }
}

impl Settings {
    pub fn locale(&self) -> Locale {
        Locale::from_name(&self.interface_lang).unwrap_or_default()
    }
}

/// The primary conversion policy, consumed read-only per pass.
#[derive(Debug, Clone, Copy)]
pub struct ConversionProfile {
    pub enabled: CategorySet,
    /// Decimal places, 0..=5.
    pub precision: u8,
    pub format: OutputFormat,
    pub bold: bool,
    /// Append monetary equivalents for coin units.
    pub monetary: bool,
    pub locale: Locale,
}

impl Default for ConversionProfile {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl ConversionProfile {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            enabled: settings.enabled_units.as_set(),
            precision: settings.precision.min(5),
            format: settings.output_format,
            bold: settings.bold_converted_values,
            monetary: settings.show_monetary_equivalent,
            locale: settings.locale(),
        }
    }
}

/// The independent find-and-convert policy.
///
/// This is a second profile, not a view of the primary one: its category set,
/// format and bold flag are configured separately. Its formatter contract is
/// reduced to parentheses/replace/inline and it never appends monetary text.
/// The precision value is shared with the primary settings record.
#[derive(Debug, Clone, Copy)]
pub struct SearchProfile {
    pub enabled: CategorySet,
    pub precision: u8,
    pub format: OutputFormat,
    pub bold: bool,
}

impl Default for SearchProfile {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SearchProfile {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            enabled: settings.find_and_convert_units.as_set(),
            precision: settings.precision.min(5),
            format: settings.find_and_convert_output_format,
            bold: settings.find_and_convert_bold_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_yields_documented_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        let profile = ConversionProfile::from_settings(&settings);

        assert_eq!(profile.enabled, CategorySet::all());
        assert_eq!(profile.precision, 2);
        assert_eq!(profile.format, OutputFormat::Parentheses);
        assert!(!profile.bold);
        assert!(!profile.monetary);
        assert_eq!(profile.locale, Locale::Russian);
    }

    #[test]
    fn partial_snapshot_overrides_selected_fields() {
        let json = r#"{
            "precision": 4,
            "interfaceLang": "English",
            "outputFormat": "inline",
            "enabledUnits": { "weight": false },
            "findAndConvertOutputFormat": "replace",
            "showMonetaryEquivalent": true
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        let profile = ConversionProfile::from_settings(&settings);
        assert_eq!(profile.precision, 4);
        assert_eq!(profile.locale, Locale::English);
        assert_eq!(profile.format, OutputFormat::Inline);
        assert!(!profile.enabled.contains(CategorySet::WEIGHT));
        assert!(profile.enabled.contains(CategorySet::LENGTH));
        assert!(profile.monetary);

        let search = SearchProfile::from_settings(&settings);
        assert_eq!(search.format, OutputFormat::Replace);
        assert_eq!(search.enabled, CategorySet::all());
    }

    #[test]
    fn precision_is_clamped_and_unknown_locale_falls_back() {
        let json = r#"{ "precision": 9, "interfaceLang": "Klingon" }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        let profile = ConversionProfile::from_settings(&settings);

        assert_eq!(profile.precision, 5);
        assert_eq!(profile.locale, Locale::Russian);
    }

    #[test]
    fn unknown_snapshot_fields_are_ignored() {
        let json = r#"{ "showOriginal": true, "precision": 1 }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.precision, 1);
    }
}
