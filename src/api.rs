//! Public conversion API.
//!
//! All entry points are pure functions of their inputs: the text, the lexicon
//! (built once and passed by reference) and a read-only profile snapshot.
//! "Nothing matched" is not an error — the input comes back unchanged and the
//! caller compares strings to decide what to tell the user.

use crate::config::{ConversionProfile, OutputFormat, SearchProfile};
use crate::{CategorySet, Lexicon, Locale, calendar, engine};

/// Convert every recognized quantity+unit occurrence in `text` under the
/// profile's own output format.
///
/// # Example
/// ```
/// use stadion::{ConversionProfile, Lexicon, convert};
///
/// let lexicon = Lexicon::builtin();
/// let out = convert("10 локтей", &lexicon, &ConversionProfile::default());
/// assert_eq!(out, "10 локтей (4.45 м)");
/// ```
pub fn convert(text: &str, lexicon: &Lexicon, profile: &ConversionProfile) -> String {
    convert_with_format(text, lexicon, profile, profile.format)
}

/// Convert like [`convert`], but render under `format` instead of the
/// profile's configured output format.
///
/// This is how the callout command works: the same profile, one-off callout
/// rendering.
pub fn convert_with_format(
    text: &str,
    lexicon: &Lexicon,
    profile: &ConversionProfile,
    format: OutputFormat,
) -> String {
    engine::rewrite(text, lexicon, profile.enabled, |unit, whole, value| {
        let converted = engine::format_fixed(value * unit.scale, profile.precision);
        engine::render_primary(whole, &converted, unit.symbol, format, profile, unit.name)
    })
}

/// Convert under the find-and-convert profile, restricted to
/// `enabled` categories.
///
/// This pipeline never appends monetary equivalents and supports only the
/// parentheses/replace/inline formats.
pub fn convert_with_unit_filter(
    text: &str,
    lexicon: &Lexicon,
    enabled: CategorySet,
    profile: &SearchProfile,
) -> String {
    engine::rewrite(text, lexicon, enabled, |unit, whole, value| {
        let converted = engine::format_fixed(value * unit.scale, profile.precision);
        engine::render_search(whole, &converted, unit.symbol, profile)
    })
}

/// Resolve a Hebrew month name (canonical or variant spelling) to its
/// rendered information block, or `None` when the candidate is not a month
/// in `locale`'s table.
///
/// The candidate is trimmed and lower-cased before lookup.
///
/// # Example
/// ```
/// use stadion::{Locale, resolve_month};
///
/// let block = resolve_month("Nisan", Locale::English).unwrap();
/// assert!(block.contains("NISAN (ABIB)"));
/// assert!(resolve_month("unknowndate", Locale::English).is_none());
/// ```
pub fn resolve_month(candidate: &str, locale: Locale) -> Option<String> {
    let normalized = candidate.trim().to_lowercase();
    let month = calendar::lookup(&normalized, locale)?;
    Some(calendar::render(&normalized, month, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_returns_input_unchanged_without_matches() {
        let lexicon = Lexicon::builtin();
        let text = "no ancient units here, just 3 meters of cable";
        assert_eq!(convert(text, &lexicon, &ConversionProfile::default()), text);
    }

    #[test]
    fn convert_with_format_overrides_profile_format() {
        let lexicon = Lexicon::builtin();
        let profile = ConversionProfile::default();
        let out = convert_with_format("10 локтей", &lexicon, &profile, OutputFormat::Replace);
        assert_eq!(out, "4.45 м");
    }

    #[test]
    fn unit_filter_pipeline_uses_its_own_enabled_set() {
        let lexicon = Lexicon::builtin();
        let profile = SearchProfile::default();
        let out = convert_with_unit_filter("10 cubits", &lexicon, CategorySet::WEIGHT, &profile);
        assert_eq!(out, "10 cubits");
    }

    #[test]
    fn resolve_month_normalizes_its_candidate() {
        let block = resolve_month("  НИСАН ", Locale::Russian).unwrap();
        assert!(block.starts_with("> [!convert] Месяц - НИСАН (АВИВ) - (март — апрель)"));
    }
}
