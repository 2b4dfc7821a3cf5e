//! Output-format policies and the monetary augmentation.

use crate::config::{ConversionProfile, OutputFormat, SearchProfile};
use crate::engine::matcher::parse_number;
use crate::lexicon::monetary;
use crate::locale::{group_thousands, work_duration};
use crate::{Locale, MonetaryEquivalent};

/// Render a converted match for the primary pipeline.
///
/// `unit_name` is the matched unit's canonical name, used for the monetary
/// lookup when the profile asks for it.
pub(crate) fn render_primary(
    original: &str,
    value: &str,
    symbol: &str,
    format: OutputFormat,
    profile: &ConversionProfile,
    unit_name: &str,
) -> String {
    let mut converted = converted_part(value, symbol, profile.bold);

    if profile.monetary {
        if let Some(coin) = monetary::lookup(unit_name) {
            converted.push_str(&monetary_suffix(original, coin, profile.locale));
        }
    }

    match format {
        OutputFormat::Parentheses => format!("{original} ({converted})"),
        OutputFormat::Replace => converted,
        OutputFormat::Inline => format!("{original} = {converted}"),
        OutputFormat::Callout => format!(
            "> [!convert] {}\n> **{original} = {converted}**",
            profile.locale.notices().callout_units_title
        ),
    }
}

/// Render a converted match for the find-and-convert pipeline.
///
/// The reduced contract: parentheses, replace or inline, no monetary text.
/// Anything else falls back to parentheses.
pub(crate) fn render_search(original: &str, value: &str, symbol: &str, profile: &SearchProfile) -> String {
    let converted = converted_part(value, symbol, profile.bold);

    match profile.format {
        OutputFormat::Replace => converted,
        OutputFormat::Inline => format!("{original} = {converted}"),
        OutputFormat::Parentheses | OutputFormat::Callout => format!("{original} ({converted})"),
    }
}

fn converted_part(value: &str, symbol: &str, bold: bool) -> String {
    if bold { format!("**{value} {symbol}**") } else { format!("{value} {symbol}") }
}

/// Build the ` ≈ work-duration ≈ amount currency (metal)` suffix.
///
/// The quantity is re-parsed from the original matched substring; when no
/// numeric literal can be read the quantity is `1`, a documented fallback.
fn monetary_suffix(original: &str, coin: &MonetaryEquivalent, locale: Locale) -> String {
    let quantity = regex!(r"\d+(?:[.,]\d+)?")
        .find(original)
        .and_then(|m| parse_number(m.as_str()))
        .unwrap_or(1.0);

    let total = (quantity * coin.modern_value).round() as i64;
    format!(
        " ≈ {} ≈ {} {} ({})",
        work_duration(quantity * coin.work_days, locale),
        group_thousands(total, locale),
        coin.currency,
        coin.metal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monetary_suffix_reads_quantity_from_match() {
        let coin = monetary::lookup("shekel").unwrap();
        let suffix = monetary_suffix("2 shekels", coin, Locale::English);
        assert_eq!(suffix, " ≈ 1 work day ≈ 50 dollars (silver)");
    }

    #[test]
    fn monetary_suffix_falls_back_to_one_unit() {
        let coin = monetary::lookup("shekel").unwrap();
        let suffix = monetary_suffix("a lone shekel", coin, Locale::English);
        assert_eq!(suffix, " ≈ 4.0 work hours ≈ 25 dollars (silver)");
    }

    #[test]
    fn search_formatter_never_renders_callouts() {
        let profile =
            SearchProfile { format: OutputFormat::Callout, ..SearchProfile::default() };
        let out = render_search("5 локтей", "2.23", "м", &profile);
        assert_eq!(out, "5 локтей (2.23 м)");
    }
}
