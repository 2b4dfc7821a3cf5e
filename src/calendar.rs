//! Hebrew calendar month metadata and rendering.
//!
//! One static table per locale, in authored definition order. Lookup is a
//! two-step scan: exact canonical key first, then a linear pass over variant
//! spellings; first hit wins. Months that carry two historical names (Nisan
//! and Abib, Tishri and Ethanim, Heshvan and Bul, Iyyar and Ziv) are authored
//! as two independently complete entries that reference each other through
//! `alternative_name`.

use crate::Locale;

mod english;
mod russian;
mod spanish;

/// One month entry of a locale's calendar table.
#[derive(Debug, Clone, Copy)]
pub struct CalendarMonth {
    /// Lower-case canonical month name (the table key).
    pub name: &'static str,
    /// The month's other historical name, where one exists.
    pub alternative_name: Option<&'static str>,
    /// Modern month range, e.g. "March—April".
    pub modern_months: &'static str,
    /// Pre-formatted event lines; may be empty.
    pub events: &'static [&'static str],
    /// Seasonal/weather notes.
    pub conditions: &'static str,
    /// Crops or agricultural activity; empty when the month has none.
    pub crops: &'static str,
    /// Alternate spellings that also identify this entry.
    pub variants: &'static [&'static str],
}

fn table(locale: Locale) -> &'static [CalendarMonth] {
    match locale {
        Locale::Russian => russian::MONTHS,
        Locale::English => english::MONTHS,
        Locale::Spanish => spanish::MONTHS,
    }
}

/// Find the entry for a trimmed, lower-cased candidate in a locale's table.
pub(crate) fn lookup(candidate: &str, locale: Locale) -> Option<&'static CalendarMonth> {
    let months = table(locale);
    months
        .iter()
        .find(|month| month.name == candidate)
        .or_else(|| months.iter().find(|month| month.variants.contains(&candidate)))
}

/// Render the information block for a matched month.
///
/// The header title is the candidate as the user wrote it (uppercased), not
/// the canonical key, so a variant spelling stays recognizable in the output.
pub(crate) fn render(candidate: &str, month: &CalendarMonth, locale: Locale) -> String {
    let labels = locale.calendar_labels();
    let title = candidate.to_uppercase();
    let alternative = match month.alternative_name {
        Some(name) => format!(" ({})", name.to_uppercase()),
        None => String::new(),
    };

    let mut block =
        format!("> [!convert] {} - {title}{alternative} - ({})\n", labels.month, month.modern_months);

    if !month.events.is_empty() {
        block.push_str(&format!("> **{}**\n", labels.events));
        for event in month.events {
            block.push_str(&format!("> {event}\n"));
        }
    }

    block.push_str(&format!("> **{}**\n> {}", labels.conditions, month.conditions));

    if !month.crops.is_empty() {
        block.push_str(&format!("\n> **{}**\n> {}", labels.crops, month.crops));
    }

    block
}
