extern crate self as stadion;

#[macro_use]
mod macros;

mod api;
mod calendar;
mod config;
mod engine;
mod host;
mod lexicon;
mod locale;

pub use api::{convert, convert_with_format, convert_with_unit_filter, resolve_month};
pub use calendar::CalendarMonth;
pub use config::{ConversionProfile, OutputFormat, SearchProfile, Settings, UnitToggles};
pub use host::{
    Notifier, TextSource, convert_document, convert_selection, convert_selection_callout, find_and_convert,
    insert_month_info,
};
pub use locale::{Locale, Notices};

// --- Core data model ---------------------------------------------------------

/// Category a unit definition belongs to. Each category is independently
/// enable/disable-able per conversion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Length,
    Weight,
    Volume,
    Time,
}

impl UnitCategory {
    /// All categories in matcher iteration order.
    pub const ALL: [UnitCategory; 4] =
        [UnitCategory::Length, UnitCategory::Weight, UnitCategory::Volume, UnitCategory::Time];

    /// The single-bit [`CategorySet`] for this category.
    pub fn mask(self) -> CategorySet {
        match self {
            UnitCategory::Length => CategorySet::LENGTH,
            UnitCategory::Weight => CategorySet::WEIGHT,
            UnitCategory::Volume => CategorySet::VOLUME,
            UnitCategory::Time => CategorySet::TIME,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Volume => "volume",
            UnitCategory::Time => "time",
        }
    }

    pub fn from_name(name: &str) -> Option<UnitCategory> {
        match name {
            "length" => Some(UnitCategory::Length),
            "weight" => Some(UnitCategory::Weight),
            "volume" => Some(UnitCategory::Volume),
            "time" => Some(UnitCategory::Time),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Set of enabled unit categories for a conversion pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategorySet: u8 {
        const LENGTH = 1 << 0;
        const WEIGHT = 1 << 1;
        const VOLUME = 1 << 2;
        const TIME   = 1 << 3;
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        CategorySet::all()
    }
}

/// A single ancient unit: the canonical lexicon key, its grammatical surface
/// variants, and the scale to a modern unit.
///
/// `scale` is the only conversion semantics a unit carries; there is no
/// category-specific conversion logic anywhere in the engine.
#[derive(Debug, Clone, Copy)]
pub struct UnitDefinition {
    /// Canonical lower-case name (the lexicon key).
    pub name: &'static str,
    pub category: UnitCategory,
    /// Locale partition this definition was authored in. All partitions are
    /// scanned in a conversion pass; the partition exists so the same spelling
    /// can be authored independently per language.
    pub locale: Locale,
    /// Multiplier to the modern unit.
    pub scale: f64,
    /// Modern unit symbol appended to converted values.
    pub symbol: &'static str,
    /// Additional surface spellings (case/number variants).
    pub variants: &'static [&'static str],
}

impl UnitDefinition {
    /// Canonical name first, then the authored variants.
    pub fn surface_forms(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.variants.iter().copied())
    }
}

/// Monetary equivalent for a coin unit, keyed by a weight-lexicon canonical
/// name.
#[derive(Debug, Clone, Copy)]
pub struct MonetaryEquivalent {
    pub name: &'static str,
    /// Labor-days equivalent for one unit.
    pub work_days: f64,
    /// Modern currency amount for one unit.
    pub modern_value: f64,
    pub currency: &'static str,
    pub metal: &'static str,
}

/// The unit lexicon: an ordered, immutable list of unit definitions.
///
/// Authored order is load-bearing. The matcher applies one substitution pass
/// per (unit, surface form, separator pattern) in exactly this order, and a
/// span of text rewritten by an earlier pass is never rewritten again.
/// Construct it once at startup and pass it by reference into the entry
/// points; there is no hidden global instance.
#[derive(Debug, Clone)]
pub struct Lexicon {
    units: Vec<UnitDefinition>,
}

impl Lexicon {
    /// The built-in biblical lexicon: length, weight, volume and time tables
    /// across the Russian, English and Spanish partitions.
    pub fn builtin() -> Self {
        let mut units = Vec::new();
        units.extend_from_slice(lexicon::length::UNITS);
        units.extend_from_slice(lexicon::weight::UNITS);
        units.extend_from_slice(lexicon::volume::UNITS);
        units.extend_from_slice(lexicon::time::UNITS);
        Self { units }
    }

    /// A lexicon from caller-supplied definitions, in the given order.
    pub fn new(units: Vec<UnitDefinition>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[UnitDefinition] {
        &self.units
    }
}
