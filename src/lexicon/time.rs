//! Time units. These are authored for the Russian partition only; the target
//! symbols here are words ("дней"), not SI symbols.

use crate::{Locale, UnitCategory, UnitDefinition};

const fn unit(
    name: &'static str,
    scale: f64,
    symbol: &'static str,
    variants: &'static [&'static str],
) -> UnitDefinition {
    UnitDefinition { name, category: UnitCategory::Time, locale: Locale::Russian, scale, symbol, variants }
}

pub(crate) static UNITS: &[UnitDefinition] = &[
    unit("стража", 3.0, "ч", &["стражи", "страж"]),
    unit("час", 1.0, "ч", &["часа", "часов"]),
    unit("день", 1.0, "день", &["дня", "дней"]),
    unit("неделя", 7.0, "дней", &["недели", "недель"]),
    unit("месяц", 30.0, "дней", &["месяца", "месяцев"]),
    unit("год", 365.0, "дней", &["года", "лет"]),
];
