//! Length units. Converted values are meters throughout; only the displayed
//! symbol is localized.

use crate::{Locale, UnitCategory, UnitDefinition};

const fn unit(
    name: &'static str,
    locale: Locale,
    scale: f64,
    symbol: &'static str,
    variants: &'static [&'static str],
) -> UnitDefinition {
    UnitDefinition { name, category: UnitCategory::Length, locale, scale, symbol, variants }
}

pub(crate) static UNITS: &[UnitDefinition] = &[
    // Russian
    unit("палец", Locale::Russian, 0.0185, "м", &["пальца", "пальцев"]),
    unit("перст", Locale::Russian, 0.0185, "м", &["перста", "персты"]),
    unit("ладонь", Locale::Russian, 0.074, "м", &["ладони", "ладоней"]),
    unit("пядь", Locale::Russian, 0.222, "м", &["пяди"]),
    unit("короткий локоть", Locale::Russian, 0.38, "м", &["коротких локтей", "короткого локтя"]),
    unit("локоть", Locale::Russian, 0.445, "м", &["локтей", "локтя", "локей"]),
    unit("длинный локоть", Locale::Russian, 0.518, "м", &["длинных локтей", "длинного локтя"]),
    unit("сажень", Locale::Russian, 1.8, "м", &["сажени", "саженей"]),
    unit("трость", Locale::Russian, 2.67, "м", &["трости", "тростей"]),
    unit("длинная трость", Locale::Russian, 3.11, "м", &["длинных тростей", "длинной трости"]),
    unit("стадий", Locale::Russian, 185.0, "м", &["стадии", "стадиев"]),
    unit("поприще", Locale::Russian, 1480.0, "м", &["поприща"]),
    // English
    unit("fingerbreadth", Locale::English, 0.0185, "m", &["fingerbreadths"]),
    unit("finger", Locale::English, 0.0185, "m", &["fingers"]),
    unit("handbreadth", Locale::English, 0.074, "m", &["handbreadths"]),
    unit("span", Locale::English, 0.222, "m", &["spans"]),
    unit("short cubit", Locale::English, 0.38, "m", &["short cubits"]),
    unit("cubit", Locale::English, 0.445, "m", &["cubits"]),
    unit("long cubit", Locale::English, 0.518, "m", &["long cubits"]),
    unit("fathom", Locale::English, 1.8, "m", &["fathoms"]),
    unit("reed", Locale::English, 2.67, "m", &["reeds"]),
    unit("long reed", Locale::English, 3.11, "m", &["long reeds"]),
    unit("stadium", Locale::English, 185.0, "m", &["stadia", "stadiums"]),
    unit("furlong", Locale::English, 185.0, "m", &["furlongs"]),
    unit("mile", Locale::English, 1481.0, "m", &["miles"]),
    // Spanish
    unit("dedo", Locale::Spanish, 0.0185, "m", &["dedos"]),
    unit("palmo menor", Locale::Spanish, 0.074, "m", &["palmos menores"]),
    unit("palmo", Locale::Spanish, 0.222, "m", &["palmos"]),
    unit("codo corto", Locale::Spanish, 0.38, "m", &["codos cortos"]),
    unit("codo", Locale::Spanish, 0.445, "m", &["codos"]),
    unit("codo largo", Locale::Spanish, 0.518, "m", &["codos largos"]),
    unit("braza", Locale::Spanish, 1.8, "m", &["brazas"]),
    unit("caña", Locale::Spanish, 2.67, "m", &["cañas"]),
    unit("caña larga", Locale::Spanish, 3.11, "m", &["cañas largas"]),
    unit("estadio", Locale::Spanish, 185.0, "m", &["estadios"]),
    unit("milla", Locale::Spanish, 1479.5, "m", &["millas"]),
];
