//! Volume units, liquid and dry measures. Everything converts to liters.

use crate::{Locale, UnitCategory, UnitDefinition};

const fn unit(
    name: &'static str,
    locale: Locale,
    scale: f64,
    symbol: &'static str,
    variants: &'static [&'static str],
) -> UnitDefinition {
    UnitDefinition { name, category: UnitCategory::Volume, locale, scale, symbol, variants }
}

pub(crate) static UNITS: &[UnitDefinition] = &[
    // Russian, liquid measures
    unit("лог", Locale::Russian, 0.31, "л", &["лога", "логов"]),
    unit("гин", Locale::Russian, 3.67, "л", &["гина", "гинов"]),
    unit("бат", Locale::Russian, 22.0, "л", &["бата", "батов"]),
    unit("кор", Locale::Russian, 220.0, "л", &["кора", "коров"]),
    // Russian, dry measures
    unit("хиникс", Locale::Russian, 1.08, "л", &["хиникса", "хиниксов"]),
    unit("каб", Locale::Russian, 1.22, "л", &["каба", "кабов"]),
    unit("гомор", Locale::Russian, 2.2, "л", &["гомера", "гомеров"]),
    unit("сата", Locale::Russian, 7.33, "л", &["саты", "сат"]),
    unit("ефа", Locale::Russian, 22.0, "л", &["ефы", "еф"]),
    unit("хомер", Locale::Russian, 220.0, "л", &["хомера", "хомеров"]),
    // English, liquid measures
    unit("log", Locale::English, 0.31, "l", &["logs"]),
    unit("hin", Locale::English, 3.67, "l", &["hins"]),
    unit("bath", Locale::English, 22.0, "l", &["baths"]),
    unit("cor", Locale::English, 220.0, "l", &["cors"]),
    // English, dry measures
    unit("choenix", Locale::English, 1.08, "l", &["choenixes"]),
    unit("quart", Locale::English, 1.08, "l", &["quarts"]),
    unit("cab", Locale::English, 1.22, "l", &["cabs"]),
    unit("omer", Locale::English, 2.2, "l", &["omers"]),
    unit("seah", Locale::English, 7.33, "l", &["seahs"]),
    unit("ephah", Locale::English, 22.0, "l", &["ephahs"]),
    unit("homer", Locale::English, 220.0, "l", &["homers"]),
    // Spanish, liquid measures
    unit("log", Locale::Spanish, 0.31, "l", &["logues"]),
    unit("hin", Locale::Spanish, 3.67, "l", &["hines"]),
    unit("bato", Locale::Spanish, 22.0, "l", &["batos"]),
    unit("coro", Locale::Spanish, 220.0, "l", &["coros"]),
    // Spanish, dry measures
    unit("quénice", Locale::Spanish, 1.08, "l", &["quénices"]),
    unit("cab", Locale::Spanish, 1.22, "l", &["cabes"]),
    unit("omer", Locale::Spanish, 2.2, "l", &["omeres"]),
    unit("sea", Locale::Spanish, 7.33, "l", &["seas"]),
    unit("efá", Locale::Spanish, 22.0, "l", &["efás"]),
    unit("homer", Locale::Spanish, 220.0, "l", &["homeres"]),
];
