//! Weight units: the Hebrew series first, then the Greek and Roman series.
//!
//! Coin names live here too; the monetary table is keyed by these canonical
//! names (see `lexicon::monetary`).

use crate::{Locale, UnitCategory, UnitDefinition};

const fn unit(
    name: &'static str,
    locale: Locale,
    scale: f64,
    symbol: &'static str,
    variants: &'static [&'static str],
) -> UnitDefinition {
    UnitDefinition { name, category: UnitCategory::Weight, locale, scale, symbol, variants }
}

pub(crate) static UNITS: &[UnitDefinition] = &[
    // Russian, Hebrew units
    unit("гера", Locale::Russian, 0.57, "г", &["геры", "гер"]),
    unit("бека", Locale::Russian, 5.7, "г", &["беки"]),
    unit("пим", Locale::Russian, 7.8, "г", &["пима"]),
    unit("шекель", Locale::Russian, 11.4, "г", &["шекеля", "шекелей"]),
    unit("сикль", Locale::Russian, 11.4, "г", &["сикля", "сиклей"]),
    unit("мина", Locale::Russian, 570.0, "г", &["мины", "мин"]),
    unit("талант", Locale::Russian, 34.2, "кг", &["таланта", "талантов"]),
    unit("дарик", Locale::Russian, 8.4, "г", &["дарика", "дариков"]),
    // Russian, Greek and Roman units
    unit("лепта", Locale::Russian, 0.34, "г", &["лепты", "лепт"]),
    unit("кодрант", Locale::Russian, 0.68, "г", &["кодранта", "кодрантов"]),
    unit("ассарий", Locale::Russian, 2.7, "г", &["ассария", "ассариев"]),
    unit("динарий", Locale::Russian, 3.85, "г", &["динария", "динариев"]),
    unit("драхма", Locale::Russian, 3.4, "г", &["драхмы", "драхм"]),
    unit("дидрахма", Locale::Russian, 6.8, "г", &["дидрахмы", "дидрахм"]),
    unit("тетрадрахма", Locale::Russian, 13.6, "г", &["тетрадрахмы", "тетрадрахм"]),
    unit("статир", Locale::Russian, 13.6, "г", &["статира", "статиров"]),
    unit("мина греческая", Locale::Russian, 340.0, "г", &["мины греческой", "греческих мин"]),
    unit("талант греческий", Locale::Russian, 20.4, "кг", &["таланта греческого", "греческих талантов"]),
    unit("фунт", Locale::Russian, 327.0, "г", &["фунта", "фунтов"]),
    // English, Hebrew units
    unit("gerah", Locale::English, 0.57, "g", &["gerahs"]),
    unit("bekah", Locale::English, 5.7, "g", &["bekahs"]),
    unit("pim", Locale::English, 7.8, "g", &["pims"]),
    unit("shekel", Locale::English, 11.4, "g", &["shekels"]),
    unit("mina", Locale::English, 570.0, "g", &["minas"]),
    unit("talent", Locale::English, 34.2, "kg", &["talents"]),
    unit("daric", Locale::English, 8.4, "g", &["darics"]),
    // English, Greek and Roman units
    unit("lepton", Locale::English, 0.34, "g", &["lepta"]),
    unit("quadrans", Locale::English, 0.68, "g", &["quadrantes"]),
    unit("assarius", Locale::English, 2.7, "g", &["assarii"]),
    unit("denarius", Locale::English, 3.85, "g", &["denarii"]),
    unit("drachma", Locale::English, 3.4, "g", &["drachmas", "drachmae"]),
    unit("didrachma", Locale::English, 6.8, "g", &["didrachmas"]),
    unit("tetradrachma", Locale::English, 13.6, "g", &["tetradrachmas"]),
    unit("stater", Locale::English, 13.6, "g", &["staters"]),
    unit("greek mina", Locale::English, 340.0, "g", &["greek minas"]),
    unit("greek talent", Locale::English, 20.4, "kg", &["greek talents"]),
    unit("pound", Locale::English, 327.0, "g", &["pounds"]),
    // Spanish, Hebrew units
    unit("gera", Locale::Spanish, 0.57, "g", &["geras"]),
    unit("beca", Locale::Spanish, 5.7, "g", &["becas"]),
    unit("pim", Locale::Spanish, 7.8, "g", &["pims"]),
    unit("siclo", Locale::Spanish, 11.4, "g", &["siclos"]),
    unit("mina", Locale::Spanish, 570.0, "g", &["minas"]),
    unit("talento", Locale::Spanish, 34.2, "kg", &["talentos"]),
    unit("dárico", Locale::Spanish, 8.4, "g", &["dáricos"]),
    // Spanish, Greek and Roman units
    unit("lepta", Locale::Spanish, 0.34, "g", &["leptas"]),
    unit("cuadrante", Locale::Spanish, 0.68, "g", &["cuadrantes"]),
    unit("asario", Locale::Spanish, 2.7, "g", &["asarios"]),
    unit("denario", Locale::Spanish, 3.85, "g", &["denarios"]),
    unit("dracma", Locale::Spanish, 3.4, "g", &["dracmas"]),
    unit("didracma", Locale::Spanish, 6.8, "g", &["didracmas"]),
    unit("tetradracma", Locale::Spanish, 13.6, "g", &["tetradracmas"]),
    unit("estáter", Locale::Spanish, 13.6, "g", &["estáteres"]),
    unit("mina griega", Locale::Spanish, 340.0, "g", &["minas griegas"]),
    unit("talento griego", Locale::Spanish, 20.4, "kg", &["talentos griegos"]),
    unit("libra", Locale::Spanish, 327.0, "g", &["libras"]),
];
