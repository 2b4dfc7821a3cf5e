use super::CalendarMonth;

const fn month(
    name: &'static str,
    alternative_name: Option<&'static str>,
    modern_months: &'static str,
    events: &'static [&'static str],
    conditions: &'static str,
    crops: &'static str,
    variants: &'static [&'static str],
) -> CalendarMonth {
    CalendarMonth { name, alternative_name, modern_months, events, conditions, crops, variants }
}

pub(super) static MONTHS: &[CalendarMonth] = &[
    month(
        "nisán",
        Some("Abib"),
        "marzo-abril",
        &["**14** Pascua", "**15-21** Panes Sin Levadura", "**16** Ofrenda de las primicias"],
        "El Jordán crece por las lluvias y el deshielo",
        "Cebada",
        &["nisan"],
    ),
    month(
        "abib",
        Some("Nisán"),
        "marzo-abril",
        &["**14** Pascua", "**15-21** Panes Sin Levadura", "**16** Ofrenda de las primicias"],
        "El Jordán crece por las lluvias y el deshielo",
        "Cebada",
        &[],
    ),
    month(
        "iyar",
        Some("Ziv"),
        "abril-mayo",
        &["**14** Pascua tardía"],
        "Comienza la temporada seca; cielo generalmente despejado",
        "Trigo",
        &[],
    ),
    month(
        "ziv",
        Some("Iyar"),
        "abril-mayo",
        &["**14** Pascua tardía"],
        "Comienza la temporada seca; cielo generalmente despejado",
        "Trigo",
        &[],
    ),
    month(
        "siván",
        None,
        "mayo-junio",
        &["**6** Fiesta de las Semanas (Pentecostés)"],
        "Hace calor; cielo despejado",
        "Trigo, brevas",
        &["sivan"],
    ),
    month(
        "tamuz",
        None,
        "junio-julio",
        &[],
        "Aumenta el calor; abundante rocío en algunas zonas",
        "Primeras uvas",
        &["tammuz"],
    ),
    month("ab", None, "julio-agosto", &[], "El calor llega a su punto máximo", "Fruta de verano", &["av"]),
    month("elul", None, "agosto-septiembre", &[], "Continúa el calor", "Dátiles, higos y uvas", &[]),
    month(
        "tisri",
        Some("Etanim"),
        "septiembre-octubre",
        &[
            "**1** Toque de trompeta",
            "**10** Día de Expiación",
            "**15-21** Fiesta de las Cabañas",
            "**22** Asamblea solemne",
        ],
        "Termina el verano; caen las primeras lluvias",
        "Se ara la tierra",
        &["tishri"],
    ),
    month(
        "etanim",
        Some("Tisri"),
        "septiembre-octubre",
        &[
            "**1** Toque de trompeta",
            "**10** Día de Expiación",
            "**15-21** Fiesta de las Cabañas",
            "**22** Asamblea solemne",
        ],
        "Termina el verano; caen las primeras lluvias",
        "Se ara la tierra",
        &[],
    ),
    month(
        "hesván",
        Some("Bul"),
        "octubre-noviembre",
        &[],
        "Lluvias ligeras",
        "Aceitunas",
        &["heshvan", "jeshvan"],
    ),
    month("bul", Some("Hesván"), "octubre-noviembre", &[], "Lluvias ligeras", "Aceitunas", &[]),
    month(
        "kislev",
        None,
        "noviembre-diciembre",
        &["**25** Fiesta de la Dedicación"],
        "Aumentan las lluvias, hay heladas, y nieva en las montañas",
        "Rebaños puestos a resguardo",
        &["quislev"],
    ),
    month(
        "tebet",
        None,
        "diciembre-enero",
        &[],
        "Frío máximo; lluvias, y nieve en las montañas",
        "Crece la vegetación",
        &["tevet"],
    ),
    month(
        "sebat",
        None,
        "enero-febrero",
        &[],
        "Menos frío; siguen las lluvias",
        "Almendros en flor",
        &["shevat"],
    ),
    month(
        "adar",
        None,
        "febrero-marzo",
        &["**14, 15** Purim"],
        "Frecuentes truenos y granizadas",
        "Lino",
        &[],
    ),
    month(
        "veadar",
        None,
        "marzo",
        &[],
        "Mes que se añadía 7 veces en 19 años",
        "",
        &["adar sheni", "adar ii"],
    ),
];
