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
        "nisan",
        Some("Abib"),
        "March—April",
        &["**14** Passover", "**15-21** Unleavened Bread", "**16** Offering of firstfruits"],
        "Jordan swells from rains, melting snow",
        "Barley",
        &["nissan"],
    ),
    month(
        "abib",
        Some("Nisan"),
        "March—April",
        &["**14** Passover", "**15-21** Unleavened Bread", "**16** Offering of firstfruits"],
        "Jordan swells from rains, melting snow",
        "Barley",
        &[],
    ),
    month(
        "iyyar",
        Some("Ziv"),
        "April—May",
        &["**14** Late Passover"],
        "Dry season begins, mostly clear skies",
        "Wheat",
        &["iyar"],
    ),
    month(
        "ziv",
        Some("Iyyar"),
        "April—May",
        &["**14** Late Passover"],
        "Dry season begins, mostly clear skies",
        "Wheat",
        &[],
    ),
    month(
        "sivan",
        None,
        "May—June",
        &["**6** Festival of Weeks (Pentecost)"],
        "Summer heat, clear air",
        "Wheat, early figs",
        &[],
    ),
    month("tammuz", None, "June—July", &[], "Heat increases, heavy dews in areas", "First grapes", &[]),
    month("ab", None, "July—August", &[], "Heat reaches maximum", "Summer fruits", &["av"]),
    month("elul", None, "August—September", &[], "Heat continues", "Dates, grapes, and figs", &[]),
    month(
        "tishri",
        Some("Ethanim"),
        "September—October",
        &[
            "**1** Trumpet blast",
            "**10** Day of Atonement",
            "**15-21** Festival of Booths",
            "**22** Solemn assembly",
        ],
        "Summer ends, early rains begin",
        "Plowing",
        &[],
    ),
    month(
        "ethanim",
        Some("Tishri"),
        "September—October",
        &[
            "**1** Trumpet blast",
            "**10** Day of Atonement",
            "**15-21** Festival of Booths",
            "**22** Solemn assembly",
        ],
        "Summer ends, early rains begin",
        "Plowing",
        &[],
    ),
    month(
        "heshvan",
        Some("Bul"),
        "October—November",
        &[],
        "Light rains",
        "Olives",
        &["cheshvan", "marcheshvan"],
    ),
    month("bul", Some("Heshvan"), "October—November", &[], "Light rains", "Olives", &[]),
    month(
        "chislev",
        None,
        "November—December",
        &["**25** Festival of Dedication"],
        "Rain increases, frost, mountain snows",
        "Flocks wintered",
        &["kislev"],
    ),
    month(
        "tebeth",
        None,
        "December—January",
        &[],
        "Maximum cold, rainy, mountain snows",
        "Vegetation developing",
        &["tevet"],
    ),
    month(
        "shebat",
        None,
        "January—February",
        &[],
        "Cold weather lessens, rain continues",
        "Almond blossoms",
        &["shevat"],
    ),
    month("adar", None, "February—March", &["**14, 15** Purim"], "Frequent thunder and hail", "Flax", &[]),
    month(
        "veadar",
        None,
        "March",
        &[],
        "Intercalary month added seven times in 19 years",
        "",
        &["adar sheni", "adar ii"],
    ),
];
