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
        "нисан",
        Some("авив"),
        "март — апрель",
        &["**14** Пасха", "**15—21** Праздник пресного хлеба", "**16** Принесение первых плодов"],
        "Иордан разливается от дождей. Таяние снега",
        "Ячмень",
        &["нисана", "нисане"],
    ),
    month(
        "авив",
        Some("нисан"),
        "март — апрель",
        &["**14** Пасха", "**15—21** Праздник пресного хлеба", "**16** Принесение первых плодов"],
        "Иордан разливается от дождей. Таяние снега",
        "Ячмень",
        &["авива", "авиве"],
    ),
    month(
        "ияр",
        Some("зив"),
        "апрель — май",
        &["**14** Вторая Пасха"],
        "Начинается засушливый период. Небо в основном ясное",
        "Пшеница",
        &["ияра", "ияре"],
    ),
    month(
        "зив",
        Some("ияр"),
        "апрель — май",
        &["**14** Вторая Пасха"],
        "Начинается засушливый период. Небо в основном ясное",
        "Пшеница",
        &["зива", "зиве"],
    ),
    month(
        "сиван",
        None,
        "май — июнь",
        &["**6** Праздник недель (Пятидесятница)"],
        "Летний зной. Ясно",
        "Пшеница, ранний инжир",
        &["сивана", "сиване"],
    ),
    month(
        "таммуз",
        None,
        "июнь — июль",
        &[],
        "Жара усиливается. Местами много росы",
        "Первый виноград",
        &["таммуза", "таммузе"],
    ),
    month("ав", None, "июль — август", &[], "Самый жаркий месяц", "Летние фрукты", &["ава", "аве"]),
    month(
        "элул",
        None,
        "август — сентябрь",
        &[],
        "Жара продолжается",
        "Финики, виноград, инжир",
        &["элула", "элуле"],
    ),
    month(
        "тишри",
        Some("этаним"),
        "сентябрь — октябрь",
        &[
            "**1** День трубного звука",
            "**10** День искупления",
            "**15—21** Праздник шалашей",
            "**22** Торжественное собрание",
        ],
        "Конец лета. Начало ранних дождей",
        "Пахота",
        &["тишри", "тишре"],
    ),
    month(
        "этаним",
        Some("тишри"),
        "сентябрь — октябрь",
        &[
            "**1** День трубного звука",
            "**10** День искупления",
            "**15—21** Праздник шалашей",
            "**22** Торжественное собрание",
        ],
        "Конец лета. Начало ранних дождей",
        "Пахота",
        &["этанима", "этаниме"],
    ),
    month(
        "хешван",
        Some("бул"),
        "октябрь — ноябрь",
        &[],
        "Слабые дожди",
        "Маслины",
        &["хешвана", "хешване"],
    ),
    month("бул", Some("хешван"), "октябрь — ноябрь", &[], "Слабые дожди", "Маслины", &["була", "буле"]),
    month(
        "кислев",
        None,
        "ноябрь — декабрь",
        &["**25** Праздник обновления"],
        "Дожди усиливаются. Заморозки. В горах снег",
        "Стада на зимовке",
        &["кислева", "кислеве"],
    ),
    month(
        "тевет",
        None,
        "декабрь — январь",
        &[],
        "Самый холодный месяц. Дождливо. В горах снег",
        "Появление зелени",
        &["тевета", "тевете"],
    ),
    month(
        "шеват",
        None,
        "январь — февраль",
        &[],
        "Становится теплее. Дожди продолжаются",
        "Цветение миндаля",
        &["шевата", "шевате"],
    ),
    month(
        "адар",
        None,
        "февраль — март",
        &["**14, 15** Пурим"],
        "Частые грозы и град",
        "Лён",
        &["адара", "адаре"],
    ),
    month(
        "веадар",
        None,
        "март",
        &[],
        "Этот месяц добавлялся 7 раз в 19 лет",
        "",
        &["веадара", "веадаре"],
    ),
];
