//! Locale-dependent phrasing.
//!
//! Everything that varies by interface language lives here as data: notice
//! strings, calendar section labels, work-duration phrase books and the
//! thousands separator. Formatting functions dispatch on a [`Locale`] value
//! through these tables instead of branching per language at each call site.
//!
//! Only strings that appear in *generated output* (or user notices) belong
//! here; menu titles and settings captions are host chrome and stay out.

/// Supported interface/display languages.
///
/// An unknown locale name in a configuration snapshot falls back to
/// [`Locale::Russian`], the documented default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Russian,
    English,
    Spanish,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Russian, Locale::English, Locale::Spanish];

    /// Resolve a configuration locale name. Accepts the canonical capitalized
    /// form and a lower-case spelling.
    pub fn from_name(name: &str) -> Option<Locale> {
        match name {
            "Russian" | "russian" => Some(Locale::Russian),
            "English" | "english" => Some(Locale::English),
            "Spanish" | "spanish" => Some(Locale::Spanish),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Locale::Russian => "Russian",
            Locale::English => "English",
            Locale::Spanish => "Spanish",
        }
    }

    /// User-visible notice strings for this locale.
    pub fn notices(self) -> &'static Notices {
        match self {
            Locale::Russian => &RUSSIAN_NOTICES,
            Locale::English => &ENGLISH_NOTICES,
            Locale::Spanish => &SPANISH_NOTICES,
        }
    }

    pub(crate) fn calendar_labels(self) -> &'static CalendarLabels {
        match self {
            Locale::Russian => &RUSSIAN_CALENDAR_LABELS,
            Locale::English => &ENGLISH_CALENDAR_LABELS,
            Locale::Spanish => &SPANISH_CALENDAR_LABELS,
        }
    }

    fn work_phrases(self) -> &'static WorkPhrases {
        match self {
            Locale::Russian => &RUSSIAN_WORK_PHRASES,
            Locale::English => &ENGLISH_WORK_PHRASES,
            Locale::Spanish => &SPANISH_WORK_PHRASES,
        }
    }

    fn thousands_separator(self) -> &'static str {
        match self {
            Locale::Russian => "\u{202F}",
            Locale::English => ",",
            Locale::Spanish => ".",
        }
    }
}

/// Notice strings surfaced through a [`crate::Notifier`] and the callout
/// header label used in generated output.
#[derive(Debug)]
pub struct Notices {
    pub no_selection: &'static str,
    pub conversion_complete: &'static str,
    pub no_units_found: &'static str,
    pub month_info_added: &'static str,
    pub month_not_found: &'static str,
    pub callout_units_title: &'static str,
}

static RUSSIAN_NOTICES: Notices = Notices {
    no_selection: "⚠️ Нет выделенного текста для конвертации.",
    conversion_complete: "✅ Конвертация завершена",
    no_units_found: "ℹ️ Библейские единицы измерения не найдены в выделенном тексте.",
    month_info_added: "✅ Информация о месяце добавлена",
    month_not_found: "ℹ️ Еврейский месяц не найден в выделенном тексте.",
    callout_units_title: "Единицы измерения",
};

static ENGLISH_NOTICES: Notices = Notices {
    no_selection: "⚠️ No text selected for conversion.",
    conversion_complete: "✅ Conversion completed",
    no_units_found: "ℹ️ No biblical units found in selected text.",
    month_info_added: "✅ Month information added",
    month_not_found: "ℹ️ Hebrew month not found in selected text.",
    callout_units_title: "Units of Measurement",
};

static SPANISH_NOTICES: Notices = Notices {
    no_selection: "⚠️ No hay texto seleccionado para conversión.",
    conversion_complete: "✅ Conversión completada",
    no_units_found: "ℹ️ No se encontraron unidades bíblicas en el texto seleccionado.",
    month_info_added: "✅ Información del mes añadida",
    month_not_found: "ℹ️ Mes hebreo no encontrado en el texto seleccionado.",
    callout_units_title: "Unidades de Medida",
};

/// Section labels for a rendered calendar-month block.
#[derive(Debug)]
pub(crate) struct CalendarLabels {
    pub month: &'static str,
    pub events: &'static str,
    pub conditions: &'static str,
    pub crops: &'static str,
}

static RUSSIAN_CALENDAR_LABELS: CalendarLabels = CalendarLabels {
    month: "Месяц",
    events: "В этом месяце",
    conditions: "Условия",
    crops: "Урожай/Деятельность",
};

static ENGLISH_CALENDAR_LABELS: CalendarLabels =
    CalendarLabels { month: "Month", events: "Events", conditions: "Weather", crops: "Crops/Activity" };

static SPANISH_CALENDAR_LABELS: CalendarLabels =
    CalendarLabels { month: "Mes", events: "Eventos", conditions: "Clima", crops: "Cosechas/Actividad" };

// --- Work-duration phrasing --------------------------------------------------

/// Phrase book for rendering a labor-days figure as text.
///
/// The `*_few` fields carry the grammatical sub-bucket some languages need for
/// counts of 2..=4; they are `None` where the plural does not distinguish it.
#[derive(Debug)]
struct WorkPhrases {
    /// Label after an hours figure, for durations under one day.
    hours: &'static str,
    /// Complete phrase for exactly one work day.
    day_one: &'static str,
    days_few: Option<&'static str>,
    days_many: &'static str,
    /// Complete phrase for one year of salary.
    year_one: &'static str,
    years_few: Option<&'static str>,
    years_many: &'static str,
}

static RUSSIAN_WORK_PHRASES: WorkPhrases = WorkPhrases {
    hours: "рабочих часов",
    day_one: "1 рабочий день",
    days_few: Some("рабочих дня"),
    days_many: "рабочих дней",
    year_one: "1 год зарплаты",
    years_few: Some("года зарплаты"),
    years_many: "лет зарплаты",
};

static ENGLISH_WORK_PHRASES: WorkPhrases = WorkPhrases {
    hours: "work hours",
    day_one: "1 work day",
    days_few: None,
    days_many: "work days",
    year_one: "1 year salary",
    years_few: None,
    years_many: "years salary",
};

static SPANISH_WORK_PHRASES: WorkPhrases = WorkPhrases {
    hours: "horas de trabajo",
    day_one: "1 día de trabajo",
    days_few: None,
    days_many: "días de trabajo",
    year_one: "1 año de salario",
    years_few: None,
    years_many: "años de salario",
};

/// Render a (possibly fractional) number of work days as a localized phrase.
///
/// Buckets: under one day renders as hours at one decimal (selected on the
/// unrounded value, rendered from it too); otherwise the value is rounded to
/// whole days, with 365-and-over days collapsing into salary years.
pub(crate) fn work_duration(work_days: f64, locale: Locale) -> String {
    let phrases = locale.work_phrases();

    if work_days < 1.0 {
        return format!("{:.1} {}", work_days * 8.0, phrases.hours);
    }

    let days = work_days.round() as i64;
    if days == 1 {
        return phrases.day_one.to_string();
    }
    if days < 365 {
        if let Some(few) = phrases.days_few {
            if days < 5 {
                return format!("{days} {few}");
            }
        }
        return format!("{days} {}", phrases.days_many);
    }

    let years = (days as f64 / 365.0).round() as i64;
    if years == 1 {
        return phrases.year_one.to_string();
    }
    if let Some(few) = phrases.years_few {
        if years < 5 {
            return format!("{years} {few}");
        }
    }
    format!("{years} {}", phrases.years_many)
}

/// Group an integer with the locale's thousands separator.
pub(crate) fn group_thousands(value: i64, locale: Locale) -> String {
    let separator = locale.thousands_separator();
    let digits = value.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + 4);
    if value < 0 {
        out.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_locale_name_is_rejected() {
        assert_eq!(Locale::from_name("English"), Some(Locale::English));
        assert_eq!(Locale::from_name("Klingon"), None);
    }

    #[test]
    fn work_duration_sub_day_uses_unrounded_value() {
        // 0.5 days would round up to a whole day; the hours bucket must win.
        assert_eq!(work_duration(0.5, Locale::English), "4.0 work hours");
        assert_eq!(work_duration(0.9375, Locale::Spanish), "7.5 horas de trabajo");
    }

    #[test]
    fn work_duration_day_buckets() {
        assert_eq!(work_duration(1.0, Locale::English), "1 work day");
        assert_eq!(work_duration(1.2, Locale::English), "1 work day");
        assert_eq!(work_duration(15.0, Locale::English), "15 work days");
        assert_eq!(work_duration(2.0, Locale::Russian), "2 рабочих дня");
        assert_eq!(work_duration(4.0, Locale::Russian), "4 рабочих дня");
        assert_eq!(work_duration(5.0, Locale::Russian), "5 рабочих дней");
        assert_eq!(work_duration(122.0, Locale::Spanish), "122 días de trabajo");
    }

    #[test]
    fn work_duration_year_buckets() {
        assert_eq!(work_duration(365.0, Locale::English), "1 year salary");
        assert_eq!(work_duration(14600.0, Locale::English), "40 years salary");
        assert_eq!(work_duration(800.0, Locale::Russian), "2 года зарплаты");
        assert_eq!(work_duration(7300.0, Locale::Russian), "20 лет зарплаты");
        assert_eq!(work_duration(730.0, Locale::Spanish), "2 años de salario");
    }

    #[test]
    fn thousands_grouping_per_locale() {
        assert_eq!(group_thousands(25, Locale::English), "25");
        assert_eq!(group_thousands(730000, Locale::English), "730,000");
        assert_eq!(group_thousands(36000, Locale::Russian), "36\u{202F}000");
        assert_eq!(group_thousands(365000, Locale::Spanish), "365.000");
        assert_eq!(group_thousands(1234567, Locale::English), "1,234,567");
    }
}
