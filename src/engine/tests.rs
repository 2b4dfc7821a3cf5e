use crate::config::{ConversionProfile, OutputFormat, SearchProfile};
use crate::{CategorySet, Lexicon, Locale, convert, convert_with_format, convert_with_unit_filter};

fn replace_profile() -> ConversionProfile {
    ConversionProfile { format: OutputFormat::Replace, ..ConversionProfile::default() }
}

#[test]
fn conversion_examples() {
    // Array of (input, expected) at precision 2, replace format.
    let cases: Vec<(&str, &str)> = vec![
        ("10 локтей", "4.45 м"),
        ("2,5 локтя", "1.11 м"),
        ("5 саженей", "9.00 м"),
        ("1 cubit", "0.45 m"),
        ("1 span", "0.22 m"),
        ("1 fathom", "1.80 m"),
        ("1 codo", "0.45 m"),
        ("3 шекеля", "34.20 г"),
        ("2 сикля", "22.80 г"),
        ("1 талант", "34.20 кг"),
        ("1 ephah", "22.00 l"),
        ("2 ефы", "44.00 л"),
        ("2 стражи", "6.00 ч"),
        ("3 недели", "21.00 дней"),
    ];

    let lexicon = Lexicon::builtin();
    let profile = replace_profile();
    for (input, expected) in cases {
        assert_eq!(convert(input, &lexicon, &profile), expected, "input: {input}");
    }
}

#[test]
fn format_selector_coverage() {
    let lexicon = Lexicon::builtin();
    let base = ConversionProfile::default();

    let cases = [
        (OutputFormat::Parentheses, "5 локтей (2.23 м)"),
        (OutputFormat::Replace, "2.23 м"),
        (OutputFormat::Inline, "5 локтей = 2.23 м"),
        (OutputFormat::Callout, "> [!convert] Единицы измерения\n> **5 локтей = 2.23 м**"),
    ];
    for (format, expected) in cases {
        assert_eq!(convert_with_format("5 локтей", &lexicon, &base, format), expected);
    }
}

#[test]
fn callout_title_follows_locale() {
    let lexicon = Lexicon::builtin();
    let profile = ConversionProfile { locale: Locale::English, ..ConversionProfile::default() };
    let out = convert_with_format("1 cubit", &lexicon, &profile, OutputFormat::Callout);
    assert_eq!(out, "> [!convert] Units of Measurement\n> **1 cubit = 0.45 m**");
}

#[test]
fn precision_bounds() {
    let lexicon = Lexicon::builtin();

    let zero = ConversionProfile { precision: 0, ..replace_profile() };
    assert_eq!(convert("3 стадии", &lexicon, &zero), "555 м");

    let five = ConversionProfile { precision: 5, ..replace_profile() };
    assert_eq!(convert("1 локоть", &lexicon, &five), "0.44500 м");
}

#[test]
fn category_gating_leaves_disabled_units_untouched() {
    let lexicon = Lexicon::builtin();
    let profile = ConversionProfile {
        enabled: CategorySet::all() - CategorySet::WEIGHT,
        ..ConversionProfile::default()
    };
    let out = convert("5 локтей и 3 шекеля", &lexicon, &profile);
    assert_eq!(out, "5 локтей (2.23 м) и 3 шекеля");
}

#[test]
fn nbsp_separator_converts_like_ordinary_whitespace() {
    let lexicon = Lexicon::builtin();
    let profile = replace_profile();
    assert_eq!(convert("5\u{00A0}локтей", &lexicon, &profile), convert("5 локтей", &lexicon, &profile));
}

#[test]
fn converted_text_is_not_converted_again() {
    let lexicon = Lexicon::builtin();
    let profile = replace_profile();

    // Replace output carries only the modern symbol; a second pass is a no-op.
    let once = convert("10 локтей", &lexicon, &profile);
    assert_eq!(once, "4.45 м");
    assert_eq!(convert(&once, &lexicon, &profile), once);

    // With parentheses the ancient spelling survives and is claimed again on
    // a second pass, but the numeral inside the appended parenthetical is
    // not: "м" is no surface form.
    let parenthesized = ConversionProfile::default();
    let first = convert("10 локтей", &lexicon, &parenthesized);
    assert_eq!(first, "10 локтей (4.45 м)");
    let second = convert(&first, &lexicon, &parenthesized);
    assert_eq!(second, "10 локтей (4.45 м) (4.45 м)");
}

#[test]
fn bold_wraps_value_and_symbol_only() {
    let lexicon = Lexicon::builtin();
    let profile = ConversionProfile { bold: true, ..ConversionProfile::default() };
    assert_eq!(convert("10 локтей", &lexicon, &profile), "10 локтей (**4.45 м**)");
}

// --- Monetary augmentation ---------------------------------------------------

#[test]
fn monetary_sub_day_bucket_renders_hours() {
    let lexicon = Lexicon::builtin();
    let profile =
        ConversionProfile { monetary: true, locale: Locale::English, ..ConversionProfile::default() };
    let out = convert("1 shekel", &lexicon, &profile);
    assert_eq!(out, "1 shekel (11.40 g ≈ 4.0 work hours ≈ 25 dollars (silver))");
}

#[test]
fn monetary_day_and_year_buckets() {
    let lexicon = Lexicon::builtin();

    let english =
        ConversionProfile { monetary: true, locale: Locale::English, ..ConversionProfile::default() };
    assert_eq!(
        convert("1 talent", &lexicon, &english),
        "1 talent (34.20 kg ≈ 20 years salary ≈ 365,000 dollars (silver))"
    );

    let spanish =
        ConversionProfile { monetary: true, locale: Locale::Spanish, ..ConversionProfile::default() };
    assert_eq!(
        convert("1 denario", &lexicon, &spanish),
        "1 denario (3.85 g ≈ 1 día de trabajo ≈ 50 dólares (plata))"
    );
}

#[test]
fn monetary_russian_grammatical_buckets_and_grouping() {
    let lexicon = Lexicon::builtin();
    let profile = ConversionProfile { monetary: true, ..ConversionProfile::default() };

    assert_eq!(
        convert("2 мины", &lexicon, &profile),
        "2 мины (1140.00 г ≈ 244 рабочих дней ≈ 12\u{202F}200 долларов (серебро))"
    );

    // The years phrase spells out "N года", which the enabled time lexicon
    // would claim in a later pass; weight-only keeps the suffix observable.
    let weight_only = ConversionProfile { enabled: CategorySet::WEIGHT, ..profile };
    assert_eq!(
        convert("800 драхм", &lexicon, &weight_only),
        "800 драхм (2720.00 г ≈ 2 года зарплаты ≈ 36\u{202F}000 долларов (серебро))"
    );
}

#[test]
fn monetary_applies_to_coins_only() {
    let lexicon = Lexicon::builtin();
    let profile = ConversionProfile { monetary: true, ..ConversionProfile::default() };
    // A weight unit without a monetary row converts plainly.
    assert_eq!(convert("1 бека", &lexicon, &profile), "1 бека (5.70 г)");
}

#[test]
fn bold_and_monetary_compose_in_order() {
    let lexicon = Lexicon::builtin();
    let profile = ConversionProfile {
        monetary: true,
        bold: true,
        locale: Locale::English,
        ..ConversionProfile::default()
    };
    let out = convert("1 shekel", &lexicon, &profile);
    assert_eq!(out, "1 shekel (**11.40 g** ≈ 4.0 work hours ≈ 25 dollars (silver))");
}

// --- Find-and-convert pipeline -----------------------------------------------

#[test]
fn search_pipeline_never_appends_monetary_text() {
    let lexicon = Lexicon::builtin();
    let profile = SearchProfile::default();
    let out = convert_with_unit_filter("1 shekel", &lexicon, CategorySet::all(), &profile);
    assert_eq!(out, "1 shekel (11.40 g)");
}

#[test]
fn search_pipeline_honors_its_own_format_and_bold() {
    let lexicon = Lexicon::builtin();
    let profile = SearchProfile { format: OutputFormat::Inline, bold: true, ..SearchProfile::default() };
    let out = convert_with_unit_filter("10 локтей", &lexicon, CategorySet::all(), &profile);
    assert_eq!(out, "10 локтей = **4.45 м**");
}
