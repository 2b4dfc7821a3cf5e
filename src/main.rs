use std::io::{self, Read};

use stadion::{
    CategorySet, ConversionProfile, Lexicon, Locale, OutputFormat, SearchProfile, Settings, UnitCategory,
    convert, convert_with_unit_filter, resolve_month,
};

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let lexicon = Lexicon::builtin();
    let locale = config.profile.locale;

    if config.month {
        match resolve_month(&config.input, locale) {
            Some(block) => println!("{block}"),
            None => {
                eprintln!("{}", locale.notices().month_not_found);
                std::process::exit(1);
            }
        }
        return;
    }

    let output = if config.search {
        convert_with_unit_filter(&config.input, &lexicon, config.search_profile.enabled, &config.search_profile)
    } else {
        convert(&config.input, &lexicon, &config.profile)
    };
    println!("{output}");
}

struct CliConfig {
    input: String,
    profile: ConversionProfile,
    search_profile: SearchProfile,
    search: bool,
    month: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut settings = Settings::default();
    let mut locale: Option<Locale> = None;
    let mut precision: Option<u8> = None;
    let mut format: Option<OutputFormat> = None;
    let mut categories: Option<CategorySet> = None;
    let mut bold = false;
    let mut monetary = false;
    let mut search = false;
    let mut month = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("stadion {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--bold" => bold = true,
            "--monetary" => monetary = true,
            "--find-convert" => search = true,
            "--month" => month = true,
            "--settings" => {
                let path = args.next().ok_or_else(|| "error: --settings expects a path".to_string())?;
                settings = load_settings(&path)?;
            }
            "--locale" => {
                let value = args.next().ok_or_else(|| "error: --locale expects a value".to_string())?;
                locale = Some(
                    Locale::from_name(&value)
                        .ok_or_else(|| format!("error: unknown locale '{value}'"))?,
                );
            }
            "--precision" => {
                let value = args.next().ok_or_else(|| "error: --precision expects a value".to_string())?;
                let parsed: u8 = value
                    .parse()
                    .map_err(|_| format!("error: invalid --precision '{value}' (expected 0..=5)"))?;
                precision = Some(parsed.min(5));
            }
            "--format" => {
                let value = args.next().ok_or_else(|| "error: --format expects a value".to_string())?;
                format = Some(
                    OutputFormat::from_name(&value)
                        .ok_or_else(|| format!("error: unknown format '{value}'"))?,
                );
            }
            "--categories" => {
                let value = args.next().ok_or_else(|| "error: --categories expects a list".to_string())?;
                categories = Some(parse_categories(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    let mut profile = ConversionProfile::from_settings(&settings);
    let mut search_profile = SearchProfile::from_settings(&settings);
    if let Some(locale) = locale {
        profile.locale = locale;
    }
    if let Some(precision) = precision {
        profile.precision = precision;
        search_profile.precision = precision;
    }
    if let Some(format) = format {
        profile.format = format;
        search_profile.format = format;
    }
    if let Some(categories) = categories {
        profile.enabled = categories;
        search_profile.enabled = categories;
    }
    if bold {
        profile.bold = true;
        search_profile.bold = true;
    }
    if monetary {
        profile.monetary = true;
    }

    Ok(CliConfig { input, profile, search_profile, search, month })
}

fn load_settings(path: &str) -> Result<Settings, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("error: failed to read settings '{path}': {err}"))?;
    serde_json::from_str(&raw).map_err(|err| format!("error: invalid settings '{path}': {err}"))
}

fn parse_categories(list: &str) -> Result<CategorySet, String> {
    let mut set = CategorySet::empty();
    for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let category = UnitCategory::from_name(name)
            .ok_or_else(|| format!("error: unknown category '{name}'"))?;
        set |= category.mask();
    }
    if set.is_empty() {
        return Err("error: --categories expects at least one category".to_string());
    }
    Ok(set)
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "stadion {version}

Ancient-unit conversion CLI.

Usage:
  stadion [OPTIONS] [--] <input...>
  stadion [OPTIONS] --input <text>

Options:
  -i, --input <text>        Input text to convert. If omitted, reads remaining
                            args or stdin when no args are provided.
  --settings <path>         Load a settings snapshot (JSON); omitted fields
                            take their defaults.
  --locale <name>           Interface locale: Russian, English or Spanish.
  --precision <0..=5>       Decimal places in converted values.
  --format <name>           parentheses, replace, inline or callout.
  --categories <list>       Comma-separated subset of length,weight,volume,time.
  --bold                    Bold converted values.
  --monetary                Append monetary equivalents for coin units.
  --find-convert            Use the find-and-convert profile instead of the
                            primary one.
  --month                   Treat the input as a Hebrew month name and print
                            its calendar block.
  -h, --help                Show this help message.
  -V, --version             Print version information.

Exit codes:
  0  Success.
  1  Month not found.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
