//! Sequential substitution passes over accumulating text.
//!
//! For every enabled unit and every surface form, two patterns are applied as
//! independent global substitution passes: the form preceded by a numeric
//! literal and ordinary whitespace, and the same preceded by exactly one
//! non-breaking space. Passes run in lexicon order (category, then unit, then
//! surface form, normal-space pattern first), each over the output of the
//! previous one.
//!
//! ## Invariants
//!
//! - Each character position of the original text is rewritten at most once:
//!   whichever enabled pattern reaches a span first in iteration order claims
//!   it, and later passes only ever see the rewritten text.
//! - Surface forms are regex-escaped before compilation; lexicon data never
//!   reaches the regex engine as syntax.
//! - `,` in a numeric literal is a decimal separator equivalent to `.`.

use std::borrow::Cow;

use log::debug;
use regex::{Captures, Regex};

use crate::{CategorySet, Lexicon, UnitDefinition};

/// Numeric literal: digits, optionally one `.`/`,` and more digits.
const NUMBER: &str = r"\d+(?:[.,]\d+)?";

fn whitespace_pattern(form: &str) -> Regex {
    Regex::new(&format!(r"(?i)({NUMBER})\s+({})", regex::escape(form))).unwrap()
}

fn nbsp_pattern(form: &str) -> Regex {
    Regex::new(&format!("(?i)({NUMBER})\u{00A0}({})", regex::escape(form))).unwrap()
}

/// Parse a matched numeric literal.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.replace(',', ".").parse().ok()
}

/// Run the full pass sequence over `text`, replacing every match through
/// `render`. The callback receives the matched unit, the full matched
/// substring and the parsed quantity, and returns the replacement text.
pub(crate) fn rewrite<F>(text: &str, lexicon: &Lexicon, enabled: CategorySet, mut render: F) -> String
where
    F: FnMut(&UnitDefinition, &str, f64) -> String,
{
    let mut out = text.to_string();

    for unit in lexicon.units() {
        if !enabled.contains(unit.category.mask()) {
            continue;
        }
        for form in unit.surface_forms() {
            for pattern in [whitespace_pattern(form), nbsp_pattern(form)] {
                let rewritten = pattern.replace_all(&out, |caps: &Captures<'_>| {
                    let whole = &caps[0];
                    match parse_number(&caps[1]) {
                        Some(value) => {
                            debug!("matched {whole:?} (number: {}, unit: {})", &caps[1], &caps[2]);
                            render(unit, whole, value)
                        }
                        None => whole.to_string(),
                    }
                });
                if let Cow::Owned(replaced) = rewritten {
                    out = replaced;
                }
            }
        }
    }

    out
}
