//! Host integration: the abstract editing surface and the editor-level
//! commands built on it.
//!
//! The engine never talks to a concrete editor. A host implements
//! [`TextSource`] (selection and whole-document access) and [`Notifier`]
//! (fire-and-forget user feedback), and wires the command functions below to
//! its own menus or keybindings. Every command distinguishes "something
//! changed" from "nothing changed" by string comparison and reports the
//! outcome through the notifier; none of them can fail.

use crate::config::{ConversionProfile, OutputFormat, SearchProfile};
use crate::{Lexicon, Locale, api};

/// Abstract text-editing surface.
///
/// An empty selection string means "no selection".
pub trait TextSource {
    fn selection(&self) -> String;
    fn replace_selection(&mut self, text: &str);
    fn content(&self) -> String;
    fn set_content(&mut self, text: &str);
}

/// Fire-and-forget user-visible feedback. Must not block.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Convert units inside the current selection under the primary profile.
pub fn convert_selection(
    source: &mut dyn TextSource,
    notifier: &dyn Notifier,
    lexicon: &Lexicon,
    profile: &ConversionProfile,
) {
    convert_selection_with(source, notifier, lexicon, profile, profile.format);
}

/// Convert the current selection, rendering as a callout block.
pub fn convert_selection_callout(
    source: &mut dyn TextSource,
    notifier: &dyn Notifier,
    lexicon: &Lexicon,
    profile: &ConversionProfile,
) {
    convert_selection_with(source, notifier, lexicon, profile, OutputFormat::Callout);
}

fn convert_selection_with(
    source: &mut dyn TextSource,
    notifier: &dyn Notifier,
    lexicon: &Lexicon,
    profile: &ConversionProfile,
    format: OutputFormat,
) {
    let notices = profile.locale.notices();
    let selection = source.selection();
    if selection.is_empty() {
        notifier.notify(notices.no_selection);
        return;
    }

    let converted = api::convert_with_format(&selection, lexicon, profile, format);
    if converted != selection {
        source.replace_selection(&converted);
        notifier.notify(notices.conversion_complete);
    } else {
        notifier.notify(notices.no_units_found);
    }
}

/// Convert units across the whole document under the primary profile.
pub fn convert_document(
    source: &mut dyn TextSource,
    notifier: &dyn Notifier,
    lexicon: &Lexicon,
    profile: &ConversionProfile,
) {
    let notices = profile.locale.notices();
    let content = source.content();
    let converted = api::convert(&content, lexicon, profile);

    if converted != content {
        source.set_content(&converted);
        notifier.notify(notices.conversion_complete);
    } else {
        notifier.notify(notices.no_units_found);
    }
}

/// Convert units across the whole document under the find-and-convert
/// profile. `locale` governs the notices only; the search profile carries no
/// locale of its own.
pub fn find_and_convert(
    source: &mut dyn TextSource,
    notifier: &dyn Notifier,
    lexicon: &Lexicon,
    profile: &SearchProfile,
    locale: Locale,
) {
    let notices = locale.notices();
    let content = source.content();
    let converted = api::convert_with_unit_filter(&content, lexicon, profile.enabled, profile);

    if converted != content {
        source.set_content(&converted);
        notifier.notify(notices.conversion_complete);
    } else {
        notifier.notify(notices.no_units_found);
    }
}

/// Replace a selected month name with its calendar information block.
pub fn insert_month_info(source: &mut dyn TextSource, notifier: &dyn Notifier, locale: Locale) {
    let notices = locale.notices();
    let selection = source.selection();
    if selection.is_empty() {
        notifier.notify(notices.no_selection);
        return;
    }

    match api::resolve_month(&selection, locale) {
        Some(block) => {
            source.replace_selection(&block);
            notifier.notify(notices.month_info_added);
        }
        None => notifier.notify(notices.month_not_found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Buffer {
        content: String,
        selection: Option<(usize, usize)>,
    }

    impl Buffer {
        fn with_selection(content: &str, needle: &str) -> Self {
            let start = content.find(needle).unwrap();
            Self { content: content.to_string(), selection: Some((start, start + needle.len())) }
        }

        fn unselected(content: &str) -> Self {
            Self { content: content.to_string(), selection: None }
        }
    }

    impl TextSource for Buffer {
        fn selection(&self) -> String {
            match self.selection {
                Some((start, end)) => self.content[start..end].to_string(),
                None => String::new(),
            }
        }

        fn replace_selection(&mut self, text: &str) {
            if let Some((start, end)) = self.selection {
                self.content.replace_range(start..end, text);
                self.selection = Some((start, start + text.len()));
            }
        }

        fn content(&self) -> String {
            self.content.clone()
        }

        fn set_content(&mut self, text: &str) {
            self.content = text.to_string();
            self.selection = None;
        }
    }

    #[derive(Default)]
    struct Recorder {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    impl Recorder {
        fn last(&self) -> String {
            self.messages.borrow().last().cloned().unwrap_or_default()
        }
    }

    #[test]
    fn selection_command_rewrites_and_reports_success() {
        let lexicon = Lexicon::builtin();
        let profile = ConversionProfile::default();
        let mut buffer = Buffer::with_selection("ширина 10 локтей ровно", "10 локтей");
        let notifier = Recorder::default();

        convert_selection(&mut buffer, &notifier, &lexicon, &profile);

        assert_eq!(buffer.content, "ширина 10 локтей (4.45 м) ровно");
        assert_eq!(notifier.last(), "✅ Конвертация завершена");
    }

    #[test]
    fn selection_command_requires_a_selection() {
        let lexicon = Lexicon::builtin();
        let profile = ConversionProfile::default();
        let mut buffer = Buffer::unselected("10 локтей");
        let notifier = Recorder::default();

        convert_selection(&mut buffer, &notifier, &lexicon, &profile);

        assert_eq!(buffer.content, "10 локтей");
        assert_eq!(notifier.last(), "⚠️ Нет выделенного текста для конвертации.");
    }

    #[test]
    fn document_command_reports_when_nothing_matches() {
        let lexicon = Lexicon::builtin();
        let profile = ConversionProfile::default();
        let mut buffer = Buffer::unselected("nothing ancient in here");
        let notifier = Recorder::default();

        convert_document(&mut buffer, &notifier, &lexicon, &profile);

        assert_eq!(buffer.content, "nothing ancient in here");
        assert_eq!(notifier.last(), "ℹ️ Библейские единицы измерения не найдены в выделенном тексте.");
    }

    #[test]
    fn find_and_convert_uses_the_search_profile() {
        let lexicon = Lexicon::builtin();
        let profile = SearchProfile { format: OutputFormat::Replace, ..SearchProfile::default() };
        let mut buffer = Buffer::unselected("комната 10 локтей в ширину");
        let notifier = Recorder::default();

        find_and_convert(&mut buffer, &notifier, &lexicon, &profile, Locale::English);

        assert_eq!(buffer.content, "комната 4.45 м в ширину");
        assert_eq!(notifier.last(), "✅ Conversion completed");
    }

    #[test]
    fn month_command_inserts_the_block_or_reports_not_found() {
        let mut buffer = Buffer::with_selection("nisan", "nisan");
        let notifier = Recorder::default();

        insert_month_info(&mut buffer, &notifier, Locale::English);
        assert!(buffer.content.starts_with("> [!convert] Month - NISAN (ABIB)"));
        assert_eq!(notifier.last(), "✅ Month information added");

        let mut missing = Buffer::with_selection("febtober", "febtober");
        insert_month_info(&mut missing, &notifier, Locale::English);
        assert_eq!(missing.content, "febtober");
        assert_eq!(notifier.last(), "ℹ️ Hebrew month not found in selected text.");
    }
}
