//! Placeholder substitution and blank filling over paragraph text.
//!
//! Both operations follow the same three steps: flatten a paragraph's runs into
//! one string, edit the string, then write it back into the first run and clear
//! the text of the others. Paragraph-level style survives; run-level formatting
//! boundaries inside an edited paragraph do not.

use regex::Regex;
use std::sync::OnceLock;

use super::model::{Paragraph, StructuredDocument, TextRun};

/// Paragraph whose text is split across ordered runs.
pub trait TemplateParagraph {
    /// Text of all runs concatenated in order.
    fn flatten(&self) -> String;

    /// Store `text` in the first run and clear the text of every other run.
    fn write_back(&mut self, text: String);
}

/// Document exposing its paragraphs, including those inside table cells.
pub trait TemplateDocument {
    type Paragraph: TemplateParagraph;

    fn template_paragraphs(&mut self) -> Vec<&mut Self::Paragraph>;
}

/// Ordered placeholder name to replacement table. Names are stored without brackets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, keeping its original position when overwriting.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// No bracketed token may occur inside another one.
    fn tokens_are_disjoint(&self) -> bool {
        let tokens: Vec<String> = self.keys().map(token).collect();
        tokens.iter().enumerate().all(|(index, outer)| {
            tokens
                .iter()
                .enumerate()
                .all(|(other, inner)| index == other || !outer.contains(inner.as_str()))
        })
    }
}

impl<K, V> FromIterator<(K, V)> for PlaceholderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

pub fn token(key: &str) -> String {
    format!("[{key}]")
}

/// Replace every `[key]` token in every reachable paragraph. Returns the number
/// of paragraphs rewritten.
pub fn replace_placeholders<D>(document: &mut D, placeholders: &PlaceholderMap) -> usize
where
    D: TemplateDocument + ?Sized,
{
    debug_assert!(
        placeholders.tokens_are_disjoint(),
        "placeholder tokens must not contain one another"
    );

    let mut rewritten = 0;
    for paragraph in document.template_paragraphs() {
        let original = paragraph.flatten();
        let mut text = original.clone();
        for (key, value) in placeholders.iter() {
            let token = token(key);
            if text.contains(&token) {
                text = text.replace(&token, value);
            }
        }
        if text != original {
            paragraph.write_back(text);
            rewritten += 1;
        }
    }
    rewritten
}

fn blank_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"_+").expect("blank pattern is valid"))
}

fn hint_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s*\([^()]*\)").expect("hint pattern is valid"))
}

/// Replace every run of underscores with `value`. With `remove_hints`, also drop
/// parenthesized authoring hints such as `(заполните вручную)`.
///
/// Every blank in the paragraph receives the same value. Returns `false` and
/// leaves the paragraph untouched when it has no blank.
pub fn fill_blank<P>(paragraph: &mut P, value: &str, remove_hints: bool) -> bool
where
    P: TemplateParagraph + ?Sized,
{
    let original = paragraph.flatten();
    if !blank_pattern().is_match(&original) {
        return false;
    }

    let filled = blank_pattern().replace_all(&original, regex::NoExpand(value));
    let text = if remove_hints {
        hint_pattern().replace_all(&filled, "").trim_end().to_string()
    } else {
        filled.into_owned()
    };

    paragraph.write_back(text);
    true
}

/// Fill the blank of every paragraph whose text starts with `label`.
pub fn fill_labelled_blanks<D>(document: &mut D, label: &str, value: &str) -> usize
where
    D: TemplateDocument + ?Sized,
{
    document
        .template_paragraphs()
        .into_iter()
        .filter(|paragraph| paragraph.flatten().trim_start().starts_with(label))
        .map(|paragraph| fill_blank(paragraph, value, true))
        .filter(|filled| *filled)
        .count()
}

impl TemplateParagraph for Paragraph {
    fn flatten(&self) -> String {
        self.text()
    }

    fn write_back(&mut self, text: String) {
        match self.runs.split_first_mut() {
            Some((first, rest)) => {
                first.text = text;
                for run in rest {
                    run.text.clear();
                }
            }
            None => self.runs.push(TextRun::plain(text)),
        }
    }
}

impl TemplateDocument for StructuredDocument {
    type Paragraph = Paragraph;

    fn template_paragraphs(&mut self) -> Vec<&mut Paragraph> {
        self.paragraphs_mut()
    }
}
