//! Read-only inspection of an article body

use chrono::NaiveDate;
use pulldown_cmark::{CodeBlockKind, Event, Parser as MdParser, Tag};
use regex::Regex;
use std::sync::OnceLock;

/// Matches "Updated 2020-04-06", "*Updated: April 6, 2020*", "updated on Apr 6, 2020"
fn updated_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)\bupdated\b[\s:*_]*(?:on\s+)?(\d{4}-\d{2}-\d{2}|[a-z]+\.?\s+\d{1,2},\s*\d{4})",
        )
        .unwrap()
    })
}

/// Matches the `lang-xxx` class on HTML code blocks
fn lang_class_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"class\s*=\s*"[^"]*\blang-([A-Za-z0-9+#_-]+)"#).unwrap())
}

fn parse_loose_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    let normalized = text
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    NaiveDate::parse_from_str(&normalized, "%B %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(&normalized, "%b %d, %Y"))
        .ok()
}

/// Find the revision date written as plain text in the body.
///
/// Returns the first "Updated <date>" annotation that carries a real date.
pub fn revision_date(body: &str) -> Option<NaiveDate> {
    updated_regex()
        .captures_iter(body)
        .find_map(|cap| parse_loose_date(&cap[1]))
}

fn push_unique(langs: &mut Vec<String>, lang: &str) {
    let lang = lang.strip_prefix("lang-").unwrap_or(lang).to_lowercase();
    if !lang.is_empty() && !langs.contains(&lang) {
        langs.push(lang);
    }
}

/// Language hints of the code blocks in the body, in first-appearance order.
///
/// Covers fenced blocks (```` ```cpp ````) and HTML blocks carrying a
/// `lang-xxx` class.
pub fn code_languages(body: &str) -> Vec<String> {
    let mut langs = Vec::new();

    for event in MdParser::new(body) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                if let Some(word) = info.split_whitespace().next() {
                    let word = word.trim_start_matches('{').trim_start_matches('.');
                    let word = word.trim_end_matches('}');
                    push_unique(&mut langs, word);
                }
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                for cap in lang_class_regex().captures_iter(&html) {
                    push_unique(&mut langs, &cap[1]);
                }
            }
            _ => {}
        }
    }

    langs
}
