//! Front-matter block splitting and scalar value handling
//!
//! A document is a `---` line, one `key: value` pair per line, a closing
//! `---` line, then the markdown body. Only flat scalar values are allowed.

use crate::error::{Result, TipcheckError};
use regex::Regex;
use std::sync::OnceLock;

pub const DELIMITER: &str = "---";

fn key_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").unwrap())
}

/// A scalar value as written in the block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    /// Value with quotes and escapes resolved
    pub text: String,
    /// Whether the value was written in single or double quotes
    pub quoted: bool,
}

impl Scalar {
    pub fn plain(text: &str) -> Self {
        Scalar {
            text: text.to_string(),
            quoted: false,
        }
    }
}

/// One `key: value` line of the block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub value: Scalar,
    /// 1-based line number in the document
    pub line: usize,
}

/// A document split into its front-matter fields and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument<'a> {
    pub fields: Vec<Field>,
    pub body: &'a str,
}

impl RawDocument<'_> {
    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// Strip the line terminator (`\n` or `\r\n`) from a raw line
fn line_content(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split a document into front-matter fields and body.
///
/// The body is everything after the closing delimiter line, byte for byte.
pub fn split(text: &str) -> Result<RawDocument<'_>> {
    let mut lines = text.split_inclusive('\n');

    let opening = lines.next().map(line_content).unwrap_or("");
    let opening = opening.strip_prefix('\u{feff}').unwrap_or(opening);
    if opening != DELIMITER {
        return Err(TipcheckError::malformed(
            1,
            "document must start with a '---' line",
        ));
    }

    let mut offset = text.split_inclusive('\n').next().map_or(0, str::len);
    let mut fields: Vec<Field> = Vec::new();

    for (idx, raw) in lines.enumerate() {
        let line_no = idx + 2;
        offset += raw.len();
        let line = line_content(raw);

        if line == DELIMITER {
            return Ok(RawDocument {
                fields,
                body: &text[offset..],
            });
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let field = parse_line(line, line_no)?;
        if fields.iter().any(|f| f.key == field.key) {
            return Err(TipcheckError::malformed(
                line_no,
                format!("key '{}' appears more than once", field.key),
            ));
        }
        fields.push(field);
    }

    Err(TipcheckError::MalformedFrontMatter {
        line: None,
        reason: "missing closing '---' line".to_string(),
    })
}

/// Parse a single `key: value` line
fn parse_line(line: &str, line_no: usize) -> Result<Field> {
    if line.starts_with([' ', '\t']) {
        return Err(TipcheckError::malformed(
            line_no,
            "indented lines (nested values) are not supported",
        ));
    }

    let (key, rest) = line
        .split_once(':')
        .ok_or_else(|| TipcheckError::malformed(line_no, "expected 'key: value'"))?;

    if !key_regex().is_match(key) {
        return Err(TipcheckError::malformed(
            line_no,
            format!("invalid key '{}'", key),
        ));
    }

    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return Err(TipcheckError::malformed(
            line_no,
            format!("expected a space after '{}:'", key),
        ));
    }

    let value = parse_scalar(rest.trim(), line_no)?;

    Ok(Field {
        key: key.to_string(),
        value,
        line: line_no,
    })
}

/// Parse the value part of a line (already trimmed)
fn parse_scalar(raw: &str, line_no: usize) -> Result<Scalar> {
    if let Some(rest) = raw.strip_prefix('"') {
        let (text, tail) = parse_double_quoted(rest, line_no)?;
        check_tail(tail, line_no)?;
        return Ok(Scalar { text, quoted: true });
    }

    if let Some(rest) = raw.strip_prefix('\'') {
        let (text, tail) = parse_single_quoted(rest, line_no)?;
        check_tail(tail, line_no)?;
        return Ok(Scalar { text, quoted: true });
    }

    if raw.starts_with(['[', '{', '|', '>', '&', '*', '!']) {
        return Err(TipcheckError::malformed(
            line_no,
            "only scalar values are supported",
        ));
    }

    // Plain scalar: a ` #` starts a trailing comment
    let text = match raw.find(" #") {
        Some(pos) => raw[..pos].trim_end(),
        None => raw,
    };
    Ok(Scalar::plain(text))
}

/// After a closing quote only whitespace or a comment may follow
fn check_tail(tail: &str, line_no: usize) -> Result<()> {
    let tail = tail.trim();
    if tail.is_empty() || tail.starts_with('#') {
        Ok(())
    } else {
        Err(TipcheckError::malformed(
            line_no,
            format!("unexpected text after quoted value: '{}'", tail),
        ))
    }
}

fn parse_double_quoted(rest: &str, line_no: usize) -> Result<(String, &str)> {
    let mut text = String::new();
    let mut chars = rest.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((text, &rest[i + 1..])),
            '\\' => match chars.next() {
                Some((_, '"')) => text.push('"'),
                Some((_, '\\')) => text.push('\\'),
                Some((_, 'n')) => text.push('\n'),
                Some((_, 't')) => text.push('\t'),
                Some((_, other)) => {
                    return Err(TipcheckError::malformed(
                        line_no,
                        format!("unsupported escape '\\{}'", other),
                    ))
                }
                None => break,
            },
            _ => text.push(c),
        }
    }

    Err(TipcheckError::malformed(line_no, "unterminated quoted value"))
}

fn parse_single_quoted(rest: &str, line_no: usize) -> Result<(String, &str)> {
    let mut text = String::new();
    let mut chars = rest.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '\'' {
            if matches!(chars.peek(), Some((_, '\''))) {
                chars.next();
                text.push('\'');
                continue;
            }
            return Ok((text, &rest[i + 1..]));
        }
        text.push(c);
    }

    Err(TipcheckError::malformed(line_no, "unterminated quoted value"))
}

/// Whether a plain string would not read back as the same string
pub fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value != value.trim()
        || value.starts_with(['"', '\'', '[', '{', '|', '>', '&', '*', '!', '%', '@', '#', '`'])
        || value.contains(" #")
        || value.contains(": ")
        || value.contains(['\n', '\t', '\r'])
        || matches!(value, "true" | "false")
}

/// Double-quote a value, escaping what the parser unescapes
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render a value, quoting only when needed
pub fn render(value: &str) -> String {
    if needs_quotes(value) {
        quote(value)
    } else {
        value.to_string()
    }
}
