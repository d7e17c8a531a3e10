//! Article record and its front-matter contract

use crate::domain::body;
use crate::domain::front_matter::{self, Field, RawDocument};
use crate::domain::order::OrderKey;
use crate::error::{Result, TipcheckError};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Fields every article must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 6] = ["title", "layout", "permalink", "published", "type", "order"];

const KNOWN_FIELDS: [&str; 7] = [
    "title",
    "layout",
    "sidenav",
    "published",
    "permalink",
    "type",
    "order",
];

/// One article: front-matter metadata plus the untouched markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Display heading
    pub title: String,
    /// Presentation template name (e.g. "tips")
    pub layout: String,
    /// Navigation partial reference
    pub sidenav: Option<String>,
    /// Gates public visibility
    pub published: bool,
    /// Public URL path, unique across the corpus
    pub permalink: String,
    /// Content-type marker (the `type` key)
    pub content_type: String,
    /// Listing sort key, unique across the corpus
    pub order: OrderKey,
    /// Keys this tool does not interpret, kept for serialization
    pub extra: BTreeMap<String, String>,
    /// Markdown body, byte for byte
    pub body: String,
}

fn required<'d>(doc: &'d RawDocument<'_>, key: &str) -> Result<&'d Field> {
    doc.get(key)
        .ok_or_else(|| TipcheckError::MissingRequiredField(key.to_string()))
}

fn parse_bool(field: &Field) -> Result<bool> {
    // A quoted "true" is a string, not a boolean
    match (field.value.quoted, field.value.text.as_str()) {
        (false, "true") => Ok(true),
        (false, "false") => Ok(false),
        _ => Err(TipcheckError::mismatch(
            &field.key,
            &field.value.text,
            "true or false",
        )),
    }
}

impl Article {
    /// Parse a document into an article.
    ///
    /// # Errors
    ///
    /// - `MalformedFrontMatter` if the block is missing or has an invalid line
    /// - `MissingRequiredField` for the first absent required field
    /// - `TypeMismatch` if `published` is not a boolean or `order` not a number
    pub fn parse(text: &str) -> Result<Self> {
        let doc = front_matter::split(text)?;

        for key in REQUIRED_FIELDS {
            required(&doc, key)?;
        }

        let published = parse_bool(required(&doc, "published")?)?;
        let order = OrderKey::parse(&required(&doc, "order")?.value.text)?;

        let text_of = |key: &str| -> Result<String> { Ok(required(&doc, key)?.value.text.clone()) };

        let extra = doc
            .fields
            .iter()
            .filter(|f| !KNOWN_FIELDS.contains(&f.key.as_str()))
            .map(|f| (f.key.clone(), f.value.text.clone()))
            .collect();

        Ok(Article {
            title: text_of("title")?,
            layout: text_of("layout")?,
            sidenav: doc.get("sidenav").map(|f| f.value.text.clone()),
            published,
            permalink: text_of("permalink")?,
            content_type: text_of("type")?,
            order,
            extra,
            body: doc.body.to_string(),
        })
    }

    /// Render the front-matter block in canonical form (including both delimiters)
    pub fn front_matter_string(&self) -> String {
        let mut out = String::new();
        out.push_str(front_matter::DELIMITER);
        out.push('\n');

        let mut line = |key: &str, value: String| {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value);
            out.push('\n');
        };

        line("title", front_matter::quote(&self.title));
        line("layout", front_matter::render(&self.layout));
        if let Some(sidenav) = &self.sidenav {
            line("sidenav", front_matter::render(sidenav));
        }
        line("published", self.published.to_string());
        line("permalink", front_matter::render(&self.permalink));
        line("type", front_matter::render(&self.content_type));
        line("order", front_matter::quote(self.order.as_str()));
        for (key, value) in &self.extra {
            line(key, front_matter::render(value));
        }

        out.push_str(front_matter::DELIMITER);
        out.push('\n');
        out
    }

    /// Render the whole document: canonical front matter followed by the body
    pub fn to_document_string(&self) -> String {
        let mut out = self.front_matter_string();
        out.push_str(&self.body);
        out
    }

    /// Revision date written as "Updated <date>" in the body, if any
    pub fn revision_date(&self) -> Option<NaiveDate> {
        body::revision_date(&self.body)
    }

    /// Language hints of the body's code blocks
    pub fn code_languages(&self) -> Vec<String> {
        body::code_languages(&self.body)
    }
}
