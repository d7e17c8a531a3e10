//! Output formatting utilities

use crate::application::CheckReport;
use crate::domain::{Article, CorpusEntry};
use std::path::Path;

/// Format an ordered listing: `order  permalink  title`
pub fn format_listing(entries: &[CorpusEntry]) -> String {
    if entries.is_empty() {
        return "No articles found".to_string();
    }

    let order_width = entries
        .iter()
        .map(|e| e.article.order.as_str().len())
        .max()
        .unwrap_or(0);
    let link_width = entries
        .iter()
        .map(|e| e.article.permalink.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for entry in entries {
        let article = &entry.article;
        output.push_str(&format!(
            "{:>ow$}  {:<lw$}  {}{}\n",
            article.order.as_str(),
            article.permalink,
            article.title,
            if article.published { "" } else { " (unpublished)" },
            ow = order_width,
            lw = link_width,
        ));
    }
    output
}

/// Format the fields of one article
pub fn format_article(path: &Path, article: &Article) -> String {
    let mut output = String::new();
    output.push_str(&format!("file:       {}\n", path.display()));
    output.push_str(&format!("title:      {}\n", article.title));
    output.push_str(&format!("layout:     {}\n", article.layout));
    if let Some(sidenav) = &article.sidenav {
        output.push_str(&format!("sidenav:    {}\n", sidenav));
    }
    output.push_str(&format!("published:  {}\n", article.published));
    output.push_str(&format!("permalink:  {}\n", article.permalink));
    output.push_str(&format!("type:       {}\n", article.content_type));
    output.push_str(&format!("order:      {}\n", article.order));
    for (key, value) in &article.extra {
        output.push_str(&format!("{:<11} {}\n", format!("{}:", key), value));
    }
    if let Some(date) = article.revision_date() {
        output.push_str(&format!("updated:    {}\n", date.format("%Y-%m-%d")));
    }
    let langs = article.code_languages();
    if !langs.is_empty() {
        output.push_str(&format!("code:       {}\n", langs.join(", ")));
    }
    output.push_str(&format!("body:       {} bytes\n", article.body.len()));
    output
}

/// Format a check report: one line per problem, then a summary
pub fn format_report(report: &CheckReport) -> String {
    let mut output = String::new();
    for problem in &report.problems {
        output.push_str(&format!("{}\n", problem));
    }
    output.push_str(&format!(
        "{} {} checked, {} {}\n",
        report.checked,
        plural(report.checked, "article", "articles"),
        report.problems.len(),
        plural(report.problems.len(), "problem", "problems"),
    ));
    output
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TipcheckError;
    use std::path::PathBuf;

    fn article(permalink: &str, order: &str, published: bool, body: &str) -> Article {
        Article::parse(&format!(
            "---\ntitle: \"Tip {}\"\nlayout: tips\npublished: {}\npermalink: {}\ntype: markdown\norder: \"{}\"\n---\n{}",
            order, published, permalink, order, body
        ))
        .unwrap()
    }

    #[test]
    fn test_format_empty_listing() {
        assert_eq!(format_listing(&[]), "No articles found");
    }

    #[test]
    fn test_format_listing_aligned() {
        let entries = vec![
            CorpusEntry::new(PathBuf::from("9.md"), article("tips/9", "9", true, "")),
            CorpusEntry::new(PathBuf::from("10.md"), article("tips/10", "10", false, "")),
        ];
        let output = format_listing(&entries);
        assert_eq!(
            output,
            " 9  tips/9   Tip 9\n10  tips/10  Tip 10 (unpublished)\n"
        );
    }

    #[test]
    fn test_format_article() {
        let a = article("tips/142", "142", true, "*Updated 2020-04-06*\n\n```cpp\nx;\n```\n");
        let output = format_article(Path::new("142.md"), &a);
        assert!(output.contains("file:       142.md\n"));
        assert!(output.contains("title:      Tip 142\n"));
        assert!(output.contains("order:      142\n"));
        assert!(output.contains("updated:    2020-04-06\n"));
        assert!(output.contains("code:       cpp\n"));
        assert!(!output.contains("sidenav:"));
    }

    #[test]
    fn test_format_report() {
        let report = CheckReport {
            checked: 1,
            problems: vec![TipcheckError::MissingRequiredField("order".into()).in_file("a.md")],
            order_gaps: Vec::new(),
        };
        assert_eq!(
            format_report(&report),
            "a.md: Missing required field: order\n1 article checked, 1 problem\n"
        );
    }

    #[test]
    fn test_format_clean_report() {
        let report = CheckReport {
            checked: 2,
            ..CheckReport::default()
        };
        assert_eq!(format_report(&report), "2 articles checked, 0 problems\n");
    }
}
