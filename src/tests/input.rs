use super::{find_headings, heading_text, load_document, parse_document};
use crate::error::Error;
use crate::formats::markdown::MarkdownFormat;
use std::io::Write;
use tempfile::NamedTempFile;

const PORTFOLIO: &str = "# Ada Lovelace

Analyst and *poet* of science.

## About {#about-me}

I write notes.

### Background

More.

## Skills

- Mathematics
- Engines

```text
# not a heading
```

## Skills

Duplicate.
";

#[test]
fn test_heading_text() {
    assert_eq!(heading_text("## About"), "About");
    assert_eq!(heading_text("## Closed ##"), "Closed");
    assert_eq!(heading_text("## C#"), "C#");
    assert_eq!(heading_text("##"), "");
}

#[test]
fn test_find_headings_skips_code_blocks() {
    let headings = find_headings(PORTFOLIO, &MarkdownFormat).unwrap();
    let found: Vec<(usize, &str)> = headings
        .iter()
        .map(|h| (h.level, h.text.as_str()))
        .collect();

    assert_eq!(
        found,
        vec![
            (1, "Ada Lovelace"),
            (2, "About {#about-me}"),
            (3, "Background"),
            (2, "Skills"),
            (2, "Skills"),
        ]
    );
    assert_eq!(headings[0].line, 0);
    assert_eq!(headings[1].line, 4);
}

#[test]
fn test_parse_document_structure() {
    let doc = parse_document(PORTFOLIO, &MarkdownFormat).unwrap();

    assert_eq!(doc.title.as_deref(), Some("Ada Lovelace"));
    assert_eq!(doc.intro, "Analyst and *poet* of science.");
    assert_eq!(doc.section_ids(), vec!["about-me", "skills", "skills-2"]);

    let about = &doc.sections[0];
    assert_eq!(about.title, "About");
    assert!(about.body.starts_with("I write notes."));
    assert!(about.body.contains("### Background"));
    assert!(about.body.ends_with("More."));

    let skills = &doc.sections[1];
    assert!(skills.body.contains("- Engines"));
    assert!(skills.body.contains("# not a heading"));
    assert_eq!(doc.sections[2].body, "Duplicate.");
}

#[test]
fn test_document_without_title() {
    let doc = parse_document("## One\n\nfirst\n\n## Two\n\nsecond\n", &MarkdownFormat).unwrap();
    assert_eq!(doc.title, None);
    assert_eq!(doc.intro, "");
    assert_eq!(doc.section_ids(), vec!["one", "two"]);
}

#[test]
fn test_load_document_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{PORTFOLIO}").unwrap();

    let doc = load_document(file.path(), &MarkdownFormat).unwrap();
    assert_eq!(doc.sections.len(), 3);
}

#[test]
fn test_load_document_without_sections() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Only a title\n\nAnd some text.").unwrap();

    let err = load_document(file.path(), &MarkdownFormat).unwrap_err();
    assert!(matches!(err, Error::NoSections(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_document(&dir.path().join("missing.md"), &MarkdownFormat).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
