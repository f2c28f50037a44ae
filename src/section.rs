//! Section representation for a parsed portfolio document.
//!
//! A section is one navigable region of the page, introduced by a level-2 heading. Sections keep
//! the anchor identifier the navigation bar links to, the heading text shown as the link label,
//! and the body text laid out beneath the heading.

#[derive(Clone, Debug, PartialEq)]
/// Named page region corresponding to one navigation link.
pub struct Section {
    /// Anchor identifier, unique within the document (e.g. `about`).
    pub id: String,
    /// Heading text without markup symbols or the `{#id}` suffix.
    pub title: String,
    /// Heading depth that introduced the section.
    pub level: usize,
    /// Zero-based source line of the heading.
    pub line: usize,
    /// Markdown between this heading and the next section heading.
    pub body: String,
}

/// Split an optional trailing `{#anchor}` off a heading title.
#[must_use]
pub fn split_anchor(title: &str) -> (&str, Option<&str>) {
    let trimmed = title.trim_end();
    if let Some(stripped) = trimmed.strip_suffix('}') {
        if let Some(open) = stripped.rfind("{#") {
            let anchor = stripped[open + 2..].trim();
            if !anchor.is_empty() {
                return (stripped[..open].trim_end(), Some(anchor));
            }
        }
    }
    (trimmed, None)
}

/// Derive an anchor identifier from heading text.
///
/// Letters and digits are lowercased and kept, runs of whitespace, hyphens and underscores
/// collapse to a single hyphen, and everything else is dropped.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Make `candidate` unique among `taken` by appending `-2`, `-3`, ...
#[must_use]
pub fn unique_id(candidate: String, taken: &[String]) -> String {
    if !taken.contains(&candidate) {
        return candidate;
    }
    let mut n = 2;
    loop {
        let id = format!("{candidate}-{n}");
        if !taken.contains(&id) {
            return id;
        }
        n += 1;
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
