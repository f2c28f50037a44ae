use super::{slugify, split_anchor, unique_id};

#[test]
fn test_slugify_basic_titles() {
    assert_eq!(slugify("About"), "about");
    assert_eq!(slugify("Work Experience"), "work-experience");
    assert_eq!(slugify("  Skills & Tools  "), "skills-tools");
    assert_eq!(slugify("C++ / Rust_Projects"), "c-rust-projects");
}

#[test]
fn test_slugify_empty_falls_back() {
    assert_eq!(slugify(""), "section");
    assert_eq!(slugify("!!!"), "section");
}

#[test]
fn test_split_anchor() {
    assert_eq!(split_anchor("About me {#about}"), ("About me", Some("about")));
    assert_eq!(split_anchor("Contact"), ("Contact", None));
    assert_eq!(split_anchor("Braces {#}"), ("Braces {#}", None));
}

#[test]
fn test_unique_id_suffixes() {
    let taken = vec!["skills".to_string(), "skills-2".to_string()];
    assert_eq!(unique_id("about".to_string(), &taken), "about");
    assert_eq!(unique_id("skills".to_string(), &taken), "skills-3");
}
