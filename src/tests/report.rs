use super::LayoutReport;
use crate::input::Document;
use crate::page::Page;
use crate::section::Section;

fn page() -> Page {
    let section = |id: &str, title: &str, body: &str| Section {
        id: id.to_string(),
        title: title.to_string(),
        level: 2,
        line: 0,
        body: body.to_string(),
    };
    let doc = Document {
        title: Some("Ada".to_string()),
        intro: "Engineer.".to_string(),
        sections: vec![
            section("about", "About", "Hello world"),
            section("skills", "Skills", "- Rust\n- Go"),
        ],
    };
    Page::new(doc, 80)
}

#[test]
fn test_report_lists_sections_and_ranges() {
    let report = LayoutReport::new(&page(), 1, None);

    assert_eq!(report.title.as_deref(), Some("Ada"));
    assert_eq!(report.width, 80);
    assert_eq!(report.height, 13);
    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.sections[0].top, 4);
    assert_eq!(report.sections[0].active_range, [3, 7]);
    assert_eq!(report.sections[1].active_range, [7, 12]);
    assert_eq!(report.active, None);
}

#[test]
fn test_report_resolves_active_section() {
    let report = LayoutReport::new(&page(), 1, Some(7));
    assert_eq!(report.at, Some(7));
    assert_eq!(report.active.as_deref(), Some("skills"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["active"], "skills");
    assert_eq!(json["sections"][1]["id"], "skills");
}

#[test]
fn test_report_omits_unrequested_fields() {
    let report = LayoutReport::new(&page(), 0, None);
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("at").is_none());
    assert!(json.get("active").is_none());
}
