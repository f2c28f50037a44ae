use super::{content_height, page_width, AppState};
use crate::config::Config;
use crate::input::Document;
use crate::section::Section;

fn section(id: &str, body: String) -> Section {
    Section {
        id: id.to_string(),
        title: id.to_uppercase(),
        level: 2,
        line: 0,
        body,
    }
}

/// Three sections of 23 rows each: tops at 0, 23 and 46.
fn tall_document() -> Document {
    let body = (0..20)
        .map(|i| format!("- line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    Document {
        title: None,
        intro: String::new(),
        sections: vec![
            section("a", body.clone()),
            section("b", body.clone()),
            section("c", body),
        ],
    }
}

fn settle(app: &mut AppState) {
    for _ in 0..100 {
        app.frame();
        if !app.is_animating() {
            break;
        }
    }
}

#[test]
fn test_chrome_dimensions() {
    assert_eq!(content_height(20), 16);
    assert_eq!(content_height(2), 0);
    assert_eq!(page_width(100, 100), 98);
    assert_eq!(page_width(200, 100), 100);
}

#[test]
fn test_first_section_active_on_mount() {
    let app = AppState::new(tall_document(), &Config::default(), 100, 20);
    assert_eq!(app.page.height(), 69);
    assert_eq!(app.viewport.max_offset(), 53);
    assert_eq!(app.tracker.active(), Some("a"));
}

#[test]
fn test_scroll_waits_for_frame() {
    let mut app = AppState::new(tall_document(), &Config::default(), 100, 20);

    app.scroll_by(10);
    app.scroll_by(10);
    assert_eq!(app.tracker.active(), Some("a"));

    assert!(app.frame());
    assert_eq!(app.viewport.offset(), 20);
    assert_eq!(app.tracker.active(), Some("b"));
}

#[test]
fn test_scroll_to_glides_and_highlights() {
    let mut app = AppState::new(tall_document(), &Config::default(), 100, 20);

    app.scroll_to("c");
    assert!(app.is_animating());
    assert_eq!(app.tracker.active(), Some("a"));

    settle(&mut app);
    assert_eq!(app.viewport.offset(), 46);
    assert_eq!(app.tracker.active(), Some("c"));
}

#[test]
fn test_scroll_to_unknown_section_keeps_position() {
    let mut app = AppState::new(tall_document(), &Config::default(), 100, 20);
    app.scroll_to("nowhere");
    assert!(!app.is_animating());
    assert_eq!(app.viewport.offset(), 0);
}

#[test]
fn test_next_and_prev_section() {
    let mut app = AppState::new(tall_document(), &Config::default(), 100, 20);

    app.next_section();
    settle(&mut app);
    assert_eq!(app.viewport.offset(), 23);
    assert_eq!(app.tracker.active(), Some("b"));

    app.prev_section();
    settle(&mut app);
    assert_eq!(app.viewport.offset(), 0);
    assert_eq!(app.tracker.active(), Some("a"));
}

#[test]
fn test_scroll_end_reaches_last_section() {
    let mut app = AppState::new(tall_document(), &Config::default(), 100, 20);
    app.scroll_end();
    app.frame();
    assert_eq!(app.viewport.offset(), 53);
    assert_eq!(app.tracker.active(), Some("c"));
    assert_eq!(app.scroll_percent(), 100);

    app.scroll_home();
    app.frame();
    assert_eq!(app.tracker.active(), Some("a"));
    assert_eq!(app.scroll_percent(), 0);
}

#[test]
fn test_header_condenses_after_threshold() {
    let mut app = AppState::new(tall_document(), &Config::default(), 100, 20);
    assert!(!app.is_condensed());
    app.scroll_by(1);
    assert!(!app.is_condensed());
    app.scroll_by(1);
    assert!(app.is_condensed());
}

#[test]
fn test_menu_only_opens_when_compact() {
    let mut wide = AppState::new(tall_document(), &Config::default(), 100, 20);
    wide.toggle_menu();
    assert!(!wide.menu_open);

    let mut narrow = AppState::new(tall_document(), &Config::default(), 60, 20);
    assert!(narrow.is_compact());
    narrow.toggle_menu();
    assert!(narrow.menu_open);

    narrow.scroll_to_index(1);
    assert!(!narrow.menu_open);
    settle(&mut narrow);
    assert_eq!(narrow.tracker.active(), Some("b"));
}

#[test]
fn test_resize_changes_active_section_without_scrolling() {
    let words = vec!["word"; 30].join(" ");
    let doc = Document {
        title: None,
        intro: String::new(),
        sections: vec![section("a", words), section("b", "short".to_string())],
    };
    let mut app = AppState::new(doc, &Config::default(), 100, 6);
    assert_eq!(app.page.height(), 9);

    app.scroll_by(4);
    app.frame();
    assert_eq!(app.tracker.active(), Some("b"));

    app.resize(12, 6);
    assert_eq!(app.viewport.offset(), 4);
    app.frame();
    assert_eq!(app.viewport.offset(), 4);
    assert_eq!(app.tracker.active(), Some("a"));
}

#[test]
fn test_sections_reveal_as_they_arrive() {
    let mut app = AppState::new(tall_document(), &Config::default(), 100, 20);
    assert!(app.reveal.is_revealed("a"));
    assert!(!app.reveal.is_revealed("c"));

    app.scroll_end();
    app.frame();
    assert!(app.reveal.is_revealed("c"));

    app.scroll_home();
    app.frame();
    assert!(app.reveal.is_revealed("c"));
}

#[test]
fn test_close_detaches_tracker() {
    let mut app = AppState::new(tall_document(), &Config::default(), 100, 20);
    app.close();
    app.scroll_by(30);
    app.frame();
    assert_eq!(app.tracker.active(), Some("a"));
}
