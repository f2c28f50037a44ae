use super::Viewport;
use crate::scroll::Scroller;

#[test]
fn test_scroll_is_clamped() {
    let mut viewport = Viewport::new(10, 100, 4);
    assert_eq!(viewport.max_offset(), 90);

    assert!(viewport.scroll_by(200));
    assert_eq!(viewport.offset(), 90);
    assert!(!viewport.scroll_by(5));

    assert!(viewport.scroll_by(-500));
    assert_eq!(viewport.offset(), 0);
}

#[test]
fn test_short_content_never_scrolls() {
    let mut viewport = Viewport::new(40, 10, 4);
    assert_eq!(viewport.max_offset(), 0);
    assert!(!viewport.scroll_by(3));
}

#[test]
fn test_smooth_scroll_reaches_target() {
    let mut viewport = Viewport::new(10, 100, 4);
    viewport.scroll_smooth(50);
    assert!(viewport.is_animating());
    assert_eq!(viewport.animation_target(), Some(50));

    let mut frames = 0;
    while viewport.is_animating() {
        viewport.tick();
        frames += 1;
    }
    assert_eq!(frames, 4);
    assert_eq!(viewport.offset(), 50);
    assert!(!viewport.tick());
}

#[test]
fn test_smooth_scroll_target_is_clamped() {
    let mut viewport = Viewport::new(10, 100, 2);
    viewport.scroll_smooth(1_000);
    assert_eq!(viewport.animation_target(), Some(90));
}

#[test]
fn test_smooth_scroll_to_current_offset_is_noop() {
    let mut viewport = Viewport::new(10, 100, 4);
    viewport.scroll_smooth(0);
    assert!(!viewport.is_animating());
}

#[test]
fn test_instant_scroll_cancels_glide() {
    let mut viewport = Viewport::new(10, 100, 4);
    viewport.scroll_smooth(80);
    viewport.tick();
    viewport.scroll_by(1);
    assert!(!viewport.is_animating());
}

#[test]
fn test_resize_clamps_offset() {
    let mut viewport = Viewport::new(10, 100, 4);
    viewport.set_offset(80);
    assert!(viewport.resize(10, 50));
    assert_eq!(viewport.offset(), 40);
    assert_eq!(viewport.content_height(), 50);
    assert_eq!(viewport.height(), 10);
}
