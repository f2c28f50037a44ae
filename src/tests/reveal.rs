use super::{intersection_ratio, RevealTracker};
use crate::geometry::SectionBounds;
use std::collections::HashMap;

fn geometry() -> HashMap<String, SectionBounds> {
    [("a", 0, 10), ("b", 10, 10), ("c", 100, 10)]
        .into_iter()
        .map(|(id, top, height)| (id.to_string(), SectionBounds::new(top, height)))
        .collect()
}

#[test]
fn test_intersection_ratio() {
    let bounds = SectionBounds::new(10, 10);
    assert!((intersection_ratio(bounds, 0, 15) - 0.5).abs() < f64::EPSILON);
    assert!((intersection_ratio(bounds, 0, 100) - 1.0).abs() < f64::EPSILON);
    assert!(intersection_ratio(bounds, 0, 10).abs() < f64::EPSILON);
    assert!(intersection_ratio(bounds, 20, 30).abs() < f64::EPSILON);
}

#[test]
fn test_empty_section_ratio() {
    let bounds = SectionBounds::new(5, 0);
    assert!((intersection_ratio(bounds, 0, 10) - 1.0).abs() < f64::EPSILON);
    assert!(intersection_ratio(bounds, 6, 10).abs() < f64::EPSILON);
}

#[test]
fn test_reveal_is_one_shot() {
    let geo = geometry();
    let mut reveal = RevealTracker::new(["a", "b", "c"], 0.1, 0);

    assert_eq!(reveal.update(0, 5, &geo), vec!["a".to_string()]);
    assert!(reveal.is_revealed("a"));
    assert!(!reveal.is_revealed("b"));

    assert_eq!(reveal.update(9, 5, &geo), vec!["b".to_string()]);

    // Scrolling back up reveals nothing new and hides nothing.
    assert!(reveal.update(0, 5, &geo).is_empty());
    assert!(reveal.is_revealed("b"));
    assert_eq!(reveal.revealed_count(), 2);
}

#[test]
fn test_threshold_must_be_met() {
    let geo = geometry();
    let mut reveal = RevealTracker::new(["a", "b", "c"], 0.5, 0);

    // Only 4 of b's 10 rows are in view.
    let newly = reveal.update(0, 14, &geo);
    assert_eq!(newly, vec!["a".to_string()]);

    let newly = reveal.update(0, 15, &geo);
    assert_eq!(newly, vec!["b".to_string()]);
}

#[test]
fn test_margin_reveals_just_before_arrival() {
    let geo = geometry();
    let mut without = RevealTracker::new(["c"], 0.1, 0);
    let mut with = RevealTracker::new(["c"], 0.1, 2);

    assert!(without.update(90, 10, &geo).is_empty());
    assert_eq!(with.update(90, 10, &geo), vec!["c".to_string()]);
}
