use super::*;

fn tokens(s: &str) -> Vec<&str> {
    NumberScanner::new(s).map(|r| &s[r]).collect()
}

#[test]
fn scanner_matches_legacy_token_shape() {
    assert_eq!(tokens("M10.7,20.3"), vec!["10.7", "20.3"]);
    assert_eq!(tokens("M-1-2.5 L3."), vec!["-1", "-2.5", "3."]);
    assert_eq!(tokens("c.5 1e3"), vec!["5", "1", "3"]);
    assert_eq!(tokens("M - 4"), vec!["4"]);
    assert_eq!(tokens("1.2.3"), vec!["1.2", "3"]);
    assert!(tokens("MZ").is_empty());
}

#[test]
fn numeric_values_parse_trailing_dot() {
    assert_eq!(numeric_values("L3. -4"), vec![3.0, -4.0]);
}

#[test]
fn split_cuts_at_every_move() {
    let parts = split_subpaths("M0 0 L10 0 L10 10 Z M20 20 L30 20 L30 30 Z");
    assert_eq!(parts, vec!["M0 0 L10 0 L10 10 Z", "M20 20 L30 20 L30 30 Z"]);
}

#[test]
fn split_treats_relative_move_as_move() {
    let parts = split_subpaths("M0 0 l5 5 z m10 10 l1 1 z");
    assert_eq!(parts, vec!["M0 0 l5 5 z", "m10 10 l1 1 z"]);
}

#[test]
fn split_without_move_returns_whole_input() {
    assert_eq!(split_subpaths("L1 2 L3 4"), vec!["L1 2 L3 4"]);
    assert_eq!(split_subpaths(""), vec![""]);
}

#[test]
fn split_drops_prefix_and_bare_moves() {
    assert_eq!(split_subpaths("L1 1 M2 2 L3 3"), vec!["M2 2 L3 3"]);
    assert_eq!(split_subpaths("MM1 1 L2 2"), vec!["M1 1 L2 2"]);
}

#[test]
fn bounding_box_samples_consecutive_pairs() {
    let bb = BoundingBox::sample("M10 20 L50 20 L50 80 L10 80 Z");
    assert_eq!(bb.min_x, 10.0);
    assert_eq!(bb.min_y, 20.0);
    assert_eq!(bb.max_x, 50.0);
    assert_eq!(bb.max_y, 80.0);
    assert_eq!(bb.area(), 40.0 * 60.0);
}

#[test]
fn bounding_box_ignores_odd_trailing_token() {
    let bb = BoundingBox::sample("M0 0 L10 10 L500");
    assert_eq!(bb.max_x, 10.0);
    assert_eq!(bb.max_y, 10.0);
}

#[test]
fn bounding_box_with_too_few_tokens_is_degenerate() {
    let bb = BoundingBox::sample("M5 5 Z");
    assert_eq!(bb, BoundingBox::default());
    assert_eq!(bb.area(), 0.0);
}

#[test]
fn area_order_is_descending_and_stable() {
    let small = "M0 0 L2 0 L2 2 L0 2 Z";
    let big = "M0 0 L50 0 L50 50 L0 50 Z";
    let small_twin = "M10 10 L12 10 L12 12 L10 12 Z";
    let joined = format!("{small} {big} {small_twin}");
    assert_eq!(split_subpaths_by_area(&joined), vec![big, small, small_twin]);
}
