use std::sync::Mutex;

use super::*;
use crate::{foundation::error::AnimError, path::scan::BoundingBox};

const SQUARE: &str = "M10 10 L50 10 L50 50 L10 50 Z";
const BIG: &str = "M0 0 L90 0 L90 90 L0 90 Z";
const HOLE: &str = "M30 30 L40 30 L40 40 L30 40 Z";
const HOLE_MOVED: &str = "M50 50 L60 50 L60 60 L50 60 Z";

/// Records every pair it is asked to morph and echoes `from|to@t`.
#[derive(Default)]
struct Recording {
    pairs: Mutex<Vec<(String, String)>>,
}

impl ShapeMorpher for Recording {
    fn interpolator(&self, from: &str, to: &str) -> AnimResult<Interpolator> {
        self.pairs
            .lock()
            .unwrap()
            .push((from.to_string(), to.to_string()));
        let tag = format!("{from}|{to}");
        Ok(Box::new(move |t| format!("{tag}@{t}")))
    }
}

struct Failing;

impl ShapeMorpher for Failing {
    fn interpolator(&self, _from: &str, _to: &str) -> AnimResult<Interpolator> {
        Err(AnimError::morph("degenerate"))
    }
}

#[test]
fn schedule_excludes_endpoints() {
    let ts: Vec<f64> = progress_schedule(3).collect();
    assert_eq!(ts, vec![0.25, 0.5, 0.75]);
    assert_eq!(progress_schedule(0).count(), 0);
    let one: Vec<f64> = progress_schedule(1).collect();
    assert_eq!(one, vec![0.5]);
}

#[test]
fn compound_shapes_pair_by_area_rank() {
    let engine = TweenEngine::new(Recording::default());
    let from = format!("{HOLE} {BIG}");
    let to = format!("{BIG} {HOLE_MOVED}");
    let tweens = engine.try_generate_tweens(&from, &to, 1).unwrap();

    let pairs = engine.morpher().pairs.lock().unwrap().clone();
    assert_eq!(
        pairs,
        vec![
            (BIG.to_string(), BIG.to_string()),
            (HOLE.to_string(), HOLE_MOVED.to_string()),
        ]
    );
    assert_eq!(
        tweens,
        vec![format!("{BIG}|{BIG}@0.5 {HOLE}|{HOLE_MOVED}@0.5")]
    );
}

#[test]
fn mismatched_counts_fall_back_to_whole_path() {
    let engine = TweenEngine::new(Recording::default());
    let from = format!("{BIG} {HOLE}");
    let tweens = engine.try_generate_tweens(&from, SQUARE, 2).unwrap();
    let pairs = engine.morpher().pairs.lock().unwrap().clone();
    assert_eq!(pairs, vec![(from.clone(), SQUARE.to_string())]);
    assert_eq!(tweens.len(), 2);
    assert!(tweens[0].ends_with(&format!("@{}", 1.0 / 3.0)));
}

#[test]
fn single_outlines_use_whole_path() {
    let engine = TweenEngine::new(Recording::default());
    engine.try_generate_tweens(SQUARE, BIG, 1).unwrap();
    assert_eq!(engine.morpher().pairs.lock().unwrap().len(), 1);
}

#[test]
fn failure_substitutes_copies_of_from() {
    let engine = TweenEngine::new(Failing);
    assert!(engine.try_generate_tweens(SQUARE, BIG, 3).is_err());

    let out = engine.interval(SQUARE, BIG, 3);
    assert!(out.fell_back);
    assert_eq!(out.paths, vec![SQUARE.to_string(); 3]);
    assert_eq!(engine.generate_tweens(SQUARE, BIG, 5).len(), 5);
}

#[test]
fn zero_count_never_calls_the_morpher() {
    let engine = TweenEngine::new(Failing);
    let out = engine.interval(SQUARE, BIG, 0);
    assert!(out.paths.is_empty());
    assert!(!out.fell_back);
}

#[test]
fn identical_keyframes_tween_to_themselves() {
    let engine: TweenEngine = TweenEngine::default();
    for path in [SQUARE.to_string(), format!("{BIG} {HOLE}")] {
        let tweens = engine.generate_tweens(&path, &path, 4);
        assert_eq!(tweens.len(), 4);
        let want = BoundingBox::sample(&path);
        for tween in &tweens {
            assert_eq!(tween, &tweens[0]);
            let got = BoundingBox::sample(tween);
            assert!((got.min_x - want.min_x).abs() < 1e-6);
            assert!((got.max_y - want.max_y).abs() < 1e-6);
        }
    }
}

#[test]
fn precision_is_applied_to_tweens() {
    let engine = TweenEngine::new(RingMorpher::default()).with_precision(Some(0));
    let tweens = engine.generate_tweens(SQUARE, BIG, 2);
    assert_eq!(tweens.len(), 2);
    for tween in tweens {
        assert!(!tween.contains('.'), "{tween}");
    }
}

#[test]
fn degenerate_geometry_falls_back_with_real_morpher() {
    let engine: TweenEngine = TweenEngine::default();
    let line = "M0 0 L10 10 Z";
    assert_eq!(engine.generate_tweens(line, SQUARE, 2), vec![line.to_string(); 2]);
}

#[test]
fn real_morpher_keeps_compound_structure() {
    let engine: TweenEngine = TweenEngine::default();
    let path = "M0 0 L100 0 L100 100 L0 100 Z M30 30 L70 30 L70 70 L30 70 Z";
    let out = engine.interval(path, path, 3);
    assert!(!out.fell_back);
    assert_eq!(out.paths.len(), 3);
    for tween in &out.paths {
        let rings = split_subpaths_by_area(tween);
        assert_eq!(rings.len(), 2, "{tween}");
        let hole = BoundingBox::sample(&rings[1]);
        assert!((hole.min_x - 30.0).abs() < 1e-6, "{tween}");
        assert!((hole.min_y - 30.0).abs() < 1e-6, "{tween}");
        assert!((hole.max_x - 70.0).abs() < 1e-6, "{tween}");
        assert!((hole.max_y - 70.0).abs() < 1e-6, "{tween}");
    }
}
