use super::*;

#[test]
fn canvas_rejects_zero_axes() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(640, 480).unwrap();
    assert_eq!(c.width_f64(), 640.0);
    assert_eq!(c.height_f64(), 480.0);
}

#[test]
fn fps_validation_and_timing() {
    assert!(Fps::new(0.0).is_err());
    assert!(Fps::new(-3.0).is_err());
    assert!(Fps::new(f64::NAN).is_err());
    assert!(Fps::new(f64::INFINITY).is_err());

    let fps = Fps::new(10.0).unwrap();
    assert_eq!(fps.frame_duration_ms(), 100.0);
    assert!((fps.duration_secs(5) - 0.5).abs() < 1e-12);
    assert_eq!(fps.to_string(), "10");
    assert_eq!(Fps::default().as_f64(), 12.0);
}

#[test]
fn fps_serde_is_a_plain_number() {
    let fps: Fps = serde_json::from_str("24").unwrap();
    assert_eq!(fps.as_f64(), 24.0);
    assert_eq!(serde_json::to_string(&fps).unwrap(), "24.0");
    assert!(serde_json::from_str::<Fps>("0").is_err());
}
