use std::sync::Mutex;

use super::*;

/// Fake tracer: returns a canned result per file name, and records each call's threshold.
struct Scripted {
    calls: Mutex<Vec<(String, u8)>>,
    respond: fn(&str, u8) -> AnimResult<TracedImage>,
}

impl Scripted {
    fn new(respond: fn(&str, u8) -> AnimResult<TracedImage>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            respond,
        }
    }

    fn calls(&self) -> Vec<(String, u8)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Tracer for Scripted {
    fn trace(&self, image: &Path, params: &TraceParams) -> AnimResult<TracedImage> {
        let name = image.file_name().unwrap().to_string_lossy().into_owned();
        self.calls
            .lock()
            .unwrap()
            .push((name.clone(), params.threshold));
        (self.respond)(&name, params.threshold)
    }
}

fn traced(path: &str) -> AnimResult<TracedImage> {
    Ok(TracedImage {
        path: path.to_string(),
        width: 100,
        height: 100,
    })
}

fn empty(name: &str) -> AnimResult<TracedImage> {
    Err(AnimError::NoPathData(PathBuf::from(name)))
}

#[test]
fn retries_once_at_high_threshold() {
    let tracer = Scripted::new(|name, t| if t < 250 { empty(name) } else { traced("M1 1 L9 9 Z") });
    let out = trace_with_retry(&tracer, Path::new("a.png"), &TraceParams::default()).unwrap();
    assert_eq!(out.path, "M1 1 L9 9 Z");
    assert_eq!(tracer.calls(), vec![("a.png".into(), 128), ("a.png".into(), 250)]);
}

#[test]
fn no_retry_when_threshold_already_high() {
    let tracer = Scripted::new(|name, _| empty(name));
    let params = TraceParams::default().with_threshold(200);
    let err = trace_with_retry(&tracer, Path::new("a.png"), &params).unwrap_err();
    assert!(err.is_no_path_data());
    assert_eq!(tracer.calls().len(), 1);
}

#[test]
fn no_retry_for_other_errors() {
    let tracer = Scripted::new(|_, _| Err(AnimError::trace("boom")));
    let err = trace_with_retry(&tracer, Path::new("a.png"), &TraceParams::default()).unwrap_err();
    assert!(matches!(err, AnimError::Trace(_)));
    assert_eq!(tracer.calls().len(), 1);
}

#[test]
fn failed_retry_reports_first_error() {
    let tracer = Scripted::new(|name, t| {
        if t < 250 {
            empty(name)
        } else {
            Err(AnimError::trace("second attempt"))
        }
    });
    let err = trace_with_retry(&tracer, Path::new("a.png"), &TraceParams::default()).unwrap_err();
    assert!(err.is_no_path_data(), "{err}");
}

#[test]
fn converts_in_order_with_sanitize_and_precision() {
    let tracer = Scripted::new(|name, _| match name {
        "1.png" => traced("M0 0 L100 0 L100 100 L0 100 Z M10.44 10.56 L40.5 10 L40 40 Z"),
        _ => traced("M20.2 20.7 L60 20 L60 60 Z"),
    });
    let images = vec![PathBuf::from("1.png"), PathBuf::from("2.png")];
    let seen = Mutex::new(Vec::new());
    let out = convert_images(&tracer, &images, &TraceParams::default(), 0, &|done, total| {
        seen.lock().unwrap().push((done, total))
    })
    .unwrap();

    assert_eq!(
        out.paths,
        vec!["M10 11 L41 10 L40 40 Z".to_string(), "M20 21 L60 20 L60 60 Z".to_string()]
    );
    assert_eq!(out.traced_canvas, Canvas::new(100, 100).unwrap());
    assert_eq!(*seen.lock().unwrap(), vec![(1, 2), (2, 2)]);
}

#[test]
fn first_failure_aborts_conversion() {
    let tracer = Scripted::new(|name, _| match name {
        "bad.png" => Err(AnimError::trace("corrupt")),
        _ => traced("M1 1 L9 9 Z"),
    });
    let images = vec![PathBuf::from("ok.png"), PathBuf::from("bad.png"), PathBuf::from("never.png")];
    assert!(convert_images(&tracer, &images, &TraceParams::default(), 0, &|_, _| {}).is_err());
    assert_eq!(tracer.calls().len(), 2);
}

#[test]
fn empty_image_list_is_an_input_error() {
    let tracer = Scripted::new(|_, _| traced("M1 1 Z"));
    let err = convert_images(&tracer, &[], &TraceParams::default(), 0, &|_, _| {}).unwrap_err();
    assert!(matches!(err, AnimError::Input(_)));
}
