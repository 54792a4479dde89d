use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use matrices_core::{Matrix, Vector};

// Collects every trace message emitted by this crate.
struct CaptureLogger {
    messages: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Trace && record.target().starts_with("matrices_core") {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    messages: Mutex::new(Vec::new()),
};

fn traced<F: FnOnce()>(f: F) -> Vec<String> {
    LOGGER.messages.lock().unwrap().clear();
    f();
    LOGGER.messages.lock().unwrap().clone()
}

// Single test so the global logger is never raced by another test in this binary.
#[test]
fn test_every_constructor_emits_trace() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut source = || 0.5;
    let cases: Vec<(&str, Box<dyn Fn()>)> = vec![
        ("Allocating 2x3 matrix", Box::new(|| drop(Matrix::zeros(2, 3)))),
        ("Allocating 3x3 matrix", Box::new(|| drop(Matrix::identity(3)))),
        (
            "Wrapping 1x2 matrix",
            Box::new(|| drop(Matrix::from_values(1, 2, vec![1.0, 2.0]))),
        ),
        ("Allocating vector of length 4", Box::new(|| drop(Vector::zeros(4)))),
        (
            "Wrapping vector of length 2",
            Box::new(|| drop(Vector::from(vec![1.0, 2.0]))),
        ),
    ];
    for (expected, build) in cases {
        let messages = traced(build);
        assert!(
            messages.iter().any(|m| m == expected),
            "missing trace {:?}, got {:?}",
            expected,
            messages
        );
    }

    let messages = traced(|| drop(Matrix::random(2, 2, &mut source)));
    assert!(messages.iter().any(|m| m == "Drawing 2x2 random matrix"));
    let messages = traced(|| drop(Vector::random(3, &mut source)));
    assert!(messages.iter().any(|m| m == "Drawing random vector of length 3"));
}
