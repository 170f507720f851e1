//! Channel correction and blending over a grid of sample colors.

use approx::assert_abs_diff_eq;
use rsr_color::Color4f;
use std::io;
use std::sync::{Arc, Mutex};

const CHANNELS: [f32; 7] = [-2.0, -0.01, 0.0, 0.4, 1.0, 1.01, 3.5];

fn sample_colors() -> impl Iterator<Item = Color4f> {
    CHANNELS.iter().flat_map(|&r| {
        CHANNELS.iter().flat_map(move |&g| {
            CHANNELS
                .iter()
                .map(move |&b| Color4f::new(r, g, b, CHANNELS[(r.abs() * 3.0) as usize % 7]))
        })
    })
}

#[test]
fn correct_brings_every_channel_into_range() {
    for c in sample_colors() {
        let fixed = c.corrected();
        assert!(fixed.is_in_range(), "{c:?} -> {fixed:?}");

        for (before, after) in c.to_array().into_iter().zip(fixed.to_array()) {
            if (0.0..=1.0).contains(&before) {
                assert_eq!(before, after);
            } else if before < 0.0 {
                assert_eq!(after, 0.0);
            } else {
                assert_eq!(after, 1.0);
            }
        }
    }
}

#[test]
fn correct_is_idempotent() {
    for c in sample_colors() {
        let once = c.corrected();
        assert_eq!(once.corrected(), once);
    }
}

#[test]
fn blending_in_range_colors_stays_in_range() {
    let in_range: Vec<Color4f> = sample_colors().filter(|c| c.is_in_range()).collect();
    assert!(!in_range.is_empty());
    for a in &in_range {
        for b in &in_range {
            let c = *a + *b;
            assert_abs_diff_eq!(c, c.corrected(), epsilon = 1e-6);
        }
    }
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_traces(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn correct_traces_only_when_clamping() {
    let quiet = capture_traces(|| {
        let mut c = Color4f::rgb(0.5, 0.5, 0.5);
        c.correct();
    });
    assert!(quiet.is_empty(), "{quiet}");

    let out = capture_traces(|| {
        let mut c = Color4f::rgb(1.5, 0.5, -0.5);
        c.correct();
    });
    assert!(out.contains("color corrected"), "{out}");
}

#[test]
fn correct_is_silent_for_nan_channels() {
    let mut c = Color4f::new(f32::NAN, 0.5, 0.5, 0.5);
    let out = capture_traces(|| c.correct());
    assert!(out.is_empty(), "{out}");
    assert!(c.red.is_nan());
    assert_eq!((c.green, c.blue, c.alpha), (0.5, 0.5, 0.5));

    let out = capture_traces(|| {
        let mut c = Color4f::new(f32::NAN, 0.5, 1.5, 0.5);
        c.correct();
    });
    assert!(out.contains("color corrected"), "{out}");
}
