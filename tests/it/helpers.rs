//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCanvasBuilder` - Builder pattern for canvases with replayed strokes
//! - `write_fresh_weights()` - Saves a loadable weights record to disk
//! - `poll_to_terminal()` - Drives a gateway out of its Loading state
//! - Common assertions shared by the pipeline tests

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use burn::module::Module;
use burn::record::{FullPrecisionSettings, NamedMpkFileRecorder};

use sketchpad::canvas::SketchCanvas;
use sketchpad::classifier::{InferenceBackend, NetConfig};
use sketchpad::constants::{BLANK, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_BRUSH_RADIUS};
use sketchpad::gateway::InferenceGateway;
use sketchpad::region::InkRegion;

// ============================================================================
// TestCanvasBuilder - Builder pattern for drawn canvases
// ============================================================================

/// Builder for canvases with strokes already rasterized onto them.
///
/// # Example
/// ```ignore
/// let canvas = TestCanvasBuilder::new()
///     .with_stroke(&[(100, 100), (200, 150)])
///     .with_stroke(&[(320, 320)])
///     .build();
/// ```
pub struct TestCanvasBuilder {
    width: usize,
    height: usize,
    brush_radius: i32,
    strokes: Vec<Vec<(i32, i32)>>,
}

impl Default for TestCanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCanvasBuilder {
    /// Full-size canvas with the default brush and no ink.
    pub fn new() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            strokes: Vec::new(),
        }
    }

    /// Overrides the canvas dimensions.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Overrides the brush radius.
    pub fn with_brush(mut self, radius: i32) -> Self {
        self.brush_radius = radius;
        self
    }

    /// Queues one stroke: a pointer-down at the first point, drag through
    /// the rest, then a release.
    pub fn with_stroke(mut self, points: &[(i32, i32)]) -> Self {
        self.strokes.push(points.to_vec());
        self
    }

    /// Builds the canvas and replays every queued stroke.
    pub fn build(self) -> SketchCanvas {
        let mut canvas = SketchCanvas::new(self.width, self.height, self.brush_radius);
        for stroke in &self.strokes {
            for &point in stroke {
                canvas.stroke_to(point);
            }
            canvas.end_stroke();
        }
        canvas
    }
}

// ============================================================================
// Gateway fixtures
// ============================================================================

/// Canonical label set used across the gateway tests.
pub fn test_labels() -> Vec<String> {
    vec![
        "circle".to_string(),
        "square".to_string(),
        "star".to_string(),
    ]
}

/// Writes a freshly initialized weights record to `path` so load paths can
/// be exercised without a real training run.
pub fn write_fresh_weights(path: &Path, num_classes: usize) {
    let device = Default::default();
    let model = NetConfig::new(num_classes).init::<InferenceBackend>(&device);
    let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
    model
        .save_file(path, &recorder)
        .expect("writing test weights should succeed");
}

/// Polls `gateway` until it leaves Loading, failing the test if it never
/// reaches a terminal state.
pub fn poll_to_terminal(gateway: &mut InferenceGateway) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while !gateway.is_ready() && gateway.failure().is_none() {
        assert!(
            Instant::now() < deadline,
            "gateway never reached a terminal state"
        );
        gateway.poll();
        thread::sleep(Duration::from_millis(5));
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Asserts the region is square and lies fully inside `canvas`.
pub fn assert_square_in_bounds(region: &InkRegion, canvas: &SketchCanvas) {
    assert_eq!(region.width, region.height, "region is not square");
    assert!(
        region.x_min + region.width <= canvas.width(),
        "region overhangs the right edge"
    );
    assert!(
        region.y_min + region.height <= canvas.height(),
        "region overhangs the bottom edge"
    );
}

// ============================================================================
// Tests for the helpers themselves
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_blank_canvas() {
        let canvas = TestCanvasBuilder::new().build();
        assert!(!canvas.has_ink());
        assert_eq!(canvas.width(), CANVAS_WIDTH);
        assert_eq!(canvas.height(), CANVAS_HEIGHT);
    }

    #[test]
    fn test_builder_replays_strokes() {
        let canvas = TestCanvasBuilder::new()
            .with_stroke(&[(100, 100), (200, 100)])
            .build();
        assert!(canvas.has_ink());
    }

    #[test]
    fn test_builder_separates_strokes() {
        let canvas = TestCanvasBuilder::new()
            .with_brush(1)
            .with_stroke(&[(10, 10)])
            .with_stroke(&[(100, 10)])
            .build();

        // Nothing connects the two stamps
        let gap_inked = (20..=90)
            .any(|x| (0..canvas.height()).any(|y| canvas.pixel(x, y) != BLANK));
        assert!(!gap_inked);
    }
}
