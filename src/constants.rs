//! Application-wide constants.
//!
//! Centralizes canvas geometry, brush defaults, and preprocessing
//! parameters so the pipeline and the UI agree on them.

// ============================================================================
// Canvas Geometry
// ============================================================================

/// Canvas width in pixels
pub const CANVAS_WIDTH: usize = 640;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: usize = 640;

/// Intensity of an untouched cell (white background)
pub const BLANK: u8 = 255;

/// Intensity of a drawn cell (black ink)
pub const INK: u8 = 0;

// ============================================================================
// Brush Defaults
// ============================================================================

/// Brush radius at startup; the stamp is a square of side 2 * radius + 1
pub const DEFAULT_BRUSH_RADIUS: i32 = 3;

/// Smallest brush radius the user can shrink to
pub const MIN_BRUSH_RADIUS: i32 = 1;

// ============================================================================
// Region Extraction
// ============================================================================

/// Margin in pixels added around the ink on every side of the crop square
pub const REGION_PADDING: usize = 20;

// ============================================================================
// Preprocessing
// ============================================================================

/// Side length of the classifier input tensor
pub const TENSOR_SIDE: usize = 28;

/// Normalized ink intensity above which a resized pixel counts as drawn.
/// Matches the binarization applied when the training data was rasterized.
pub const INK_THRESHOLD: f32 = 0.9;

// ============================================================================
// Window & Timing
// ============================================================================

/// Window title
pub const WINDOW_TITLE: &str = "Sketchpad";

/// Repaint interval in milliseconds (~60 Hz)
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Width of the help toggle button in the top-right corner
pub const HELP_BUTTON_WIDTH: f32 = 60.0;

/// Height of the help toggle button
pub const HELP_BUTTON_HEIGHT: f32 = 40.0;

// ============================================================================
// Artifact Defaults
// ============================================================================

/// Model weights path used when no positional argument is given
pub const DEFAULT_MODEL_PATH: &str = "model.mpk";

/// Configuration path used when no positional argument is given
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
