//! Error types for the capture and recognition pipeline
//!
//! Provides unified error handling for canvas analysis, configuration
//! loading, and classifier operations.

use thiserror::Error;

/// Errors that can occur in the sketch pipeline
#[derive(Error, Debug)]
pub enum SketchError {
    /// The canvas holds no ink, so there is nothing to classify
    #[error("canvas is empty")]
    EmptyCanvas,

    /// The classifier weights could not be loaded
    #[error("model load failed: {reason}")]
    ModelLoad { reason: String },

    /// A prediction was requested before the classifier reached Ready
    #[error("classifier is not ready")]
    NotReady,

    /// The configuration file is missing required data or inconsistent
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The forward pass produced no usable distribution
    #[error("inference failed: {0}")]
    Inference(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations
pub type SketchResult<T> = Result<T, SketchError>;
