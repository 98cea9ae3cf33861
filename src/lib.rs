//! Sketchpad - draw a shape, get a guess.
//!
//! An interactive sketch capture and recognition pad: a persistent pixel
//! canvas fed by pointer input, a geometric crop-window extraction step, a
//! normalization pipeline that converts a freehand stroke into the exact
//! tensor format the classifier expects, and an asynchronous model-loading
//! handoff so the interface stays responsive while weights load.
//!
//! Pipeline, leaf-first:
//! - `canvas` - the drawing surface and stroke rasterization
//! - `region` - crop-window extraction around the ink
//! - `preprocess` - crop, resize, binarize into classifier input form
//! - `classifier` - the loaded network and its forward pass
//! - `gateway` - background loading plus synchronous prediction
//! - `app` - the event/render loop tying the stages together

pub mod app;
pub mod canvas;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod preprocess;
pub mod region;

pub use app::SketchPad;
pub use canvas::SketchCanvas;
pub use config::PadConfig;
pub use error::{SketchError, SketchResult};
pub use gateway::{InferenceGateway, Prediction};
pub use preprocess::{BinaryTensor, preprocess};
pub use region::InkRegion;
