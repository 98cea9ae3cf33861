//! Frame preprocessing - turns a crop window into classifier input form.
//!
//! Three steps, in order: slice the canvas at the region, resize the slice
//! to the fixed tensor side with bilinear resampling, binarize with a high
//! ink threshold so only solidly-inked pixels survive. The threshold
//! matches the binarization applied when the training data was rasterized.

use image::GrayImage;
use image::imageops::{self, FilterType};

use crate::canvas::SketchCanvas;
use crate::constants::{INK_THRESHOLD, TENSOR_SIDE};
use crate::region::InkRegion;

/// Number of cells in the classifier input tensor.
pub const TENSOR_PIXELS: usize = TENSOR_SIDE * TENSOR_SIDE;

/// Fixed 28x28 binary classifier input. 1 means ink, 0 means background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTensor([u8; TENSOR_PIXELS]);

impl BinaryTensor {
    /// Row-major cells, each exactly 0 or 1.
    pub fn cells(&self) -> &[u8; TENSOR_PIXELS] {
        &self.0
    }

    /// Cell at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.0[y * TENSOR_SIDE + x]
    }

    /// Number of ink cells.
    pub fn ink_count(&self) -> usize {
        self.0.iter().filter(|&&cell| cell == 1).count()
    }

    /// Cells widened to f32 for the classifier's input layer.
    pub fn to_floats(&self) -> Vec<f32> {
        self.0.iter().map(|&cell| f32::from(cell)).collect()
    }
}

/// Converts the canvas slice under `region` into a [`BinaryTensor`].
///
/// `region` must lie inside the canvas, which [`InkRegion::locate`]
/// guarantees. A cell ends up 1 iff its normalized ink intensity
/// (1 - value / 255) after the resize exceeds [`INK_THRESHOLD`].
pub fn preprocess(canvas: &SketchCanvas, region: &InkRegion) -> BinaryTensor {
    let patch = GrayImage::from_fn(region.width as u32, region.height as u32, |x, y| {
        image::Luma([canvas.pixel(region.x_min + x as usize, region.y_min + y as usize)])
    });

    let resized = imageops::resize(
        &patch,
        TENSOR_SIDE as u32,
        TENSOR_SIDE as u32,
        FilterType::Triangle,
    );

    let mut cells = [0u8; TENSOR_PIXELS];
    for (cell, pixel) in cells.iter_mut().zip(resized.pixels()) {
        let ink = 1.0 - f32::from(pixel.0[0]) / 255.0;
        *cell = u8::from(ink > INK_THRESHOLD);
    }
    BinaryTensor(cells)
}
