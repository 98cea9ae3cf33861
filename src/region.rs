//! Ink region extraction - locates the square crop window around a drawing.
//!
//! The classifier was trained on square images with the subject roughly
//! centered and surrounded by margin, so the crop window is the bounding
//! square of the ink grown by a fixed margin on every side, centered on the
//! ink. Clamping against the canvas shifts the window without changing its
//! side length; the window is truncated only in the degenerate case where
//! the canvas itself is smaller than the padded square.

use crate::canvas::SketchCanvas;
use crate::constants::{BLANK, REGION_PADDING};
use crate::error::{SketchError, SketchResult};

/// Half-open crop window `[x_min, x_min + width) x [y_min, y_min + height)`.
///
/// `width == height` except when the canvas is smaller than the derived
/// square side (see [`InkRegion::locate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkRegion {
    pub x_min: usize,
    pub y_min: usize,
    pub width: usize,
    pub height: usize,
}

impl InkRegion {
    /// Finds the crop window around the ink on `canvas`.
    ///
    /// Fails with [`SketchError::EmptyCanvas`] iff every cell is background.
    /// Otherwise the window side is the larger bounding-box extent of the
    /// ink plus [`REGION_PADDING`] on each side, centered on the ink. A
    /// window overhanging the high canvas edge is shifted toward the origin
    /// by the overflow, then the low edge is clamped at zero. The high edge
    /// is truncated to the canvas only when the canvas is smaller than the
    /// window side.
    pub fn locate(canvas: &SketchCanvas) -> SketchResult<InkRegion> {
        let (w, h) = (canvas.width(), canvas.height());
        let pixels = canvas.pixels();

        let mut x_lo = w;
        let mut x_hi = 0;
        let mut y_lo = h;
        let mut y_hi = 0;
        let mut found = false;

        for y in 0..h {
            let row = &pixels[y * w..(y + 1) * w];
            let Some(first) = row.iter().position(|&cell| cell != BLANK) else {
                continue;
            };
            let last = row.iter().rposition(|&cell| cell != BLANK).unwrap_or(first);

            if !found {
                y_lo = y;
                found = true;
            }
            y_hi = y;
            x_lo = x_lo.min(first);
            x_hi = x_hi.max(last);
        }

        if !found {
            return Err(SketchError::EmptyCanvas);
        }

        let side = (x_hi - x_lo + 1).max(y_hi - y_lo + 1) + 2 * REGION_PADDING;
        let x_min = place_span(x_lo, x_hi, side, w);
        let y_min = place_span(y_lo, y_hi, side, h);

        Ok(InkRegion {
            x_min,
            y_min,
            width: side.min(w - x_min),
            height: side.min(h - y_min),
        })
    }
}

/// Low edge of a half-open span of length `side`, centered on the inclusive
/// ink extent `[lo, hi]`, shifted toward the origin when it overhangs
/// `limit`, clamped at zero.
fn place_span(lo: usize, hi: usize, side: usize, limit: usize) -> usize {
    let mut low = ((lo + hi + 1) as i64 - side as i64).div_euclid(2);

    let overflow = low + side as i64 - limit as i64;
    if overflow > 0 {
        low -= overflow;
    }
    low.max(0) as usize
}
