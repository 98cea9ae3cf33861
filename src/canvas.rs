//! Persistent drawing surface - fixed-size raster grid with brush strokes.
//!
//! The canvas is a row-major grayscale buffer allocated once and reused for
//! the whole session. Pointer samples arrive at frame rate, so consecutive
//! samples can be far apart; strokes are rasterized with an integer
//! error-accumulator (Bresenham) walk between samples so fast motion never
//! leaves gaps.

use crate::constants::{BLANK, INK, MIN_BRUSH_RADIUS};

/// The drawing surface and its brush state.
///
/// Cells hold raw intensity: [`BLANK`] (255) for untouched paper,
/// [`INK`] (0) for drawn cells. Stroke continuity is tracked by an explicit
/// `last_point` anchor: set by [`SketchCanvas::stroke_to`], cleared by
/// [`SketchCanvas::end_stroke`].
pub struct SketchCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    brush_radius: i32,

    /// Last painted point of the in-progress stroke, if one is active
    last_point: Option<(i32, i32)>,

    /// Set on every mutation; consumed by the renderer to re-upload the texture
    dirty: bool,
}

impl SketchCanvas {
    /// Creates a blank canvas of the given size with the given brush radius.
    pub fn new(width: usize, height: usize, brush_radius: i32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLANK; width * height],
            brush_radius: brush_radius.max(MIN_BRUSH_RADIUS),
            last_point: None,
            // Starts dirty so the first frame uploads the blank surface
            dirty: true,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major intensity buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Intensity at (x, y). Callers must stay in bounds.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    /// Returns true if any cell differs from the blank background.
    pub fn has_ink(&self) -> bool {
        self.pixels.iter().any(|&cell| cell != BLANK)
    }

    /// Resets every cell to background and forgets the stroke anchor.
    pub fn clear(&mut self) {
        self.pixels.fill(BLANK);
        self.last_point = None;
        self.dirty = true;
    }

    /// Extends the current stroke to `point`.
    ///
    /// The first call of a stroke stamps the brush at `point`; subsequent
    /// calls rasterize a connected line from the previous sample. Points
    /// outside the canvas are ignored and the anchor keeps its last
    /// in-bounds value, so a stroke that leaves and re-enters stays
    /// connected.
    pub fn stroke_to(&mut self, point: (i32, i32)) {
        if !self.contains(point) {
            return;
        }
        match self.last_point {
            Some(prev) => self.line(prev, point),
            None => self.stamp(point.0, point.1),
        }
        self.last_point = Some(point);
    }

    /// Ends the current stroke; the next [`SketchCanvas::stroke_to`] starts
    /// a fresh segment.
    pub fn end_stroke(&mut self) {
        self.last_point = None;
    }

    pub fn brush_radius(&self) -> i32 {
        self.brush_radius
    }

    pub fn grow_brush(&mut self) {
        self.brush_radius += 1;
    }

    /// Shrinks the brush, clamping at [`MIN_BRUSH_RADIUS`].
    pub fn shrink_brush(&mut self) {
        self.brush_radius = (self.brush_radius - 1).max(MIN_BRUSH_RADIUS);
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn contains(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Paints a brush stamp (square of side 2 * radius + 1) centered at
    /// (cx, cy), clipped to the canvas.
    fn stamp(&mut self, cx: i32, cy: i32) {
        let r = self.brush_radius;
        let x_lo = (cx - r).max(0) as usize;
        let y_lo = (cy - r).max(0) as usize;
        let x_hi = (cx + r).min(self.width as i32 - 1) as usize;
        let y_hi = (cy + r).min(self.height as i32 - 1) as usize;

        for y in y_lo..=y_hi {
            let row = y * self.width;
            self.pixels[row + x_lo..=row + x_hi].fill(INK);
        }
        self.dirty = true;
    }

    /// Integer Bresenham walk from `from` to `to`, both endpoints inclusive,
    /// stamping the brush at every visited lattice point.
    fn line(&mut self, from: (i32, i32), to: (i32, i32)) {
        let (mut x, mut y) = from;
        let (x1, y1) = to;

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
