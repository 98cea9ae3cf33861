//! Unit tests for canvas stroke rasterization.
//!
//! The property under test: however far apart two pointer samples land,
//! the rasterized stroke between them is gap-free. Gaps are detected by
//! checking that the ink forms a single 8-connected component.

use std::collections::HashSet;

use sketchpad::canvas::SketchCanvas;
use sketchpad::constants::BLANK;

use crate::helpers::TestCanvasBuilder;

/// Every inked cell on the canvas.
fn inked_cells(canvas: &SketchCanvas) -> HashSet<(i32, i32)> {
    let mut cells = HashSet::new();
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.pixel(x, y) != BLANK {
                cells.insert((x as i32, y as i32));
            }
        }
    }
    cells
}

/// True if the ink forms exactly one 8-connected component.
fn ink_is_connected(canvas: &SketchCanvas) -> bool {
    let cells = inked_cells(canvas);
    let Some(&start) = cells.iter().next() else {
        return true;
    };

    let mut seen = HashSet::new();
    let mut stack = vec![start];
    while let Some((x, y)) = stack.pop() {
        if !seen.insert((x, y)) {
            continue;
        }
        for dy in -1..=1 {
            for dx in -1..=1 {
                let neighbor = (x + dx, y + dy);
                if cells.contains(&neighbor) && !seen.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }
    seen.len() == cells.len()
}

#[test]
fn test_fast_horizontal_drag_leaves_no_gap() {
    let canvas = TestCanvasBuilder::new()
        .with_brush(1)
        .with_stroke(&[(10, 300), (620, 305)])
        .build();
    assert!(ink_is_connected(&canvas));
}

#[test]
fn test_steep_slope_stays_connected() {
    let canvas = TestCanvasBuilder::new()
        .with_brush(1)
        .with_stroke(&[(300, 10), (310, 600)])
        .build();
    assert!(ink_is_connected(&canvas));
}

#[test]
fn test_diagonal_drag_stays_connected() {
    let canvas = TestCanvasBuilder::new()
        .with_brush(1)
        .with_stroke(&[(20, 20), (600, 610)])
        .build();
    assert!(ink_is_connected(&canvas));
}

#[test]
fn test_reversed_direction_stays_connected() {
    // Walks with negative x and y steps take the other sign branches
    let canvas = TestCanvasBuilder::new()
        .with_brush(1)
        .with_stroke(&[(600, 500), (50, 40)])
        .build();
    assert!(ink_is_connected(&canvas));
}

#[test]
fn test_zigzag_stroke_stays_connected() {
    let canvas = TestCanvasBuilder::new()
        .with_brush(2)
        .with_stroke(&[(100, 100), (500, 120), (110, 300), (520, 480), (90, 500)])
        .build();
    assert!(ink_is_connected(&canvas));
}

#[test]
fn test_separate_strokes_are_separate_components() {
    // Sanity check on the connectivity detector itself: two strokes with a
    // gap between them must not count as connected.
    let canvas = TestCanvasBuilder::new()
        .with_brush(1)
        .with_stroke(&[(50, 50), (100, 50)])
        .with_stroke(&[(400, 400), (450, 400)])
        .build();
    assert!(!ink_is_connected(&canvas));
}

#[test]
fn test_single_click_paints_brush_square() {
    let canvas = TestCanvasBuilder::new()
        .with_brush(3)
        .with_stroke(&[(320, 320)])
        .build();

    // Square stamp of side 2 * 3 + 1 = 7 centered on the click
    let cells = inked_cells(&canvas);
    assert_eq!(cells.len(), 49);
    assert!(cells.contains(&(317, 317)));
    assert!(cells.contains(&(323, 323)));
    assert!(!cells.contains(&(316, 320)));
}

#[test]
fn test_brush_shrink_clamps_at_one() {
    // Shrinking three times from radius 3 stops at 1, never 0 or below
    let mut canvas = SketchCanvas::new(64, 64, 3);
    canvas.shrink_brush();
    canvas.shrink_brush();
    canvas.shrink_brush();
    assert_eq!(canvas.brush_radius(), 1);

    canvas.stroke_to((32, 32));
    assert_eq!(inked_cells(&canvas).len(), 9);
}
