//! Input handling - pointer state machine, stroke capture, keyboard shortcuts.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Drawing    (primary press outside the help button)
//! Drawing -> Idle    (primary release; ends the stroke and classifies)
//! ```
//!
//! A press inside the help button toggles the overlay and never starts a
//! stroke, so the canvas is untouched by help navigation.

use egui::Context;
use tracing::{debug, warn};

use crate::constants::{CANVAS_WIDTH, HELP_BUTTON_HEIGHT, HELP_BUTTON_WIDTH};
use crate::preprocess::preprocess;
use crate::region::InkRegion;

use super::SketchPad;

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerState {
    /// No stroke in progress
    #[default]
    Idle,
    /// Primary button held; each pointer sample extends the stroke
    Drawing,
}

impl PointerState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing)
    }
}

impl SketchPad {
    /// Hit region of the help toggle, pinned to the top-right corner.
    pub(crate) fn help_button_rect() -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(CANVAS_WIDTH as f32 - HELP_BUTTON_WIDTH, 0.0),
            egui::vec2(HELP_BUTTON_WIDTH, HELP_BUTTON_HEIGHT),
        )
    }

    /// Applies this frame's pointer input to the pad.
    pub(crate) fn handle_pointer(&mut self, ctx: &Context) {
        let (pressed, down, released, pos) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });

        if pressed {
            if let Some(pos) = pos {
                self.pointer_pressed((pos.x, pos.y));
            }
        } else if down {
            if let Some(pos) = pos {
                self.pointer_moved((pos.x, pos.y));
            }
        }

        if released {
            self.pointer_released();
        }
    }

    /// Primary button went down. Either toggles the help overlay or starts
    /// a stroke; the press itself paints, so a motionless click leaves a dot.
    pub(crate) fn pointer_pressed(&mut self, (x, y): (f32, f32)) {
        if Self::help_button_rect().contains(egui::pos2(x, y)) {
            self.help_open = !self.help_open;
            return;
        }
        self.pointer = PointerState::Drawing;
        self.canvas.stroke_to((x as i32, y as i32));
    }

    /// Pointer sample while the button is held.
    pub(crate) fn pointer_moved(&mut self, (x, y): (f32, f32)) {
        if self.pointer.is_drawing() {
            self.canvas.stroke_to((x as i32, y as i32));
        }
    }

    /// Primary button went up. Ends the stroke and classifies the canvas.
    pub(crate) fn pointer_released(&mut self) {
        if self.pointer.is_drawing() {
            self.pointer = PointerState::Idle;
            self.finish_stroke();
        }
    }

    /// Runs the capture pipeline on the finished stroke. An empty canvas
    /// keeps the previous prediction on screen.
    fn finish_stroke(&mut self) {
        self.canvas.end_stroke();

        let Ok(region) = InkRegion::locate(&self.canvas) else {
            debug!("stroke released with an empty canvas; keeping previous result");
            return;
        };
        let tensor = preprocess(&self.canvas, &region);
        match self.gateway.predict(&tensor) {
            Ok(prediction) => self.prediction = Some(prediction),
            Err(e) => warn!("prediction failed: {e}"),
        }
    }

    /// Keyboard shortcuts: U/D resize the brush, R clears, Esc quits.
    pub(crate) fn handle_keys(&mut self, ctx: &Context) {
        let (grow, shrink, clear, quit) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if grow {
            self.canvas.grow_brush();
            debug!(radius = self.canvas.brush_radius(), "brush grown");
        }
        if shrink {
            self.canvas.shrink_brush();
            debug!(radius = self.canvas.brush_radius(), "brush shrunk");
        }
        if clear {
            self.canvas.clear();
            self.prediction = None;
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
