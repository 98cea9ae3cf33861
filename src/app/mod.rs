//! Application module - the main SketchPad state and frame loop.
//!
//! This module is organized into submodules:
//! - `input` - Pointer state machine, stroke handling, keyboard shortcuts
//! - `render` - Texture upload and drawing for every screen of the pad

mod input;
mod render;

pub use input::PointerState;

use std::path::PathBuf;
use std::time::Duration;

use crate::canvas::SketchCanvas;
use crate::config::PadConfig;
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_BRUSH_RADIUS, FRAME_INTERVAL_MS};
use crate::gateway::{InferenceGateway, Prediction};

/// The interactive pad: drawing surface, classifier gateway, and UI state.
pub struct SketchPad {
    canvas: SketchCanvas,
    gateway: InferenceGateway,
    pointer: PointerState,
    help_open: bool,
    prediction: Option<Prediction>,
    canvas_texture: Option<egui::TextureHandle>,
}

impl SketchPad {
    /// Builds the pad and starts loading the model in the background.
    ///
    /// The pad is usable immediately; it shows the loading screen until the
    /// gateway reports a terminal state.
    pub fn new(config: PadConfig, model_path: PathBuf) -> Self {
        let mut gateway = InferenceGateway::new(config.classes);
        gateway.begin_load(model_path);

        Self {
            canvas: SketchCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, DEFAULT_BRUSH_RADIUS),
            gateway,
            pointer: PointerState::Idle,
            help_open: false,
            prediction: None,
            canvas_texture: None,
        }
    }
}

impl eframe::App for SketchPad {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.gateway.poll();
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if let Some(reason) = self.gateway.failure().map(str::to_string) {
                    self.draw_failed_screen(ui, &reason);
                } else if !self.gateway.is_ready() {
                    self.draw_loading_screen(ui);
                } else {
                    self.handle_pointer(ctx);
                    if self.help_open {
                        self.draw_help_overlay(ui);
                    } else {
                        self.draw_canvas(ui);
                        self.draw_prediction_banner(ui);
                    }
                    self.draw_help_button(ui);
                }
            });

        // Keeps the gateway polled while loading and pointer sampling dense
        // while a stroke is in progress.
        ctx.request_repaint_after(Duration::from_millis(FRAME_INTERVAL_MS));
    }
}
