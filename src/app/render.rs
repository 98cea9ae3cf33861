//! Rendering - texture upload and drawing for every screen of the pad.
//!
//! The canvas is a grayscale buffer on the CPU; it is uploaded as an egui
//! texture with nearest filtering (one canvas cell = one screen pixel) and
//! re-uploaded only when the dirty flag says it changed. Everything else is
//! immediate-mode painter calls on top of that texture.

use egui::{
    Align2, Color32, ColorImage, CornerRadius, FontId, Pos2, Rect, TextureOptions, pos2, vec2,
};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

use super::SketchPad;

/// Font size for the banner, overlay lines, and button glyph.
const TEXT_SIZE: f32 = 26.0;

/// Vertical spacing between help overlay lines.
const HELP_LINE_HEIGHT: f32 = 40.0;

impl SketchPad {
    /// Screen rectangle the canvas occupies. The window is sized to the
    /// canvas, so pointer coordinates map onto cells one-to-one.
    fn canvas_rect() -> Rect {
        Rect::from_min_size(
            Pos2::ZERO,
            vec2(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32),
        )
    }

    /// Paints the drawing surface, re-uploading the texture if the canvas
    /// changed since the last frame.
    pub(crate) fn draw_canvas(&mut self, ui: &egui::Ui) {
        if self.canvas.take_dirty() || self.canvas_texture.is_none() {
            let image = ColorImage::from_gray(
                [self.canvas.width(), self.canvas.height()],
                self.canvas.pixels(),
            );
            match &mut self.canvas_texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.canvas_texture =
                        Some(ui.ctx().load_texture("canvas", image, TextureOptions::NEAREST));
                }
            }
        }

        if let Some(texture) = &self.canvas_texture {
            let uv = Rect::from_min_max(Pos2::ZERO, pos2(1.0, 1.0));
            ui.painter()
                .image(texture.id(), Self::canvas_rect(), uv, Color32::WHITE);
        }
    }

    /// Current prediction (or a prompt) centered at the top of the canvas.
    pub(crate) fn draw_prediction_banner(&self, ui: &egui::Ui) {
        let message = match &self.prediction {
            Some(p) => format!("{} {:.2}%", p.label, p.confidence),
            None => "Draw something!".to_string(),
        };
        ui.painter().text(
            pos2(CANVAS_WIDTH as f32 / 2.0, 20.0),
            Align2::CENTER_CENTER,
            message,
            FontId::proportional(TEXT_SIZE),
            Color32::BLACK,
        );
    }

    /// Help toggle glyph in the corner hit region: `?` over the canvas,
    /// `X` over the dark overlay.
    pub(crate) fn draw_help_button(&self, ui: &egui::Ui) {
        let (glyph, color) = if self.help_open {
            ("X", Color32::WHITE)
        } else {
            ("?", Color32::BLACK)
        };
        ui.painter().text(
            Self::help_button_rect().center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(TEXT_SIZE),
            color,
        );
    }

    /// Full-screen key binding reference, shown instead of the canvas.
    pub(crate) fn draw_help_overlay(&self, ui: &egui::Ui) {
        let painter = ui.painter();
        painter.rect_filled(Self::canvas_rect(), CornerRadius::ZERO, Color32::BLACK);

        let lines = [
            "[R] to clear",
            "[U] to increase brush size",
            "[D] to decrease brush size",
        ];
        let x = CANVAS_WIDTH as f32 / 5.0;
        let mut y = CANVAS_HEIGHT as f32 / 2.0 - HELP_LINE_HEIGHT * lines.len() as f32 / 2.0;
        for line in lines {
            painter.text(
                pos2(x, y),
                Align2::LEFT_TOP,
                line,
                FontId::proportional(TEXT_SIZE),
                Color32::WHITE,
            );
            y += HELP_LINE_HEIGHT;
        }
    }

    /// Black screen with a centered loading message, shown until the
    /// gateway reaches a terminal state.
    pub(crate) fn draw_loading_screen(&self, ui: &egui::Ui) {
        let painter = ui.painter();
        painter.rect_filled(Self::canvas_rect(), CornerRadius::ZERO, Color32::BLACK);
        painter.text(
            Self::canvas_rect().center(),
            Align2::CENTER_CENTER,
            "Loading...",
            FontId::proportional(TEXT_SIZE),
            Color32::WHITE,
        );
    }

    /// Permanent failure screen. There is no retry; the user restarts the
    /// program with a valid model path.
    pub(crate) fn draw_failed_screen(&self, ui: &egui::Ui, reason: &str) {
        let painter = ui.painter();
        painter.rect_filled(Self::canvas_rect(), CornerRadius::ZERO, Color32::BLACK);

        let center = Self::canvas_rect().center();
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "Failed to load model",
            FontId::proportional(TEXT_SIZE),
            Color32::from_rgb(220, 70, 70),
        );
        painter.text(
            center + vec2(0.0, HELP_LINE_HEIGHT),
            Align2::CENTER_CENTER,
            reason,
            FontId::proportional(16.0),
            Color32::WHITE,
        );
    }
}
