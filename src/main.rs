//! Sketchpad binary - argument parsing, configuration, and window boot.
//!
//! Startup failures (missing or invalid configuration) abort with a
//! non-zero exit before the window opens. Model-load failures do not:
//! they surface inside the window as a permanent failure screen.

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::info;

use sketchpad::app::SketchPad;
use sketchpad::config::PadConfig;
use sketchpad::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_CONFIG_PATH, DEFAULT_MODEL_PATH, WINDOW_TITLE,
};

/// Draw a shape and let the classifier guess what it is.
#[derive(Parser)]
#[command(name = "sketchpad")]
#[command(about = "Interactive sketch recognition pad")]
struct Args {
    /// Path to the trained model weights (Named MessagePack record)
    #[arg(default_value = DEFAULT_MODEL_PATH)]
    model_path: PathBuf,

    /// Path to the classifier configuration (JSON)
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = PadConfig::load(&args.config_path)
        .with_context(|| format!("loading configuration from {}", args.config_path.display()))?;
    info!(
        classes = ?config.classes,
        model = %args.model_path.display(),
        "starting sketchpad"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(SketchPad::new(config, args.model_path)))),
    )
    .map_err(|e| anyhow!("window system error: {e}"))
}

/// Installs the global subscriber once. `RUST_LOG` is respected; the
/// default level is `info`.
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
