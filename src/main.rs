use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;

use pixelruler::app::PixelRulerApp;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Measure pixel and print dimensions of an image"
)]
struct Args {
    /// Image file to open on startup
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// DPI used for the physical size readouts
    #[arg(short, long, default_value_t = 96.0)]
    dpi: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let initial_image = args.image;
    let dpi = args.dpi;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("Pixel Ruler"),
        ..Default::default()
    };

    eframe::run_native(
        "PixelRuler",
        native_options,
        Box::new(move |cc| Ok(Box::new(PixelRulerApp::new(cc, initial_image, dpi)))),
    )
    .map_err(|err| anyhow!("{err}"))?;

    Ok(())
}
