pub mod canvas;
pub mod loader;

use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText};
use log::info;

use crate::{
    clipboard::{self, PastedImage},
    image_utils,
    ui::{compute_readouts, ImageMetrics, KeyboardState},
};

use self::{
    canvas::Canvas,
    loader::{LoadError, LoadRequest, LoadSource, Loader},
};

pub struct PixelRulerApp {
    pub dpi_text: String,
    pub texture: Option<egui::TextureHandle>,
    /// Native pixel dimensions of the published bitmap.
    pub image_size: Option<(u32, u32)>,
    pub canvas: Canvas,
    pub loader: Loader,
    /// Bumped on every load request and reset; completions carrying an older
    /// generation are dropped.
    pub generation: u64,
    pub error: Option<String>,
}

impl PixelRulerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        initial_image: Option<PathBuf>,
        dpi: f64,
    ) -> Self {
        let mut app = Self {
            dpi_text: format!("{dpi}"),
            texture: None,
            image_size: None,
            canvas: Canvas::new(),
            loader: Loader::new(),
            generation: 0,
            error: None,
        };
        if let Some(path) = initial_image {
            app.load_file(path);
        }
        app
    }

    fn load_file(&mut self, path: PathBuf) {
        if !image_utils::is_supported_image(&path) {
            self.fail_load(LoadError::UnsupportedType(path.display().to_string()));
            return;
        }
        self.begin_load(LoadSource::Path(path));
    }

    fn paste_from_clipboard(&mut self) {
        match clipboard::read_image() {
            Some(PastedImage::Pixels(pixels)) => self.begin_load(LoadSource::Pixels(pixels)),
            Some(PastedImage::File(path)) => self.load_file(path),
            None => {}
        }
    }

    fn open_file_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", image_utils::SUPPORTED_EXTENSIONS)
            .pick_file();
        if let Some(path) = picked {
            self.load_file(path);
        }
    }

    /// First phase of the load commit: clear the previous bitmap and all
    /// derived state, then queue the decode. The publish happens when the
    /// matching generation comes back, so no frame can pair a stale
    /// selection with a new image.
    fn begin_load(&mut self, source: LoadSource) {
        self.clear_image_state();
        self.generation += 1;
        self.loader.request(LoadRequest {
            generation: self.generation,
            source,
        });
    }

    fn clear_image_state(&mut self) {
        self.texture = None;
        self.image_size = None;
        self.canvas.reset();
    }

    fn publish(&mut self, decoded: image_utils::DecodedImage, ctx: &egui::Context) {
        info!("loaded {}x{} image", decoded.width, decoded.height);
        self.image_size = Some((decoded.width, decoded.height));
        self.texture = Some(ctx.load_texture(
            "pixelruler-image",
            decoded.color_image,
            egui::TextureOptions::LINEAR,
        ));
        self.canvas.image_loaded();
    }

    fn fail_load(&mut self, err: LoadError) {
        self.error = Some(format!(
            "{err}.\nPlease supply a valid image file (PNG, JPG, GIF, ...)."
        ));
        self.reset();
    }

    /// Idempotent: clears the image, selection, drag state, and any
    /// in-flight load. The DPI field is left alone.
    fn reset(&mut self) {
        self.clear_image_state();
        self.loader.loading_active = false;
        self.generation += 1;
    }

    fn handle_keyboard(ctx: &egui::Context) -> KeyboardState {
        ctx.input(|input| KeyboardState {
            open: input.modifiers.command && input.key_pressed(egui::Key::O),
            paste: input.modifiers.command && input.key_pressed(egui::Key::V),
            reset: input.key_pressed(egui::Key::Escape),
        })
    }
}

impl eframe::App for PixelRulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.loader.poll() {
            if result.generation != self.generation {
                // A newer load or a reset superseded this decode.
                continue;
            }
            self.loader.loading_active = false;
            match result.outcome {
                Ok(decoded) => self.publish(decoded, ctx),
                Err(err) => self.fail_load(err),
            }
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.first() {
            if let Some(path) = &file.path {
                self.load_file(path.clone());
            }
        }
        let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let keys = Self::handle_keyboard(ctx);
        if keys.open {
            self.open_file_dialog();
        }
        if keys.paste {
            self.paste_from_clipboard();
        }
        if keys.reset {
            self.reset();
        }

        egui::SidePanel::right("measurements")
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Pixel Ruler");
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Open Image…").clicked() {
                        self.open_file_dialog();
                    }
                    if ui.button("Reset").clicked() {
                        self.reset();
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("DPI:");
                    ui.add(egui::TextEdit::singleline(&mut self.dpi_text).desired_width(60.0));
                });

                ui.separator();
                ui.label(RichText::new(self.canvas.instruction()).italics());
                ui.separator();

                let readouts = compute_readouts(
                    self.image_size,
                    self.canvas.readout_dims(),
                    &self.dpi_text,
                );
                ui.strong("Original Image");
                ui.label(&readouts.original_px);
                ui.label(&readouts.original_cm);
                ui.label(&readouts.original_in);
                ui.add_space(8.0);
                ui.strong("Selection");
                ui.label(&readouts.selected_px);
                ui.label(&readouts.selected_percent);
                ui.label(&readouts.selected_cm);
                ui.label(&readouts.selected_in);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            painter.rect_filled(response.rect, 0.0, Color32::from_gray(24));

            if let (Some(texture), Some((width, height))) = (&self.texture, self.image_size) {
                let metrics =
                    ImageMetrics::new(response.rect, egui::vec2(width as f32, height as f32));
                painter.image(
                    texture.id(),
                    metrics.image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );

                let image_response =
                    ui.interact(metrics.image_rect, ui.id().with("image"), egui::Sense::drag());
                self.canvas.handle_pointer(&image_response, &metrics);
                self.canvas.draw(&painter, &metrics);
            } else if self.loader.loading_active {
                painter.text(
                    response.rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Loading…",
                    egui::FontId::proportional(24.0),
                    Color32::WHITE,
                );
            } else {
                painter.text(
                    response.rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Click to choose an image, paste one, or drop a file here",
                    egui::FontId::proportional(20.0),
                    Color32::from_gray(160),
                );
                let empty_response =
                    ui.interact(response.rect, ui.id().with("empty"), egui::Sense::click());
                if empty_response.clicked() {
                    self.open_file_dialog();
                }
            }

            if hovering_files {
                painter.rect_stroke(response.rect.shrink(4.0), 6.0, (2.0, Color32::LIGHT_BLUE));
            }
        });

        if let Some(message) = self.error.clone() {
            egui::Window::new("Invalid image")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
        }

        if self.loader.loading_active {
            ctx.request_repaint();
        }
    }
}
