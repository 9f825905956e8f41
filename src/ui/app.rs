use crate::app::core::{self, Analysis, Event, Screen, State, UploadedImage};
use crate::app::run_effect::RunEffect;
use crate::config::Config;
use crate::logger::interface::Logger;
use eframe::egui;
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

const LEAF_GREEN: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);

pub struct DetectorApp {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    state: State,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    home_texture: Option<egui::TextureHandle>,
    home_texture_failed: bool,
    preview: Option<Preview>,
}

struct Preview {
    name: String,
    /// None when the upload could not be decoded; the analyze path reports
    /// that failure properly, the preview just degrades to the filename.
    texture: Option<egui::TextureHandle>,
}

impl DetectorApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        state: State,
        event_receiver: Receiver<Event>,
        run_effect: RunEffect,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("ui"),
            state,
            event_receiver,
            run_effect,
            home_texture: None,
            home_texture_failed: false,
            preview: None,
        }
    }

    fn apply(&mut self, event: Event) {
        let _ = self.logger.info(&format!("event: {:?}", event));

        let (new_state, effects) = core::transition(std::mem::take(&mut self.state), event);
        self.state = new_state;

        let _ = self.logger.info(&format!("state: {:?}", self.state));

        self.run_effect.spawn_effects(effects);
    }

    fn show_nav(&mut self, ui: &mut egui::Ui) {
        let screen = self.state.screen.clone();

        ui.add_space(8.0);
        ui.columns(5, |columns| {
            if columns[1]
                .selectable_label(screen == Screen::Home, "HOME")
                .clicked()
            {
                self.apply(Event::NavigateHome);
            }
            if columns[3]
                .selectable_label(screen == Screen::Detect, "DETECT DISEASE")
                .clicked()
            {
                self.apply(Event::NavigateDetect);
            }
        });
        ui.add_space(8.0);
    }

    fn show_home(&mut self, ui: &mut egui::Ui) {
        let texture = self.home_texture(ui.ctx());

        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading("Plant Disease Detection System for Sustainable Agriculture");
            ui.add_space(12.0);

            if let Some(texture) = texture {
                ui.add(egui::Image::new(&texture).max_height(320.0));
                ui.add_space(16.0);
            }

            ui.heading("Welcome to our Plant Disease Detection System");
            ui.label(
                "This advanced system helps farmers and gardeners identify plant diseases \
                 quickly and accurately, promoting sustainable agricultural practices and \
                 improving crop yields.",
            );
        });
    }

    fn show_detect(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading("Plant Disease Detection");
            ui.add_space(12.0);
        });

        ui.columns(2, |columns| {
            self.show_upload_column(&mut columns[0]);
            self.show_result_column(&mut columns[1]);
        });
    }

    fn show_upload_column(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            if ui.button("Choose a plant image to analyze…").clicked() {
                self.pick_file(ui.ctx());
            }
            ui.label("or drop an image file onto this window");
            ui.add_space(8.0);

            if let Some(preview) = &self.preview {
                match &preview.texture {
                    Some(texture) => {
                        ui.add(egui::Image::new(texture).max_height(360.0));
                    }
                    None => {
                        ui.label(format!("{} (no preview)", preview.name));
                    }
                }
            }
        });
    }

    fn show_result_column(&mut self, ui: &mut egui::Ui) {
        let has_image = self.state.image.is_some();
        let analysis = self.state.analysis.clone();

        ui.vertical_centered(|ui| {
            if !has_image {
                ui.heading("Upload an image to get started");
                ui.add_space(8.0);
                ui.label("Support for various plant types including:");
                ui.label("Apple, Grape, Corn, Tomato,");
                ui.label("Potato, Blueberry, Peach and Pepper");
                return;
            }

            let running = matches!(analysis, Analysis::Running);
            if ui
                .add_enabled(!running, egui::Button::new("Analyze Image"))
                .clicked()
            {
                self.apply(Event::AnalyzePressed);
            }
            ui.add_space(12.0);

            match &analysis {
                Analysis::Idle => {}
                Analysis::Running => {
                    ui.spinner();
                    ui.label("Analyzing image…");
                }
                Analysis::Done(label) => {
                    ui.heading("Detection Result");
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(label).size(18.0).color(LEAF_GREEN));
                }
                Analysis::Failed(message) => {
                    ui.colored_label(egui::Color32::RED, message);
                }
            }
        });
    }

    fn home_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        if self.home_texture.is_none() && !self.home_texture_failed {
            match image::open(&self.config.home_image_path) {
                Ok(img) => {
                    self.home_texture = Some(ctx.load_texture(
                        "home-illustration",
                        to_color_image(&img),
                        egui::TextureOptions::LINEAR,
                    ));
                }
                Err(e) => {
                    self.home_texture_failed = true;
                    let _ = self.logger.info(&format!(
                        "home illustration {} unavailable: {}",
                        self.config.home_image_path, e
                    ));
                }
            }
        }
        self.home_texture.clone()
    }

    fn pick_file(&mut self, ctx: &egui::Context) {
        let picked = rfd::FileDialog::new()
            .add_filter("images", &["png", "jpg", "jpeg", "bmp", "webp"])
            .pick_file();

        if let Some(path) = picked {
            self.upload_from_path(ctx, &path);
        }
    }

    fn upload_from_path(&mut self, ctx: &egui::Context, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match std::fs::read(path) {
            Ok(bytes) => self.upload(ctx, name, bytes),
            Err(e) => {
                let _ = self
                    .logger
                    .info(&format!("could not read {}: {}", path.display(), e));
            }
        }
    }

    fn upload(&mut self, ctx: &egui::Context, name: String, bytes: Vec<u8>) {
        let texture = image::load_from_memory(&bytes).ok().map(|img| {
            ctx.load_texture(
                format!("upload:{}", name),
                to_color_image(&img),
                egui::TextureOptions::LINEAR,
            )
        });
        self.preview = Some(Preview {
            name: name.clone(),
            texture,
        });

        self.apply(Event::ImageUploaded(UploadedImage { name, bytes }));
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                self.upload_from_path(ctx, &path);
            } else if let Some(bytes) = file.bytes {
                self.upload(ctx, file.name.clone(), bytes.to_vec());
            }
        }
    }
}

impl eframe::App for DetectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.apply(event);
        }

        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            self.show_nav(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.screen {
            Screen::Home => self.show_home(ui),
            Screen::Detect => self.show_detect(ui),
        });

        // Keep polling for the completion event while a worker is busy.
        if matches!(self.state.analysis, Analysis::Running) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn to_color_image(img: &image::DynamicImage) -> egui::ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
