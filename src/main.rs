//! Casteljau Viewer.
//!
//! Zeigt eine kubische Bézier-Kurve mit ziehbaren Kontrollpunkten und
//! animiert die De-Casteljau-Konstruktion entlang t.

use casteljau_viewer::{render, ui, AppController, AppIntent, AppState, ViewerOptions};
use eframe::egui;

/// Fenstergröße beim Start; die Zeichenfläche meldet ihre echte Größe im ersten Frame.
const INITIAL_WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Casteljau Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(INITIAL_WINDOW_SIZE)
                .with_title("Casteljau Viewer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Casteljau Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Bildschirm-Rechteck der Zeichenfläche aus dem letzten Layout
    canvas_rect: egui::Rect,
}

impl ViewerApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);
        let viewport = glam::Vec2::from(INITIAL_WINDOW_SIZE);

        let state = match AppState::new(viewer_options, viewport) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Optionen ungültig ({}), verwende Standardwerte", e);
                AppState::new(ViewerOptions::default(), viewport)?
            }
        };

        Ok(Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            canvas_rect: egui::Rect::NOTHING,
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        self.controller.advance_frame(&mut self.state);
        self.paint_canvas(ctx);

        // Animation läuft endlos
        ctx.request_repaint();
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.canvas_rect = rect;

                events.push(AppIntent::ViewportResized {
                    size: glam::Vec2::new(rect.width(), rect.height()),
                });
                events.extend(ui::collect_keyboard_intents(
                    ui,
                    self.state.show_options_dialog,
                ));
                events.extend(self.input.collect_canvas_events(ui, &response));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Zeichnet die Szene nach der Event-Verarbeitung in die Zeichenfläche.
    fn paint_canvas(&self, ctx: &egui::Context) {
        let rect = self.canvas_rect;
        let painter = ctx
            .layer_painter(egui::LayerId::background())
            .with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.state.options.background_color32());

        let mut surface = render::PainterSurface::new(&painter, rect.min, &self.state.options);
        self.controller.draw(&self.state, &mut surface);
    }
}
