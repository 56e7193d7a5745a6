use std::time::Duration;

use eframe::egui;
use ringbuffer::RingBuffer;
use snake_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use snake_common::games::snake::{CellPaint, Difficulty, GameMode};
use snake_common::log;

use crate::colors::{PROMPT_COLOR, to_color32};
use crate::command_sender::CommandSender;
use crate::config::Config;
use crate::state::{ClientCommand, SharedState};

use super::input::collect_inputs;

const CANVAS_TEXTURE_NAME: &str = "snake_canvas";

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
    config: Config,
    selected_mode: Option<GameMode>,
    selected_difficulty: Option<Difficulty>,
    texture: Option<egui::TextureHandle>,
    texture_revision: Option<u64>,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
        config: Config,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            selected_mode: config.snake.last_mode,
            selected_difficulty: config.snake.last_difficulty,
            config_manager,
            config,
            texture: None,
            texture_revision: None,
        }
    }

    fn start_new_game(&mut self) {
        let mode = self.selected_mode;
        let difficulty = self.selected_difficulty;

        if mode.is_some() || difficulty.is_some() {
            match self.config_manager.update(|config| {
                if mode.is_some() {
                    config.snake.last_mode = mode;
                }
                if difficulty.is_some() {
                    config.snake.last_difficulty = difficulty;
                }
            }) {
                Ok(config) => self.config = config,
                Err(e) => log!("Failed to save config: {}", e),
            }
        }

        let setup = self.config.snake.setup(mode, difficulty);
        self.command_sender.send(ClientCommand::NewGame(setup));
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Mode:");
            for mode in [GameMode::Classic, GameMode::Walls] {
                ui.radio_value(&mut self.selected_mode, Some(mode), mode.label());
            }

            ui.separator();

            ui.label("Difficulty:");
            for difficulty in Difficulty::ALL {
                ui.radio_value(&mut self.selected_difficulty, Some(difficulty), difficulty.label());
            }

            ui.separator();

            if ui.button("New Game").clicked() {
                self.start_new_game();
            }
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let view = self.shared_state.view();

        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", view.score));
            ui.separator();
            ui.heading(format!("Time: {}", view.clock));
        });

        if !view.prompt.is_empty() {
            ui.label(
                egui::RichText::new(&view.prompt)
                    .color(PROMPT_COLOR)
                    .size(18.0),
            );
        }

        if let Some(summary) = &view.summary
            && summary.end_reason.is_some()
        {
            ui.label(format!(
                "Final score {} in {}, snake length {}",
                summary.score, summary.elapsed, summary.snake_length
            ));
        }
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (revision, size, rgba) = {
            let view = self.shared_state.view();
            let size = [view.canvas.width() as usize, view.canvas.height() as usize];
            if self.texture.is_some() && self.texture_revision == Some(view.revision) {
                (view.revision, size, None)
            } else {
                (view.revision, size, Some(view.canvas.to_rgba()))
            }
        };

        if let Some(rgba) = rgba {
            let image = egui::ColorImage::from_rgba_unmultiplied(size, &rgba);
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture(
                        CANVAS_TEXTURE_NAME,
                        image,
                        egui::TextureOptions::NEAREST,
                    ));
                }
            }
            self.texture_revision = Some(revision);
        }

        if let Some(texture) = &self.texture {
            ui.add(egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture)));
        }
    }

    fn render_legend(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (paint, name) in [
                (CellPaint::Snake, "Snake"),
                (CellPaint::Food, "Food"),
                (CellPaint::Wall, "Wall"),
            ] {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, to_color32(paint.color()));
                ui.label(name);
            }
            ui.separator();
            ui.label("Enter to start, arrows or WASD to turn");
        });
    }

    fn render_event_log(&self, ui: &mut egui::Ui) {
        let view = self.shared_state.view();

        egui::ScrollArea::vertical()
            .id_salt("event_log_scroll")
            .max_height(80.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if view.event_log.is_empty() {
                    ui.label("No events yet");
                }
                for entry in view.event_log.iter() {
                    ui.label(entry);
                }
            });
    }

    fn handle_input(&self, ctx: &egui::Context) {
        for input in collect_inputs(ctx) {
            self.command_sender.send(ClientCommand::Input(input));
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shared_state.set_context(ctx.clone());
        self.handle_input(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui);
            self.render_status(ui);
        });

        egui::TopBottomPanel::bottom("event_log").show(ctx, |ui| {
            self.render_legend(ui);
            ui.separator();
            self.render_event_log(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.render_canvas(ui, ctx);
            });
        });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
