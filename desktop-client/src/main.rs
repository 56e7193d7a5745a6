mod canvas;
mod colors;
mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use snake_common::logger::init_logger;
use snake_common::log;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::{Config, get_config_manager};
use offline::local_game_task;
use state::{ClientCommand, SharedState};
use ui::SnakeApp;

#[derive(Parser, Debug)]
#[command(version, about = "Desktop Snake game")]
struct Args {
    /// Path to the YAML config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(Some("snake".to_string()));

    let config_manager = get_config_manager(args.config);
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let shared_state = SharedState::new(
        config.snake.canvas_width,
        config.snake.canvas_height,
        config.event_log_size,
    );
    shared_state.set_prompt(config.snake.initial_prompt().to_string());
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let command_sender = CommandSender::new(command_tx);
    if let Some(setup) = config.snake.saved_setup() {
        command_sender.send(ClientCommand::NewGame(setup));
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let shared_state_clone = shared_state.clone();
    let seed = args.seed;
    std::thread::spawn(move || {
        runtime.block_on(local_game_task(shared_state_clone, seed, command_rx));
    });

    let window_width = config.snake.canvas_width as f32 + 40.0;
    let window_height = config.snake.canvas_height as f32 + 240.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|cc| {
            shared_state.set_context(cc.egui_ctx.clone());
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_sender,
                config_manager,
                config,
            )))
        }),
    )?;

    Ok(())
}
