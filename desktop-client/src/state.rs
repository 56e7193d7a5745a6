use std::sync::{Arc, Mutex, MutexGuard};

use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use snake_common::games::snake::{
    ElapsedTime, GameEvent, Input, Prompt, SessionSetup, SessionSummary, render_events,
};

use crate::canvas::PixelCanvas;

#[derive(Debug, Clone)]
pub enum ClientCommand {
    NewGame(SessionSetup),
    Input(Input),
}

/// What the UI shows: the painted canvas plus the text outputs of the current session.
pub struct GameView {
    pub canvas: PixelCanvas,
    pub score: u32,
    pub clock: String,
    pub prompt: String,
    pub event_log: AllocRingBuffer<String>,
    pub summary: Option<SessionSummary>,
    pub revision: u64,
}

impl GameView {
    fn new(canvas_width: u32, canvas_height: u32, event_log_size: usize) -> Self {
        Self {
            canvas: PixelCanvas::new(canvas_width, canvas_height),
            score: 0,
            clock: ElapsedTime::default().to_string(),
            prompt: Prompt::SelectMode.to_string(),
            event_log: AllocRingBuffer::new(event_log_size.max(1)),
            summary: None,
            revision: 0,
        }
    }

    fn apply_events(&mut self, events: &[GameEvent], cell_size: u32) {
        render_events(&mut self.canvas, events, cell_size);

        for event in events {
            match event {
                GameEvent::Cleared => {
                    self.summary = None;
                }
                GameEvent::ScoreChanged(score) => self.score = *score,
                GameEvent::ClockChanged(elapsed) => self.clock = elapsed.to_string(),
                GameEvent::PromptChanged(prompt) => self.prompt = prompt.to_string(),
                GameEvent::FoodEaten { score, .. } => {
                    self.event_log.enqueue(format!("[{}] Food eaten, score {}", self.clock, score));
                }
                GameEvent::Ended(reason) => {
                    self.event_log.enqueue(format!("[{}] Game over: {:?}", self.clock, reason));
                }
                GameEvent::CellPainted { .. } => {}
            }
        }

        self.revision += 1;
    }
}

#[derive(Clone)]
pub struct SharedState {
    view: Arc<Mutex<GameView>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(canvas_width: u32, canvas_height: u32, event_log_size: usize) -> Self {
        Self {
            view: Arc::new(Mutex::new(GameView::new(canvas_width, canvas_height, event_log_size))),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap_or_else(|e| e.into_inner()) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn view(&self) -> MutexGuard<'_, GameView> {
        self.view.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn apply_events(&self, events: &[GameEvent], cell_size: u32) {
        self.view().apply_events(events, cell_size);
        self.request_repaint();
    }

    pub fn set_prompt(&self, prompt: String) {
        {
            let mut view = self.view();
            view.prompt = prompt;
            view.revision += 1;
        }
        self.request_repaint();
    }

    pub fn set_summary(&self, summary: SessionSummary) {
        {
            let mut view = self.view();
            view.summary = Some(summary);
            view.revision += 1;
        }
        self.request_repaint();
    }

    pub fn resize_canvas(&self, canvas_width: u32, canvas_height: u32) {
        let mut view = self.view();
        if view.canvas.width() != canvas_width || view.canvas.height() != canvas_height {
            view.canvas = PixelCanvas::new(canvas_width, canvas_height);
            view.revision += 1;
        }
    }
}
