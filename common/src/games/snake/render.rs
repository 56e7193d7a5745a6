use super::events::{CellPaint, GameEvent};
use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GRAY: Rgb = Rgb::new(110, 110, 110);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl CellPaint {
    pub fn color(&self) -> Rgb {
        match self {
            CellPaint::Empty => Rgb::WHITE,
            CellPaint::Snake => Rgb::BLACK,
            CellPaint::Food => Rgb::RED,
            CellPaint::Wall => Rgb::GRAY,
        }
    }
}

/// Anything that can draw grid cells: the desktop pixel canvas, a test recorder, etc.
pub trait RenderSink {
    fn clear(&mut self);
    fn paint_cell(&mut self, cell: Cell, color: Rgb, cell_size: u32);
}

/// Forwards the drawing part of `events` to `sink`, ignoring score/clock/prompt updates.
pub fn render_events<S: RenderSink + ?Sized>(sink: &mut S, events: &[GameEvent], cell_size: u32) {
    for event in events {
        match event {
            GameEvent::Cleared => sink.clear(),
            GameEvent::CellPainted { cell, paint } => sink.paint_cell(*cell, paint.color(), cell_size),
            _ => {}
        }
    }
}
