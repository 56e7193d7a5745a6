use eframe::egui;
use snake_common::games::snake::{Direction, Input};

const KEY_BINDINGS: [(egui::Key, Input); 9] = [
    (egui::Key::Enter, Input::Start),
    (egui::Key::ArrowUp, Input::Turn(Direction::Up)),
    (egui::Key::ArrowDown, Input::Turn(Direction::Down)),
    (egui::Key::ArrowLeft, Input::Turn(Direction::Left)),
    (egui::Key::ArrowRight, Input::Turn(Direction::Right)),
    (egui::Key::W, Input::Turn(Direction::Up)),
    (egui::Key::S, Input::Turn(Direction::Down)),
    (egui::Key::A, Input::Turn(Direction::Left)),
    (egui::Key::D, Input::Turn(Direction::Right)),
];

pub fn input_for_key(key: egui::Key) -> Option<Input> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, input)| *input)
}

/// Inputs for every bound key pressed this frame, in press order.
pub fn collect_inputs(ctx: &egui::Context) -> Vec<Input> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key { key, pressed: true, repeat: false, .. } => input_for_key(*key),
                _ => None,
            })
            .collect()
    })
}
