use eframe::egui;
use snake_common::games::snake::Rgb;

pub fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub const PROMPT_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 60, 60);
