// src/ui/helpers.rs
use egui::{Button, Color32, ProgressBar, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Traduce el token de portada del catálogo ("bg-red-500") a un color
pub fn cover_color(token: &str) -> Color32 {
    match token.split('-').nth(1).unwrap_or_default() {
        "red" => Color32::from_rgb(239, 68, 68),
        "orange" => Color32::from_rgb(249, 115, 22),
        "yellow" => Color32::from_rgb(234, 179, 8),
        "green" => Color32::from_rgb(34, 197, 94),
        "blue" => Color32::from_rgb(59, 130, 246),
        "indigo" => Color32::from_rgb(99, 102, 241),
        "purple" => Color32::from_rgb(147, 51, 234),
        _ => Color32::GRAY,
    }
}

pub fn difficulty_color(label: &str) -> Color32 {
    match label {
        "やさしい" => Color32::from_rgb(22, 163, 74),
        "ふつう" => Color32::from_rgb(202, 138, 4),
        "むずかしい" => Color32::from_rgb(234, 88, 12),
        "とてもむずかしい" => Color32::from_rgb(220, 38, 38),
        _ => Color32::GRAY,
    }
}

/// Barra de progreso con el texto a la derecha
pub fn labeled_bar(ui: &mut Ui, fraction: f32, text: String) {
    ui.add(ProgressBar::new(fraction.clamp(0.0, 1.0)).text(text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_tokens_map_to_colors() {
        assert_eq!(cover_color("bg-red-500"), Color32::from_rgb(239, 68, 68));
        assert_eq!(cover_color("whatever"), Color32::GRAY);
        assert_eq!(cover_color(""), Color32::GRAY);
    }
}
