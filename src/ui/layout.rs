use egui::{Button, CentralPanel, Context, Frame, RichText, Ui, Visuals};

use crate::app::ReaderApp;
use crate::model::AppState;

/// Cabecera: título, nivel, EXP y pestañas ホーム / 読書
pub fn top_panel(app: &mut ReaderApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("📖 文学の扉").strong());
            ui.label(RichText::new("やさしい日本語で読む名作").weak());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let p = app.progress();
                ui.label(format!("🏆 {} EXP", p.experience));
                ui.label(RichText::new(format!("⭐ レベル {}", p.level)).strong());
            });
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .selectable_label(app.state == AppState::Home, "🏠 ホーム")
                .clicked()
            {
                app.go_home();
            }
            let has_book = app.selected_book.is_some();
            let reading = ui.add_enabled_ui(has_book, |ui| {
                ui.selectable_label(app.state == AppState::Reading, "📚 読書")
            });
            if reading.inner.clicked() {
                app.open_reading();
            }
        });
        ui.add_space(4.0);
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 ダーク").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ ライト").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Panel central con ancho máximo y scroll vertical
pub fn simple_panel(
    ctx: &Context,
    max_width: f32,
    margin: egui::Margin,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(margin)
                        .show(ui, |ui| {
                            ui.set_width(w);
                            inner(ui);
                        });
                });
            });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size([btn_w, 36.0].into()))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size([btn_w, 36.0].into()))
            .clicked();
    });
    (clicked_left, clicked_right)
}
