use egui::{Color32, Context, Grid, RichText};

use crate::app::ReaderApp;
use crate::ui::helpers::{big_list_button, cover_color, difficulty_color, labeled_bar};
use crate::ui::layout::simple_panel;
use crate::view_models::{BookCard, ProgressSummary};

pub fn ui_home(app: &mut ReaderApp, ctx: &Context) {
    let summary = app.progress_summary();
    let cards = app.book_cards();
    let mut open: Option<String> = None;

    simple_panel(ctx, 820.0, egui::Margin::symmetric(24, 16), |ui| {
        progress_tracker(ui, &summary);
        ui.add_space(24.0);

        ui.heading("📚 読める本");
        ui.add_space(8.0);
        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).color(Color32::YELLOW));
            ui.add_space(8.0);
        }
        for card in &cards {
            if book_card(ui, card) {
                open = Some(card.id.clone());
            }
            ui.add_space(12.0);
        }
    });

    if let Some(id) = open {
        app.open_book(&id);
    }
}

fn progress_tracker(ui: &mut egui::Ui, s: &ProgressSummary) {
    ui.heading(format!("⭐ レベル {}", s.level));
    ui.add_space(6.0);
    labeled_bar(
        ui,
        s.level_progress_percent as f32 / 100.0,
        format!("{} EXP ・ 次のレベルまで: {}", s.experience, s.experience_to_next_level),
    );
    ui.add_space(8.0);
    Grid::new("progress_grid")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label("📖 読み終えた章");
            ui.label(RichText::new(s.completed_chapters.to_string()).strong());
            ui.end_row();
            ui.label("🔓 解放された本");
            ui.label(RichText::new(s.unlocked_books.to_string()).strong());
            ui.end_row();
        });
    if let Some(reward) = s.reward {
        ui.add_space(8.0);
        ui.label(RichText::new(format!("🎉 {reward}")).color(Color32::GOLD).strong());
    }
}

/// Devuelve `true` si se pulsa el botón del libro
fn book_card(ui: &mut egui::Ui, card: &BookCard) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, cover_color(&card.cover_color)))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&card.title).heading().strong());
                if card.progress.is_completed() {
                    ui.label(RichText::new("✅").color(Color32::GREEN));
                }
            });
            ui.label(RichText::new(&card.author).weak());
            ui.add_space(4.0);
            ui.label(&card.description);
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(card.difficulty_label)
                        .color(difficulty_color(card.difficulty_label))
                        .strong(),
                );
                ui.label(format!("🕒 {}章", card.chapter_count));
            });
            ui.add_space(4.0);
            labeled_bar(
                ui,
                card.progress.percentage as f32 / 100.0,
                format!("進捗 {}/{}", card.progress.completed, card.progress.total),
            );
            ui.add_space(6.0);
            clicked = big_list_button(ui, card.action_label().to_owned(), 160.0, 32.0, true);
        });
    clicked
}
