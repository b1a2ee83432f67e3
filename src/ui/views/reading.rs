use egui::{Color32, Context, RichText};

use crate::app::ReaderApp;
use crate::ui::layout::{simple_panel, two_button_row};

pub fn ui_reading(app: &mut ReaderApp, ctx: &Context) {
    // Sin libro no hay nada que leer
    let Some(book) = app.current_book().cloned() else {
        app.go_home();
        return;
    };
    let rows = app.chapter_rows();
    let Some(chapter) = app.current_chapter().cloned() else {
        app.go_home();
        return;
    };
    let text = app.chapter_text().unwrap_or_default().to_owned();
    let has_prev = app.has_previous_chapter();
    let has_next = app.has_next_chapter();

    let mut select = None;
    let mut toggle = false;
    let (mut prev, mut next, mut quiz) = (false, false, false);

    simple_panel(ctx, 820.0, egui::Margin::symmetric(24, 16), |ui| {
        ui.heading(RichText::new(&book.title).strong());
        ui.label(RichText::new(format!("{} ・ {}", book.author, book.difficulty_label())).weak());
        ui.add_space(12.0);

        // Lista de capítulos
        ui.horizontal_wrapped(|ui| {
            for row in &rows {
                if ui.selectable_label(row.selected, row.label()).clicked() {
                    select = Some(row.id);
                }
            }
        });
        ui.separator();

        ui.horizontal(|ui| {
            ui.heading(&chapter.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if app.show_original { "やさしい版" } else { "原文" };
                toggle = ui.button(label).clicked();
            });
        });
        ui.add_space(8.0);
        ui.label(RichText::new(&text).size(18.0));
        ui.add_space(16.0);

        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).color(Color32::YELLOW));
            ui.add_space(8.0);
        }

        let width = ui.available_width();
        (prev, next) = two_button_row(ui, width, ("◀ 前の章", has_prev), ("次の章 ▶", has_next));
        ui.add_space(8.0);
        quiz = ui
            .add_sized([width, 40.0], egui::Button::new("▶ クイズに挑戦"))
            .clicked();
    });

    if let Some(id) = select {
        app.select_chapter(id);
    }
    if toggle {
        app.toggle_original();
    }
    if prev {
        app.previous_chapter();
    }
    if next {
        app.next_chapter();
    }
    if quiz {
        app.start_quiz();
    }
}
