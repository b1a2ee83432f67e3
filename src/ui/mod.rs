mod fonts;
mod helpers;
pub mod layout;
pub mod views;

use std::time::Duration;

use crate::app::ReaderApp;
use crate::model::AppState;
use eframe::{App, Frame, Storage};
use egui::Context;
use layout::{bottom_panel, top_panel};

pub use fonts::install_japanese_fonts;

impl App for ReaderApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // Temporizador de revelado del quiz
        let now = ctx.input(|i| i.time);
        self.tick(now);
        if let Some(due_at) = self.quiz.as_ref().and_then(|q| q.reveal_due_at()) {
            ctx.request_repaint_after(Duration::from_secs_f64((due_at - now).max(0.0)));
        }

        // Guardar en cuanto cambia el progreso
        if self.store.is_dirty() {
            let storage = frame.storage_mut().map(|s| s as &mut dyn Storage);
            self.persist_if_dirty(storage);
        }

        // CABECERA: nivel, EXP y navegación
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Reading => views::reading::ui_reading(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.persist_if_dirty(Some(storage));
    }
}
