use super::*;
use crate::model::{Book, Chapter};

impl ReaderApp {
    pub fn current_book(&self) -> Option<&Book> {
        self.catalog.book(self.selected_book.as_deref()?)
    }

    /// Capítulo abierto; si no hay ninguno, el primero del libro
    pub fn current_chapter(&self) -> Option<&Chapter> {
        let book = self.current_book()?;
        match self.current_chapter {
            Some(id) => book.chapter(id),
            None => book.chapters.first(),
        }
    }

    /// Libros visibles en la portada: sólo los desbloqueados, en orden de catálogo
    pub fn unlocked_books(&self) -> Vec<&Book> {
        let progress = self.progress();
        self.catalog
            .books
            .iter()
            .filter(|b| progress.is_book_unlocked(&b.id))
            .collect()
    }

    /// Texto del capítulo según el modo (original / やさしい版)
    pub fn chapter_text(&self) -> Option<&str> {
        let chapter = self.current_chapter()?;
        Some(if self.show_original {
            chapter.original_text.as_str()
        } else {
            chapter.simple_text.as_str()
        })
    }
}
