use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String, // debe aparecer tal cual en `options`
}

impl Question {
    pub fn is_correct(&self, selected: &str) -> bool {
        self.answer == selected
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: u32, // único dentro del libro
    pub title: String,
    pub original_text: String,
    pub simple_text: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String, // estable entre sesiones: forma parte de la clave de capítulo
    pub title: String,
    pub author: String,
    pub description: String,
    pub difficulty: u8, // 1..=4
    pub cover_color: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    pub fn chapter(&self, chapter_id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    /// Posición del capítulo dentro del libro (orden de lectura)
    pub fn chapter_position(&self, chapter_id: u32) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == chapter_id)
    }

    pub fn difficulty_label(&self) -> &'static str {
        difficulty_label(self.difficulty)
    }
}

/// Catálogo completo, inmutable una vez cargado
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Catalog {
    pub books: Vec<Book>,
}

impl Catalog {
    pub fn book(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == book_id)
    }

    pub fn chapter(&self, book_id: &str, chapter_id: u32) -> Option<&Chapter> {
        self.book(book_id)?.chapter(chapter_id)
    }
}

/// Clave de capítulo completado: `"{book_id}-{chapter_id}"`
pub fn chapter_key(book_id: &str, chapter_id: u32) -> String {
    format!("{book_id}-{chapter_id}")
}

pub fn difficulty_label(difficulty: u8) -> &'static str {
    match difficulty {
        1 => "やさしい",
        2 => "ふつう",
        3 => "むずかしい",
        4 => "とてもむずかしい",
        _ => "unknown",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Reading,
    Quiz,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_key_joins_book_and_chapter() {
        assert_eq!(chapter_key("melos", 3), "melos-3");
        assert_eq!(chapter_key("kokoro-intro", 1), "kokoro-intro-1");
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(difficulty_label(1), "やさしい");
        assert_eq!(difficulty_label(4), "とてもむずかしい");
        assert_eq!(difficulty_label(9), "unknown");
    }
}
