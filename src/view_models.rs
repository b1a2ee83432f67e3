// src/view_models.rs

use crate::progress::BookProgress;

/// Tarjeta de libro en la portada
#[derive(Clone, Debug)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub difficulty_label: &'static str,
    pub cover_color: String,
    pub chapter_count: usize,
    pub progress: BookProgress,
}

impl BookCard {
    pub fn action_label(&self) -> &'static str {
        if self.progress.is_completed() {
            "再読する"
        } else {
            "読み始める"
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChapterRow {
    pub id: u32,
    pub title: String,
    pub selected: bool,
    pub completed: bool,
}

impl ChapterRow {
    pub fn label(&self) -> String {
        if self.completed {
            format!("✅ {}", self.title)
        } else {
            self.title.clone()
        }
    }
}

/// Datos del panel de progreso
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressSummary {
    pub level: u64,
    pub experience: u64,
    pub experience_to_next_level: u64,
    pub level_progress_percent: u64,
    pub completed_chapters: usize,
    pub unlocked_books: usize,
    pub reward: Option<&'static str>,
}
