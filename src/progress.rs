//! Progreso del lector: experiencia, nivel, capítulos completados y libros
//! desbloqueados, y las reglas que lo hacen avanzar tras cada quiz.
//!
//! El nivel nunca se guarda "por su cuenta": siempre se recalcula a partir de
//! la experiencia total (`experience / 100 + 1`).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{chapter_key, Book, Catalog};

/// Libros disponibles desde el primer arranque
pub const SEED_BOOKS: [&str; 2] = ["kokoro-intro", "melos"];
pub const EXP_PER_CORRECT: u64 = 5;
pub const EXP_PER_LEVEL: u64 = 100;
/// (nivel mínimo, libro que se desbloquea)
pub const UNLOCK_THRESHOLDS: [(u64, &str); 3] = [
    (2, "kokoro-complete"),
    (3, "hashire-melos-advanced"),
    (4, "kokoro-advanced"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("puntuación {score} fuera de rango (0..={question_count})")]
    InvalidScore { score: u32, question_count: u32 },
    #[error("capítulo desconocido: {book_id}-{chapter_id}")]
    UnknownChapterReference { book_id: String, chapter_id: u32 },
}

/// Resultado de un quiz terminado, tal como lo entrega la sesión
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub book_id: String,
    pub chapter_id: u32,
    pub score: u32,
    pub question_count: u32,
}

impl QuizResult {
    pub fn experience_gained(&self) -> u64 {
        u64::from(self.score) * EXP_PER_CORRECT
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub level: u64,
    pub experience: u64,
    pub completed_chapters: BTreeSet<String>,
    pub unlocked_books: BTreeSet<String>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            completed_chapters: BTreeSet::new(),
            unlocked_books: SEED_BOOKS.iter().map(|b| b.to_string()).collect(),
        }
    }
}

pub fn level_for_experience(experience: u64) -> u64 {
    experience / EXP_PER_LEVEL + 1
}

/// Mensaje de recompensa mostrado al alcanzar ciertos niveles
pub fn level_reward(level: u64) -> Option<&'static str> {
    match level {
        2 => Some("新しい本が解放されました！"),
        3 => Some("上級者向けの本が解放されました！"),
        4 => Some("全ての本が読めるようになりました！"),
        _ => None,
    }
}

/// Añade los libros que corresponden a `level`. Cada umbral se comprueba por
/// separado, así que un salto de varios niveles los desbloquea todos.
fn unlock_for_level(unlocked: &mut BTreeSet<String>, level: u64) -> Vec<&'static str> {
    let mut newly = Vec::new();
    for (min_level, book) in UNLOCK_THRESHOLDS {
        if level >= min_level && unlocked.insert(book.to_string()) {
            newly.push(book);
        }
    }
    newly
}

/// Aplica el resultado de un quiz y devuelve el progreso nuevo.
/// `progress` no se modifica.
pub fn apply_quiz_result(
    progress: &UserProgress,
    result: &QuizResult,
) -> Result<UserProgress, ProgressError> {
    if result.score > result.question_count {
        return Err(ProgressError::InvalidScore {
            score: result.score,
            question_count: result.question_count,
        });
    }

    let experience = progress
        .experience
        .saturating_add(result.experience_gained());
    let level = level_for_experience(experience);

    let mut completed_chapters = progress.completed_chapters.clone();
    completed_chapters.insert(chapter_key(&result.book_id, result.chapter_id));

    let mut unlocked_books = progress.unlocked_books.clone();
    for book in unlock_for_level(&mut unlocked_books, level) {
        log::info!("Nivel {level}: libro desbloqueado {book}");
    }

    Ok(UserProgress {
        level,
        experience,
        completed_chapters,
        unlocked_books,
    })
}

/// Como [`apply_quiz_result`], pero además exige que el capítulo exista en
/// el catálogo y que el número de preguntas coincida con el suyo.
pub fn apply_checked(
    progress: &UserProgress,
    catalog: &Catalog,
    result: &QuizResult,
) -> Result<UserProgress, ProgressError> {
    let chapter = catalog
        .chapter(&result.book_id, result.chapter_id)
        .ok_or_else(|| ProgressError::UnknownChapterReference {
            book_id: result.book_id.clone(),
            chapter_id: result.chapter_id,
        })?;

    if chapter.questions.len() != result.question_count as usize {
        return Err(ProgressError::InvalidScore {
            score: result.score,
            question_count: result.question_count,
        });
    }

    apply_quiz_result(progress, result)
}

/// Progreso de lectura de un libro concreto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

impl BookProgress {
    pub fn is_completed(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl UserProgress {
    pub fn is_chapter_completed(&self, book_id: &str, chapter_id: u32) -> bool {
        self.completed_chapters
            .contains(&chapter_key(book_id, chapter_id))
    }

    pub fn is_book_unlocked(&self, book_id: &str) -> bool {
        self.unlocked_books.contains(book_id)
    }

    /// Sin multiplicar por el nivel: la experiencia puede llegar a `u64::MAX`
    pub fn experience_to_next_level(&self) -> u64 {
        EXP_PER_LEVEL - self.experience % EXP_PER_LEVEL
    }

    /// Avance dentro del nivel actual, 0..=99
    pub fn level_progress_percent(&self) -> u64 {
        self.experience % EXP_PER_LEVEL
    }

    /// Cuenta capítulos por clave exacta, no por prefijo: "kokoro-intro-1"
    /// no debe contar para un libro "kokoro".
    pub fn book_progress(&self, book: &Book) -> BookProgress {
        let total = book.chapters.len();
        let completed = book
            .chapters
            .iter()
            .filter(|c| self.is_chapter_completed(&book.id, c.id))
            .count();
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        BookProgress {
            completed,
            total,
            percentage,
        }
    }

    /// Repara un registro restaurado: nivel recalculado desde la experiencia,
    /// libros semilla presentes y desbloqueos acordes al nivel.
    /// Devuelve `true` si hubo que tocar algo.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;

        let level = level_for_experience(self.experience);
        if self.level != level {
            log::warn!(
                "Nivel guardado {} no cuadra con {} EXP; se recalcula a {}",
                self.level,
                self.experience,
                level
            );
            self.level = level;
            changed = true;
        }

        for seed in SEED_BOOKS {
            changed |= self.unlocked_books.insert(seed.to_string());
        }
        changed |= !unlock_for_level(&mut self.unlocked_books, level).is_empty();

        changed
    }

    /// `true` si `next` no pierde nada respecto a `self`
    pub fn is_superseded_by(&self, next: &UserProgress) -> bool {
        next.experience >= self.experience
            && next.completed_chapters.is_superset(&self.completed_chapters)
            && next.unlocked_books.is_superset(&self.unlocked_books)
    }
}
