//! Sesión de quiz de un capítulo.
//!
//! Estados: `Answering(i)` → `ShowingResult(i)` → (tras `reveal`)
//! `Answering(i + 1)` o `Completed`. El tiempo entra siempre desde fuera
//! (`now`, en segundos), así la sesión no depende de ningún reloj.

use std::time::Duration;

use thiserror::Error;

use crate::model::{Chapter, Question};
use crate::progress::QuizResult;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("el capítulo {book_id}-{chapter_id} no tiene preguntas")]
    EmptyQuiz { book_id: String, chapter_id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizPhase {
    Answering,
    ShowingResult { correct: bool, due_at: f64 },
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Advanced(usize),
    Completed(QuizResult),
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    id: u64,
    book_id: String,
    chapter_id: u32,
    questions: Vec<Question>,
    reveal: Duration,
    index: usize,
    selected: Option<String>,
    correct_count: u32,
    answers: Vec<String>,
    phase: QuizPhase,
}

impl QuizSession {
    pub fn start(
        id: u64,
        book_id: &str,
        chapter: &Chapter,
        reveal: Duration,
    ) -> Result<Self, QuizError> {
        if chapter.questions.is_empty() {
            return Err(QuizError::EmptyQuiz {
                book_id: book_id.to_owned(),
                chapter_id: chapter.id,
            });
        }
        log::debug!("Quiz {id} iniciado: {book_id}-{}", chapter.id);
        Ok(Self {
            id,
            book_id: book_id.to_owned(),
            chapter_id: chapter.id,
            questions: chapter.questions.clone(),
            reveal,
            index: 0,
            selected: None,
            correct_count: 0,
            answers: Vec::new(),
            phase: QuizPhase::Answering,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn chapter_id(&self) -> u32 {
        self.chapter_id
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        // index < len siempre: sólo avanza si hay siguiente pregunta
        &self.questions[self.index]
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Preguntas ya contestadas (la que se está mostrando cuenta)
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, QuizPhase::Completed)
    }

    /// Sólo se puede salir mientras se contesta
    pub fn can_abandon(&self) -> bool {
        matches!(self.phase, QuizPhase::Answering)
    }

    /// Instante en que vence el temporizador de revelado, si está armado
    pub fn reveal_due_at(&self) -> Option<f64> {
        match self.phase {
            QuizPhase::ShowingResult { due_at, .. } => Some(due_at),
            _ => None,
        }
    }

    /// Marca `option` como respuesta pendiente (sustituye la anterior).
    /// Devuelve `false` si no se acepta.
    pub fn select(&mut self, option: &str) -> bool {
        if !matches!(self.phase, QuizPhase::Answering) {
            return false;
        }
        if !self.current_question().options.iter().any(|o| o == option) {
            return false;
        }
        self.selected = Some(option.to_owned());
        true
    }

    /// Envía la respuesta pendiente y arma el temporizador. Sin respuesta
    /// pendiente no hace nada y devuelve `None`.
    pub fn submit(&mut self, now: f64) -> Option<bool> {
        if !matches!(self.phase, QuizPhase::Answering) {
            return None;
        }
        let selected = self.selected.clone()?;
        let correct = self.current_question().is_correct(&selected);
        if correct {
            self.correct_count += 1;
        }
        self.answers.push(selected);
        self.phase = QuizPhase::ShowingResult {
            correct,
            due_at: now + self.reveal.as_secs_f64(),
        };
        log::debug!(
            "Quiz {}: pregunta {} {}",
            self.id,
            self.index + 1,
            if correct { "correcta" } else { "incorrecta" }
        );
        Some(correct)
    }

    /// Dispara el temporizador si ya venció. Sólo produce un evento por
    /// revelado; en `Completed` siempre devuelve `None`.
    pub fn poll(&mut self, now: f64) -> Option<QuizEvent> {
        let QuizPhase::ShowingResult { due_at, .. } = self.phase else {
            return None;
        };
        if now < due_at {
            return None;
        }

        self.selected = None;
        if self.is_last_question() {
            self.phase = QuizPhase::Completed;
            let result = QuizResult {
                book_id: self.book_id.clone(),
                chapter_id: self.chapter_id,
                score: self.correct_count,
                question_count: self.questions.len() as u32,
            };
            log::debug!(
                "Quiz {} completado: {}/{}",
                self.id,
                result.score,
                result.question_count
            );
            Some(QuizEvent::Completed(result))
        } else {
            self.index += 1;
            self.phase = QuizPhase::Answering;
            Some(QuizEvent::Advanced(self.index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVEAL: Duration = Duration::from_secs(2);

    fn q(answer: &str, options: &[&str]) -> Question {
        Question {
            question: format!("¿{answer}?"),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    fn chapter(questions: Vec<Question>) -> Chapter {
        Chapter {
            id: 1,
            title: "メロスの怒り".into(),
            original_text: String::new(),
            simple_text: String::new(),
            questions,
        }
    }

    fn three_questions() -> Chapter {
        chapter(vec![
            q("a", &["a", "b"]),
            q("c", &["c", "d"]),
            q("e", &["e", "f"]),
        ])
    }

    #[test]
    fn empty_chapter_cannot_start() {
        let err = QuizSession::start(1, "melos", &chapter(vec![]), REVEAL).unwrap_err();
        assert_eq!(
            err,
            QuizError::EmptyQuiz {
                book_id: "melos".into(),
                chapter_id: 1
            }
        );
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut s = QuizSession::start(1, "melos", &three_questions(), REVEAL).unwrap();
        assert_eq!(s.submit(0.0), None);
        assert_eq!(s.phase(), QuizPhase::Answering);
        assert!(s.answers().is_empty());
    }

    #[test]
    fn selecting_again_replaces_the_pending_answer() {
        let mut s = QuizSession::start(1, "melos", &three_questions(), REVEAL).unwrap();
        assert!(s.select("b"));
        assert!(s.select("a"));
        assert_eq!(s.selected(), Some("a"));
        assert!(!s.select("z"), "opción inexistente");
        assert_eq!(s.selected(), Some("a"));
        assert_eq!(s.submit(0.0), Some(true));
        assert_eq!(s.answers(), ["a".to_string()]);
    }

    #[test]
    fn scores_correct_wrong_correct_as_two() {
        let mut s = QuizSession::start(7, "melos", &three_questions(), REVEAL).unwrap();
        let mut now = 0.0;
        let mut outcome = None;
        for pick in ["a", "d", "e"] {
            assert!(s.select(pick));
            s.submit(now).unwrap();
            now += 2.0;
            outcome = s.poll(now);
        }
        let Some(QuizEvent::Completed(result)) = outcome else {
            panic!("el quiz debería haber terminado");
        };
        assert_eq!(result.score, 2);
        assert_eq!(result.question_count, 3);
        assert_eq!(result.experience_gained(), 10);
        assert_eq!(result.book_id, "melos");
        assert!(s.is_completed());
    }

    #[test]
    fn reveal_waits_for_the_timer() {
        let mut s = QuizSession::start(1, "melos", &three_questions(), REVEAL).unwrap();
        s.select("b");
        assert_eq!(s.submit(10.0), Some(false));
        assert!(!s.can_abandon());
        assert!(!s.select("a"), "no se cambia la respuesta durante el revelado");
        assert_eq!(s.reveal_due_at(), Some(12.0));
        assert_eq!(s.poll(11.9), None);
        assert_eq!(s.poll(12.0), Some(QuizEvent::Advanced(1)));
        assert_eq!(s.selected(), None);
        assert!(s.can_abandon());
        // el temporizador sólo dispara una vez
        assert_eq!(s.poll(20.0), None);
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn completed_session_is_inert() {
        let mut s = QuizSession::start(1, "melos", &chapter(vec![q("a", &["a"])]), REVEAL).unwrap();
        s.select("a");
        s.submit(0.0);
        assert!(matches!(s.poll(5.0), Some(QuizEvent::Completed(_))));
        assert_eq!(s.poll(10.0), None);
        assert!(!s.select("a"));
        assert_eq!(s.submit(11.0), None);
        assert!(!s.can_abandon());
    }

    #[test]
    fn second_submit_during_reveal_is_ignored() {
        let mut s = QuizSession::start(1, "melos", &three_questions(), REVEAL).unwrap();
        s.select("a");
        s.submit(0.0);
        assert_eq!(s.submit(0.5), None);
        assert_eq!(s.correct_count(), 1);
        assert_eq!(s.answered_count(), 1);
    }
}
