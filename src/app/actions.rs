use super::*;
use crate::progress::QuizResult;
use crate::quiz::QuizEvent;

impl ReaderApp {
    pub fn select_answer(&mut self, option: &str) {
        if let Some(session) = self.quiz.as_mut() {
            session.select(option);
        }
    }

    /// "次の質問" / "完了". Sin respuesta elegida no hace nada.
    pub fn submit_answer(&mut self, now: f64) -> Option<bool> {
        self.quiz.as_mut()?.submit(now)
    }

    /// Avanza el temporizador de revelado de la sesión viva. Devuelve `true`
    /// si el progreso ha cambiado (hay que guardar). Una sesión descartada ya
    /// no existe, así que su temporizador no puede dispararse.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(session) = self.quiz.as_mut() else {
            return false;
        };
        let session_id = session.id();
        match session.poll(now) {
            Some(QuizEvent::Advanced(index)) => {
                log::debug!("Quiz {session_id}: pregunta {}", index + 1);
                false
            }
            Some(QuizEvent::Completed(result)) => {
                self.quiz = None;
                self.state = AppState::Reading;
                self.complete_quiz(&result)
            }
            None => false,
        }
    }

    /// Entrega el resultado al motor de progreso y lo confirma en el store
    pub fn complete_quiz(&mut self, result: &QuizResult) -> bool {
        let before_level = self.progress().level;
        match self.store.record_quiz(&self.catalog, result) {
            Ok(progress) => {
                let level = progress.level;
                log::info!(
                    "Capítulo {}-{} completado: {}/{} (+{} EXP)",
                    result.book_id,
                    result.chapter_id,
                    result.score,
                    result.question_count,
                    result.experience_gained()
                );
                self.message = if level > before_level {
                    format!("🎉 レベル {level} になりました！")
                } else {
                    format!("+{} EXP を獲得しました！", result.experience_gained())
                };
                true
            }
            Err(e) => {
                log::warn!("Resultado de quiz rechazado: {e}");
                self.message = "⚠ クイズの結果を記録できませんでした".to_owned();
                false
            }
        }
    }
}
