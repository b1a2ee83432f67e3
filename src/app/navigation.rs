use super::*;

impl ReaderApp {
    pub fn go_home(&mut self) {
        self.abandon_quiz();
        self.state = AppState::Home;
        self.message.clear();
    }

    /// Abre un libro desbloqueado en su primer capítulo
    pub fn open_book(&mut self, book_id: &str) {
        if !self.progress().is_book_unlocked(book_id) {
            log::debug!("Libro bloqueado: {book_id}");
            return;
        }
        let first = match self.catalog.book(book_id) {
            Some(book) => book.chapters.first().map(|c| c.id),
            None => return, // libro desconocido, no hacer nada
        };
        self.selected_book = Some(book_id.to_owned());
        self.current_chapter = first;
        self.show_original = false;
        self.state = AppState::Reading;
        self.message.clear();
    }

    /// Pestaña "読書": sólo si hay libro elegido
    pub fn open_reading(&mut self) {
        if self.selected_book.is_none() {
            return;
        }
        self.abandon_quiz();
        self.state = AppState::Reading;
    }

    pub fn select_chapter(&mut self, chapter_id: u32) {
        let exists = self
            .current_book()
            .map(|b| b.chapter(chapter_id).is_some())
            .unwrap_or(false);
        if !exists {
            return;
        }
        self.current_chapter = Some(chapter_id);
        self.state = AppState::Reading;
    }

    pub fn previous_chapter(&mut self) {
        if let Some(id) = self.neighbour_chapter(-1) {
            self.select_chapter(id);
        }
    }

    pub fn next_chapter(&mut self) {
        if let Some(id) = self.neighbour_chapter(1) {
            self.select_chapter(id);
        }
    }

    pub fn has_previous_chapter(&self) -> bool {
        self.neighbour_chapter(-1).is_some()
    }

    pub fn has_next_chapter(&self) -> bool {
        self.neighbour_chapter(1).is_some()
    }

    pub fn toggle_original(&mut self) {
        self.show_original = !self.show_original;
    }

    /// Empieza un quiz nuevo del capítulo actual, siempre desde la pregunta 0
    pub fn start_quiz(&mut self) {
        let (book_id, chapter) = match (self.current_book(), self.current_chapter()) {
            (Some(b), Some(c)) => (b.id.clone(), c.clone()),
            _ => return,
        };
        let id = self.next_session_id();
        match QuizSession::start(id, &book_id, &chapter, self.config.reveal_duration) {
            Ok(session) => {
                self.quiz = Some(session);
                self.state = AppState::Quiz;
                self.message.clear();
            }
            Err(e) => {
                log::warn!("{e}");
                self.message = "この章にはクイズがありません".to_owned();
            }
        }
    }

    /// Botón "volver" del quiz. Sólo vale mientras se contesta; no suma nada.
    pub fn leave_quiz(&mut self) {
        let can_leave = self.quiz.as_ref().map(|q| q.can_abandon()).unwrap_or(true);
        if !can_leave {
            return;
        }
        self.abandon_quiz();
        self.state = AppState::Reading;
    }

    /// Estado `Quiz` sin sesión viva: vuelve a la lectura, o a la portada si
    /// no hay libro elegido
    pub fn quiz_ended_without_session(&mut self) {
        if self.selected_book.is_some() {
            self.open_reading();
        } else {
            self.go_home();
        }
    }

    /// Descarta la sesión y, con ella, su temporizador de revelado
    pub(crate) fn abandon_quiz(&mut self) {
        if let Some(session) = self.quiz.take() {
            if !session.is_completed() {
                log::debug!("Quiz {} abandonado", session.id());
            }
        }
    }

    fn neighbour_chapter(&self, step: isize) -> Option<u32> {
        let book = self.current_book()?;
        let pos = book.chapter_position(self.current_chapter?)?;
        let target = pos.checked_add_signed(step)?;
        book.chapters.get(target).map(|c| c.id)
    }
}
