use super::*;
use crate::progress::level_reward;

impl ReaderApp {
    pub fn progress_summary(&self) -> ProgressSummary {
        let p = self.progress();
        ProgressSummary {
            level: p.level,
            experience: p.experience,
            experience_to_next_level: p.experience_to_next_level(),
            level_progress_percent: p.level_progress_percent(),
            completed_chapters: p.completed_chapters.len(),
            unlocked_books: p.unlocked_books.len(),
            reward: level_reward(p.level),
        }
    }

    pub fn book_cards(&self) -> Vec<BookCard> {
        let progress = self.progress();
        self.unlocked_books()
            .into_iter()
            .map(|book| BookCard {
                id: book.id.clone(),
                title: book.title.clone(),
                author: book.author.clone(),
                description: book.description.clone(),
                difficulty_label: book.difficulty_label(),
                cover_color: book.cover_color.clone(),
                chapter_count: book.chapters.len(),
                progress: progress.book_progress(book),
            })
            .collect()
    }

    pub fn chapter_rows(&self) -> Vec<ChapterRow> {
        let Some(book) = self.current_book() else {
            return Vec::new();
        };
        let current = self.current_chapter().map(|c| c.id);
        book.chapters
            .iter()
            .map(|c| ChapterRow {
                id: c.id,
                title: c.title.clone(),
                selected: Some(c.id) == current,
                completed: self.progress().is_chapter_completed(&book.id, c.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{test_app, ReaderApp};
    use crate::config::AppConfig;
    use crate::data::read_catalog_embedded;
    use crate::progress::QuizResult;
    use crate::store::tests::MemoryStorage;
    use eframe::Storage;

    #[test]
    fn summary_of_a_fresh_reader() {
        let app = test_app();
        let s = app.progress_summary();
        assert_eq!(s.level, 1);
        assert_eq!(s.experience_to_next_level, 100);
        assert_eq!(s.unlocked_books, 2);
        assert_eq!(s.reward, None);
    }

    #[test]
    fn chapter_rows_mark_completed_chapters() {
        let mut app = test_app();
        app.complete_quiz(&QuizResult {
            book_id: "melos".into(),
            chapter_id: 2,
            score: 2,
            question_count: 2,
        });
        app.open_book("melos");
        let rows = app.chapter_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].selected && !rows[0].completed);
        assert!(rows[1].completed);
        assert!(rows[1].label().starts_with('✅'));

        let melos = app.book_cards().into_iter().find(|c| c.id == "melos").unwrap();
        assert_eq!(melos.progress.completed, 1);
        assert_eq!(melos.progress.percentage, 33);
        assert_eq!(melos.action_label(), "読み始める");
    }

    #[test]
    fn summary_survives_a_record_at_the_experience_ceiling() {
        let exp = u64::MAX - 5;
        let mut storage = MemoryStorage::default();
        storage.set_string(
            "readingProgress",
            format!(
                r#"{{"level":1,"experience":{exp},"completedChapters":[],"unlockedBooks":["kokoro-intro","melos"]}}"#
            ),
        );
        let catalog = read_catalog_embedded().unwrap();
        let app = ReaderApp::new(AppConfig::default(), catalog, Some(&storage));

        let s = app.progress_summary();
        assert_eq!(s.level, exp / 100 + 1);
        assert_eq!(s.experience_to_next_level, 100 - exp % 100);
        assert_eq!(s.level_progress_percent, exp % 100);
        assert_eq!(s.unlocked_books, 5);
    }
}
