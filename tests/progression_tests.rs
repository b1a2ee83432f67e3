// Pruebas de integración: sesiones de quiz que alimentan el progreso guardado

use std::collections::HashMap;
use std::time::Duration;

use eframe::Storage;
use tobira::config::AppConfig;
use tobira::data::read_catalog_embedded;
use tobira::model::AppState;
use tobira::progress::{apply_quiz_result, level_for_experience, QuizResult, UserProgress};
use tobira::quiz::{QuizEvent, QuizSession};
use tobira::store::{decode, encode, ProgressStore};
use tobira::ReaderApp;

#[derive(Default)]
struct MemoryStorage(HashMap<String, String>);

impl Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
    fn set_string(&mut self, key: &str, value: String) {
        self.0.insert(key.to_owned(), value);
    }
    fn flush(&mut self) {}
}

fn result(book: &str, chapter: u32, score: u32, count: u32) -> QuizResult {
    QuizResult {
        book_id: book.to_owned(),
        chapter_id: chapter,
        score,
        question_count: count,
    }
}

#[test]
fn level_matches_experience_after_every_update() {
    let mut p = UserProgress::default();
    for score in [3, 0, 2, 3, 1, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3] {
        p = apply_quiz_result(&p, &result("melos", 1, score, 3)).unwrap();
        assert_eq!(p.level, p.experience / 100 + 1);
        assert_eq!(p.level, level_for_experience(p.experience));
    }
}

#[test]
fn thresholds_unlock_books_one_level_at_a_time() {
    let mut p = UserProgress::default();
    let mut seen = Vec::new();
    // 20 EXP por quiz (4/4): nivel 2 tras 5, nivel 3 tras 10, nivel 4 tras 15
    for _ in 0..15 {
        p = apply_quiz_result(&p, &result("melos", 1, 4, 4)).unwrap();
        seen.push((p.level, p.unlocked_books.len()));
    }
    assert_eq!(seen[3], (1, 2));
    assert_eq!(seen[4], (2, 3));
    assert_eq!(seen[9], (3, 4));
    assert_eq!(seen[14], (4, 5));
    assert!(p.is_book_unlocked("kokoro-advanced"));
}

#[test]
fn full_session_scores_and_persists() {
    let catalog = read_catalog_embedded().unwrap();
    let chapter = catalog.chapter("kokoro-intro", 1).unwrap();
    let mut session =
        QuizSession::start(1, "kokoro-intro", chapter, Duration::from_millis(1500)).unwrap();

    let mut now = 0.0;
    let mut completed = None;
    for (i, q) in chapter.questions.iter().enumerate() {
        // correcta, incorrecta, correcta
        let pick = if i == 1 {
            q.options.iter().find(|o| **o != q.answer).unwrap()
        } else {
            &q.answer
        };
        session.select(pick);
        session.submit(now);
        now += 1.5;
        if let Some(QuizEvent::Completed(r)) = session.poll(now) {
            completed = Some(r);
        }
    }
    let result = completed.expect("quiz terminado");
    assert_eq!(result.score, 2);

    let mut storage = MemoryStorage::default();
    let mut store = ProgressStore::load(Some(&storage), "readingProgress");
    store.record_quiz(&catalog, &result).unwrap();
    store.persist(&mut storage).unwrap();

    let reloaded = ProgressStore::load(Some(&storage), "readingProgress");
    assert_eq!(reloaded.snapshot().experience, 10);
    assert!(reloaded.snapshot().is_chapter_completed("kokoro-intro", 1));
}

#[test]
fn serialized_progress_round_trips() {
    let mut big = UserProgress::default();
    big.experience = 123_456_789;
    big.level = level_for_experience(big.experience);
    for i in 0..500 {
        big.completed_chapters.insert(format!("book{}-{}", i % 7, i));
        big.unlocked_books.insert(format!("book{i}"));
    }
    for p in [UserProgress::default(), big] {
        let back = decode(&encode(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }
}

#[test]
fn corrupt_slot_starts_fresh() {
    let mut storage = MemoryStorage::default();
    storage.set_string("readingProgress", "{\"level\": true}".to_owned());
    let store = ProgressStore::load(Some(&storage), "readingProgress");
    assert_eq!(store.snapshot(), &UserProgress::default());
}

#[test]
fn app_restores_progress_saved_by_the_web_build() {
    let mut storage = MemoryStorage::default();
    storage.set_string(
        "readingProgress",
        r#"{"level":3,"experience":215,"completedChapters":["melos-1","melos-2","kokoro-intro-1"],"unlockedBooks":["kokoro-intro","melos","kokoro-complete","hashire-melos-advanced"]}"#
            .to_owned(),
    );
    let catalog = read_catalog_embedded().unwrap();
    let mut app = ReaderApp::new(AppConfig::default(), catalog, Some(&storage));

    assert_eq!(app.progress().level, 3);
    assert_eq!(app.book_cards().len(), 4);

    app.open_book("hashire-melos-advanced");
    assert_eq!(app.state, AppState::Reading);
    app.start_quiz();
    assert_eq!(app.state, AppState::Quiz);
}
