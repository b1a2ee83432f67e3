// src/data.rs

use std::collections::HashSet;

use crate::model::Catalog;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no se pudo parsear el catálogo YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("libro duplicado: {0}")]
    DuplicateBook(String),
    #[error("capítulo duplicado {chapter} en el libro {book}")]
    DuplicateChapter { book: String, chapter: u32 },
    #[error("dificultad {difficulty} fuera de rango (1..=4) en el libro {book}")]
    InvalidDifficulty { book: String, difficulty: u8 },
    #[error("la respuesta de la pregunta {question} ({book}-{chapter}) no está entre las opciones")]
    AnswerNotInOptions {
        book: String,
        chapter: u32,
        question: usize,
    },
}

/// Carga el catálogo de libros desde el YAML embebido
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    let file_content = include_str!("data/books.yaml");
    parse_catalog(file_content)
}

/// Parsea y valida un catálogo. Cualquier fallo invalida el catálogo entero.
pub fn parse_catalog(yaml: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    validate_catalog(&catalog)?;
    log::debug!("Catálogo cargado: {} libros", catalog.books.len());
    Ok(catalog)
}

pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut book_ids = HashSet::new();
    for book in &catalog.books {
        if !book_ids.insert(book.id.as_str()) {
            return Err(CatalogError::DuplicateBook(book.id.clone()));
        }
        if !(1..=4).contains(&book.difficulty) {
            return Err(CatalogError::InvalidDifficulty {
                book: book.id.clone(),
                difficulty: book.difficulty,
            });
        }

        let mut chapter_ids = HashSet::new();
        for chapter in &book.chapters {
            if !chapter_ids.insert(chapter.id) {
                return Err(CatalogError::DuplicateChapter {
                    book: book.id.clone(),
                    chapter: chapter.id,
                });
            }
            for (qi, q) in chapter.questions.iter().enumerate() {
                if !q.options.iter().any(|o| o == &q.answer) {
                    return Err(CatalogError::AnswerNotInOptions {
                        book: book.id.clone(),
                        chapter: chapter.id,
                        question: qi,
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{SEED_BOOKS, UNLOCK_THRESHOLDS};

    const SMALL: &str = r#"
books:
  - id: melos
    title: 走れメロス
    author: 太宰治
    description: 友情の物語
    difficulty: 1
    cover_color: bg-red-500
    chapters:
      - id: 1
        title: メロスの怒り
        original_text: メロスは激怒した。
        simple_text: メロスはとても怒った。
        questions:
          - question: メロスはどうした？
            options: [笑った, 怒った]
            answer: 怒った
"#;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = read_catalog_embedded().expect("el catálogo embebido debe ser válido");
        assert!(!catalog.books.is_empty());
        for book in &catalog.books {
            assert!(!book.chapters.is_empty(), "{} sin capítulos", book.id);
            for ch in &book.chapters {
                assert!(!ch.questions.is_empty(), "{}-{} sin preguntas", book.id, ch.id);
            }
        }
    }

    #[test]
    fn embedded_catalog_has_every_book_the_progression_mentions() {
        let catalog = read_catalog_embedded().unwrap();
        for id in SEED_BOOKS
            .iter()
            .copied()
            .chain(UNLOCK_THRESHOLDS.iter().map(|(_, id)| *id))
        {
            assert!(catalog.book(id).is_some(), "falta el libro {id}");
        }
    }

    #[test]
    fn parses_small_catalog() {
        let catalog = parse_catalog(SMALL).unwrap();
        let ch = catalog.chapter("melos", 1).unwrap();
        assert_eq!(ch.questions[0].answer, "怒った");
        assert!(catalog.chapter("melos", 2).is_none());
    }

    #[test]
    fn rejects_answer_missing_from_options() {
        let bad = SMALL.replace("answer: 怒った", "answer: 泣いた");
        let err = parse_catalog(&bad).unwrap_err();
        assert!(matches!(err, CatalogError::AnswerNotInOptions { question: 0, .. }));
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        let bad = SMALL.replace("difficulty: 1", "difficulty: 7");
        assert!(matches!(
            parse_catalog(&bad),
            Err(CatalogError::InvalidDifficulty { difficulty: 7, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_books() {
        let mut catalog = parse_catalog(SMALL).unwrap();
        let dup = catalog.books[0].clone();
        catalog.books.push(dup);
        assert!(matches!(
            validate_catalog(&catalog),
            Err(CatalogError::DuplicateBook(id)) if id == "melos"
        ));
    }

    #[test]
    fn rejects_duplicate_chapters() {
        let mut catalog = parse_catalog(SMALL).unwrap();
        let dup = catalog.books[0].chapters[0].clone();
        catalog.books[0].chapters.push(dup);
        assert!(matches!(
            validate_catalog(&catalog),
            Err(CatalogError::DuplicateChapter { chapter: 1, .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(parse_catalog("books: [ {"), Err(CatalogError::Parse(_))));
    }
}
