use crate::config::AppConfig;
use crate::data::{read_catalog_embedded, CatalogError};
use crate::model::{AppState, Catalog};
use crate::progress::UserProgress;
use crate::quiz::QuizSession;
use crate::store::ProgressStore;
use eframe::Storage;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{BookCard, ChapterRow, ProgressSummary};

/// Contexto de la aplicación: dueño del progreso, del catálogo y de la
/// sesión de quiz en curso. Todo cambio de progreso pasa por aquí.
pub struct ReaderApp {
    pub catalog: Catalog,
    pub config: AppConfig,
    pub store: ProgressStore,
    pub state: AppState,
    pub selected_book: Option<String>,
    pub current_chapter: Option<u32>,
    pub show_original: bool,
    pub quiz: Option<QuizSession>,
    pub message: String,
    next_session_id: u64,
    unsaved_warning_shown: bool,
}

impl ReaderApp {
    pub fn new(config: AppConfig, catalog: Catalog, storage: Option<&dyn Storage>) -> Self {
        let store = ProgressStore::load(storage, &config.storage_key);
        Self {
            catalog,
            config,
            store,
            state: AppState::Home,
            selected_book: None,
            current_chapter: None,
            show_original: false,
            quiz: None,
            message: String::new(),
            next_session_id: 1,
            unsaved_warning_shown: false,
        }
    }

    /// Arranque desde eframe: catálogo embebido + progreso guardado
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>) -> Result<Self, CatalogError> {
        let config = AppConfig::from_env();
        let catalog = read_catalog_embedded()?;
        Ok(Self::new(config, catalog, cc.storage))
    }

    /// Progreso actual (sólo lectura)
    pub fn progress(&self) -> &UserProgress {
        self.store.snapshot()
    }

    /// Guarda si hay cambios pendientes. Sin almacenamiento el progreso sigue
    /// en memoria y se avisa una vez, sin bloquear.
    pub fn persist_if_dirty(&mut self, storage: Option<&mut dyn Storage>) {
        if !self.store.is_dirty() {
            return;
        }
        match storage {
            Some(storage) => self.persist(storage),
            None => {
                if !self.unsaved_warning_shown {
                    log::warn!("Sin almacenamiento: el progreso no se guardará en esta sesión");
                    self.message = "⚠ 進捗を保存できませんでした（このセッションのみ有効です）".to_owned();
                    self.unsaved_warning_shown = true;
                }
            }
        }
    }

    pub fn persist(&mut self, storage: &mut dyn Storage) {
        if let Err(e) = self.store.persist(storage) {
            log::warn!("No se pudo guardar el progreso: {e}");
            self.message = "⚠ 進捗を保存できませんでした".to_owned();
        }
    }

    pub(crate) fn next_session_id(&mut self) -> u64 {
        let id = self.next_session_id;
        self.next_session_id += 1;
        id
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> ReaderApp {
    let catalog = read_catalog_embedded().expect("catálogo embebido");
    ReaderApp::new(AppConfig::default(), catalog, None)
}
