//! Guardado del progreso en un único hueco clave-valor (`eframe::Storage`),
//! serializado como JSON.

use eframe::Storage;
use thiserror::Error;

use crate::model::Catalog;
use crate::progress::{apply_checked, ProgressError, QuizResult, UserProgress};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("progreso guardado ilegible: {0}")]
    MalformedPersistedState(#[from] serde_json::Error),
    #[error("no se pudo serializar el progreso: {0}")]
    Serialize(serde_json::Error),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error("el progreso nuevo retrocede respecto al actual")]
    Regression,
}

/// Dueño único del `UserProgress` vivo
#[derive(Debug, Clone)]
pub struct ProgressStore {
    key: String,
    current: UserProgress,
    dirty: bool,
}

impl ProgressStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            current: UserProgress::default(),
            dirty: false,
        }
    }

    /// Carga al arrancar. Si el valor guardado no se puede usar, se empieza
    /// con el progreso por defecto (nunca es un error fatal).
    pub fn load(storage: Option<&dyn Storage>, key: &str) -> Self {
        let mut store = Self::new(key);
        let Some(raw) = storage.and_then(|s| s.get_string(key)) else {
            log::info!("Sin progreso guardado en '{key}', se usa el inicial");
            return store;
        };

        match decode(&raw) {
            Ok(mut progress) => {
                if progress.normalize() {
                    // reparado: se vuelve a escribir en el próximo guardado
                    store.dirty = true;
                }
                log::info!(
                    "Progreso restaurado: nivel {}, {} EXP, {} capítulos",
                    progress.level,
                    progress.experience,
                    progress.completed_chapters.len()
                );
                store.current = progress;
            }
            Err(e) => {
                log::warn!("{e}; se vuelve al progreso inicial");
            }
        }
        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn snapshot(&self) -> &UserProgress {
        &self.current
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Sustituye el registro entero. Rechaza cualquier retroceso.
    pub fn commit(&mut self, next: UserProgress) -> Result<(), StoreError> {
        if !self.current.is_superseded_by(&next) {
            return Err(StoreError::Regression);
        }
        if next != self.current {
            self.current = next;
            self.dirty = true;
        }
        Ok(())
    }

    /// Pasa el resultado por el motor de progreso y lo confirma. Si algo
    /// falla, el progreso actual queda intacto.
    pub fn record_quiz(
        &mut self,
        catalog: &Catalog,
        result: &QuizResult,
    ) -> Result<&UserProgress, StoreError> {
        let next = apply_checked(&self.current, catalog, result)?;
        self.commit(next)?;
        Ok(&self.current)
    }

    /// Escribe el registro completo y fuerza el volcado
    pub fn persist(&mut self, storage: &mut dyn Storage) -> Result<(), StoreError> {
        let json = encode(&self.current).map_err(StoreError::Serialize)?;
        storage.set_string(&self.key, json);
        storage.flush();
        self.dirty = false;
        log::debug!("Progreso guardado en '{}'", self.key);
        Ok(())
    }
}

pub fn encode(progress: &UserProgress) -> Result<String, serde_json::Error> {
    serde_json::to_string(progress)
}

pub fn decode(raw: &str) -> Result<UserProgress, StoreError> {
    Ok(serde_json::from_str(raw)?)
}
