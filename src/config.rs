use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "readingProgress";
pub const DEFAULT_REVEAL: Duration = Duration::from_secs(2);
pub const APP_TITLE: &str = "文学の扉 - やさしい日本語で読む名作";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Tiempo que se muestra la corrección antes de pasar de pregunta
    pub reveal_duration: Duration,
    /// Clave del hueco donde se guarda el progreso
    pub storage_key: String,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reveal_duration: DEFAULT_REVEAL,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            title: APP_TITLE.to_owned(),
        }
    }
}

impl AppConfig {
    /// Valores por defecto con los ajustes del entorno encima
    /// (`TOBIRA_REVEAL_MS`, `TOBIRA_STORAGE_KEY`). En web no hay entorno.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default().with_overrides(|name| std::env::var(name).ok())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    /// Aplica los ajustes que devuelva `lookup`. Los valores inválidos se
    /// ignoran con un aviso.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup("TOBIRA_REVEAL_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.reveal_duration = Duration::from_millis(ms),
                Err(e) => log::warn!("TOBIRA_REVEAL_MS inválido ({raw}): {e}"),
            }
        }
        if let Some(key) = lookup("TOBIRA_STORAGE_KEY") {
            let key = key.trim();
            if key.is_empty() {
                log::warn!("TOBIRA_STORAGE_KEY vacío, se mantiene '{}'", self.storage_key);
            } else {
                self.storage_key = key.to_owned();
            }
        }
        self
    }
}
