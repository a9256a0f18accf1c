//! Light/dark mode preference

use std::sync::Arc;

use tokio::sync::RwLock;

use super::storage::{KeyValueStore, StorageError};

pub const THEME_KEY: &str = "theme-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Clone)]
pub struct ThemeStore {
    mode: Arc<RwLock<ThemeMode>>,
    storage: Arc<dyn KeyValueStore>,
}

impl ThemeStore {
    /// Restore the stored mode, defaulting to light.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let mode = match storage.get(THEME_KEY) {
            Ok(Some(raw)) => ThemeMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown stored theme, using light");
                ThemeMode::Light
            }),
            Ok(None) => ThemeMode::Light,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read theme preference");
                ThemeMode::Light
            }
        };

        Self {
            mode: Arc::new(RwLock::new(mode)),
            storage,
        }
    }

    pub async fn current(&self) -> ThemeMode {
        *self.mode.read().await
    }

    /// Flip and persist. The in-memory mode flips even if the write fails.
    pub async fn toggle(&self) -> Result<ThemeMode, StorageError> {
        let mut mode = self.mode.write().await;
        *mode = mode.toggled();
        tracing::info!(mode = mode.as_str(), "Theme toggled");
        self.storage.set(THEME_KEY, mode.as_str())?;
        Ok(*mode)
    }
}
