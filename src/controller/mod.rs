//! Controller module - Application logic and event handling
//!
//! - `input`: Key event handling
//! - `navigation`: Search, paging, detail and startup preload tasks
//! - `preferences`: Favorite and theme toggles

mod input;
mod navigation;
mod preferences;

use std::sync::Arc;

use crate::model::{AppModel, MovieCatalog};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: AppModel,
    catalog: Arc<dyn MovieCatalog>,
    popular_titles: Arc<Vec<String>>,
}

impl AppController {
    pub fn new(model: AppModel, catalog: Arc<dyn MovieCatalog>, popular_titles: Vec<String>) -> Self {
        Self {
            model,
            catalog,
            popular_titles: Arc::new(popular_titles),
        }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let error_str = error.to_string();

        if error_str.contains("Permission denied") {
            "Cannot write app data. Check permissions on the data directory.".to_string()
        } else if error_str.contains("No space left") {
            "Disk is full. Preferences were not saved.".to_string()
        } else {
            format!("Error: {}", error_str)
        }
    }
}
