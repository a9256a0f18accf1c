//! Model module - Application state and data types
//!
//! - `types`: UI focus and overlay state
//! - `content`: Movie records and result pages
//! - `catalog`: Traits over the external movie and video APIs
//! - `omdb_client` / `youtube_client`: HTTP implementations of those traits
//! - `storage`: Key-value persistence backends
//! - `favorites` / `theme`: Persisted user preferences
//! - `suggestions` / `search` / `detail` / `popular`: Flow engines
//! - `app_model`: Main application model tying the above together

mod types;
mod content;
mod catalog;
mod omdb_client;
mod youtube_client;
mod storage;
mod favorites;
mod theme;
mod suggestions;
mod search;
mod detail;
mod popular;
mod app_model;

#[cfg(test)]
pub(crate) mod testing;

pub use types::{ActiveSection, UiState};

pub use content::{MovieDetail, MovieSummary};
#[cfg(test)]
pub use content::SearchResultPage;

pub use catalog::MovieCatalog;
#[cfg(test)]
pub use catalog::Trailer;
pub use omdb_client::OmdbClient;
pub use youtube_client::YoutubeClient;

pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use theme::ThemeMode;

pub use suggestions::Suggestion;
#[cfg(test)]
pub use suggestions::SuggestionSnapshot;
pub use search::{EmptyReason, Pagination, SearchState};
pub use detail::{DetailView, TrailerState};
pub use popular::load_popular;

pub use app_model::{AppModel, ViewState};
