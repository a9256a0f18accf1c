//! Movie records and result pages shown in the content area

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Results per page, fixed by the upstream movie API
pub const PAGE_SIZE: u32 = 10;

/// Minimal movie record shown in lists, suggestions and favorites
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String,
    /// `None` when the upstream has no poster for this title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl MovieSummary {
    /// Label used by suggestion rows, e.g. `Inception (2010)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

/// Full movie record shown in the detail overlay
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieDetail {
    pub summary: MovieSummary,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub plot: Option<String>,
    pub rating: Option<String>,
}

/// One page of search results for a committed query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResultPage {
    pub query: String,
    pub page: u32,
    pub movies: Vec<MovieSummary>,
    pub total_results: u32,
}

impl SearchResultPage {
    pub fn total_pages(&self) -> u32 {
        page_count(self.total_results)
    }
}

/// Number of pages needed for `total_results` at [`PAGE_SIZE`] per page
pub fn page_count(total_results: u32) -> u32 {
    total_results.div_ceil(PAGE_SIZE)
}

/// Collapse records sharing an identifier, keeping first-seen order
pub fn dedup_by_id(movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::movie;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(12), 2);
        assert_eq!(page_count(431), 44);
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let movies = vec![
            movie("tt1", "Batman"),
            movie("tt2", "Batman Returns"),
            movie("tt1", "Batman (dup)"),
            movie("tt3", "Batman Begins"),
            movie("tt2", "Batman Returns (dup)"),
        ];

        let unique = dedup_by_id(movies);

        let ids: Vec<&str> = unique.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["tt1", "tt2", "tt3"]);
        assert_eq!(unique[0].title, "Batman");
    }

    #[test]
    fn test_label_includes_year() {
        let mut inception = movie("tt1375666", "Inception");
        inception.year = "2010".to_string();
        assert_eq!(inception.label(), "Inception (2010)");
    }
}
