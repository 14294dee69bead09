// src/domain/catalog/views.rs
//
// Derived views over a Catalog snapshot.
//
// Facets, filtered lists and recommendations are pure functions of the
// current record set. They are recomputed from scratch on every call,
// never patched incrementally.

use serde::{Deserialize, Serialize};

use super::entity::Catalog;
use crate::domain::movie::MovieRecord;

/// Fixed facet labels, always selectable regardless of catalog content.
pub const FACET_ALL: &str = "Todo";
pub const FACET_FAVORITES: &str = "favorites";
pub const FACET_WATCH_LATER: &str = "watchLater";

/// Recommendations are truncated to this many entries.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// A selectable filter over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKey {
    /// Everything, unchanged in order
    All,
    /// Records with the favorite flag set
    Favorites,
    /// Records flagged for later viewing
    WatchLater,
    /// Exact match against a record's category or saga
    Facet(String),
}

impl FilterKey {
    /// Parse a facet label as presented to the user. Unknown labels are
    /// treated as category/saga facets.
    pub fn from_label(label: &str) -> Self {
        match label {
            "all" | FACET_ALL => FilterKey::All,
            FACET_FAVORITES => FilterKey::Favorites,
            FACET_WATCH_LATER => FilterKey::WatchLater,
            other => FilterKey::Facet(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterKey::All => FACET_ALL,
            FilterKey::Favorites => FACET_FAVORITES,
            FilterKey::WatchLater => FACET_WATCH_LATER,
            FilterKey::Facet(label) => label,
        }
    }
}

impl Catalog {
    /// The subsequence of records matching the filter, in original order.
    pub fn filter(&self, key: &FilterKey) -> Vec<MovieRecord> {
        self.records()
            .iter()
            .filter(|movie| match key {
                FilterKey::All => true,
                FilterKey::Favorites => movie.is_favorite,
                FilterKey::WatchLater => movie.watch_later,
                FilterKey::Facet(label) => {
                    movie.category == *label || movie.saga.as_deref() == Some(label)
                }
            })
            .cloned()
            .collect()
    }

    /// Selectable filter labels: the fixed keys followed by every distinct
    /// category, then every distinct present saga, in first-seen order.
    pub fn facets(&self) -> Vec<String> {
        let mut facets: Vec<String> = vec![
            FACET_ALL.to_string(),
            FACET_FAVORITES.to_string(),
            FACET_WATCH_LATER.to_string(),
        ];

        let push_unique = |facets: &mut Vec<String>, label: &str| {
            if !facets.iter().any(|f| f == label) {
                facets.push(label.to_string());
            }
        };

        for movie in self.records() {
            push_unique(&mut facets, &movie.category);
        }
        for movie in self.records() {
            if let Some(saga) = &movie.saga {
                push_unique(&mut facets, saga);
            }
        }

        facets
    }

    /// Similarity-by-shared-attribute recommendations.
    ///
    /// Seeds are records with `likes > 0`. For each seed, every other
    /// record sharing its category or saga is collected; sagas match only
    /// when both are present. Results are deduplicated by id, keep the
    /// original sequence order and are truncated to MAX_RECOMMENDATIONS.
    /// A seed is never recommended as itself, but may appear as a match
    /// for another seed.
    pub fn recommendations(&self) -> Vec<MovieRecord> {
        let seeds: Vec<&MovieRecord> = self
            .records()
            .iter()
            .filter(|movie| movie.likes > 0)
            .collect();

        let mut recommended = Vec::new();
        for movie in self.records() {
            let matches_a_seed = seeds.iter().any(|seed| {
                movie.id != seed.id
                    && (movie.category == seed.category
                        || shared_saga(&movie.saga, &seed.saga))
            });
            if matches_a_seed && !recommended.iter().any(|m: &MovieRecord| m.id == movie.id) {
                recommended.push(movie.clone());
                if recommended.len() == MAX_RECOMMENDATIONS {
                    break;
                }
            }
        }

        recommended
    }
}

/// Absent sagas never count as shared.
fn shared_saga(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// The slice `[(page-1)*page_size, page*page_size)` of a filtered
/// sequence. Page numbers start at 1; out-of-range pages (including
/// page 0) yield an empty slice rather than an error.
pub fn paginate(records: &[MovieRecord], page: usize, page_size: usize) -> Vec<MovieRecord> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    // An overflowing offset is just another out-of-range page
    let start = match (page - 1).checked_mul(page_size) {
        Some(start) if start < records.len() => start,
        _ => return Vec::new(),
    };
    let end = start.saturating_add(page_size).min(records.len());
    records[start..end].to_vec()
}
