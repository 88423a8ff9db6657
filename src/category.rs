//! Category labels and per-category counts for the home screen.

use serde::{Deserialize, Serialize};

use crate::hymn::Hymn;

/// Id of the pseudo-category listing favorite hymns.
pub const FAVORITES_CATEGORY: &str = "favorites";

/// Categories that always appear, even when empty: `(id, name, description)`.
const KNOWN_CATEGORIES: [(&str, &str, &str); 2] = [
    (
        "harpa-crista",
        "Harpa Cristã",
        "Hinos tradicionais da Harpa Cristã",
    ),
    (
        "louvores-gerais",
        "Louvores Gerais",
        "Cânticos e louvores contemporâneos",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub count: usize,
}

/// Display name and description for a category id.
pub fn label(id: &str) -> (&'static str, &'static str) {
    if id == FAVORITES_CATEGORY {
        return ("Favoritos", "Seus hinos preferidos");
    }
    KNOWN_CATEGORIES
        .iter()
        .find(|(known, _, _)| *known == id)
        .map(|(_, name, description)| (*name, *description))
        .unwrap_or(("Categoria", "Hinos da categoria"))
}

/// Known categories first, then any other category in first-seen order, then
/// favorites.
pub fn summaries(hymns: &[Hymn]) -> Vec<CategorySummary> {
    let mut ids: Vec<&str> = KNOWN_CATEGORIES.iter().map(|(id, _, _)| *id).collect();
    for hymn in hymns {
        if !ids.contains(&hymn.category.as_str()) {
            ids.push(&hymn.category);
        }
    }

    let mut result: Vec<CategorySummary> = ids
        .into_iter()
        .map(|id| {
            let count = hymns.iter().filter(|hymn| hymn.category == id).count();
            summary(id, count)
        })
        .collect();

    let favorites = hymns.iter().filter(|hymn| hymn.is_favorite).count();
    result.push(summary(FAVORITES_CATEGORY, favorites));
    result
}

fn summary(id: &str, count: usize) -> CategorySummary {
    let (name, description) = label(id);
    CategorySummary {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        count,
    }
}
