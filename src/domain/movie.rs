use serde::Deserialize;

/// One catalog entry. Catalog order is significant: row `i` of the
/// similarity matrix describes the movie at catalog position `i`.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
}

/// Metadata fetched for a single title from the external movie API.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub poster: String,
}
