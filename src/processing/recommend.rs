//! Content-based movie recommendations over the precomputed similarity
//! matrix, enriched with metadata lookups.

use futures::future;
use thiserror::Error;

use crate::artifacts::movie::MovieLibrary;
use crate::domain::movie::MovieDetails;
use crate::metadata::MovieMetadataFetcher;

/// Bounds of the recommendation count the selector offers.
pub const MIN_RECOMMENDATIONS: usize = 3;
pub const MAX_RECOMMENDATIONS: usize = 9;
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("unknown title: {0:?}")]
    UnknownTitle(String),
}

/// Catalog positions most similar to the movie at `index`, best first,
/// excluding the movie itself. Ties keep catalog order (stable sort).
pub fn rank_similar(library: &MovieLibrary, index: usize, count: usize) -> Vec<(usize, f32)> {
    let row = library.similarity_row(index);
    let mut scored: Vec<(usize, f32)> = row
        .iter()
        .enumerate()
        .filter(|(candidate, _)| *candidate != index)
        .map(|(candidate, score)| (candidate, *score))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(count);
    scored
}

/// Recommend up to `count` movies for an exact catalog title and fetch
/// details for each. Titles whose metadata lookup fails are dropped from
/// the result.
pub async fn recommend<F>(
    library: &MovieLibrary,
    fetcher: &F,
    title: &str,
    count: usize,
) -> Result<Vec<MovieDetails>, RecommendError>
where
    F: MovieMetadataFetcher + ?Sized,
{
    let index = library
        .index_of(title)
        .ok_or_else(|| RecommendError::UnknownTitle(title.to_string()))?;

    let ranked = rank_similar(library, index, count);
    let tasks = ranked
        .iter()
        .map(|(candidate, _)| fetcher.fetch(library.title(*candidate)));
    let fetched = future::join_all(tasks).await;

    let mut details = Vec::with_capacity(fetched.len());
    let mut dropped = 0;
    for ((candidate, _), fetch_result) in ranked.iter().zip(fetched) {
        match fetch_result {
            Some(movie) => details.push(movie),
            None => {
                dropped += 1;
                log::warn!(
                    "Dropping recommendation {:?}: no metadata",
                    library.title(*candidate)
                );
            }
        }
    }

    log::info!(
        "Finished recommendations for {title:?}: requested={}, resolved={}, dropped={dropped}",
        ranked.len(),
        details.len()
    );

    Ok(details)
}
