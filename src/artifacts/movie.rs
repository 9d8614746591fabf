//! Movie catalog and precomputed similarity matrix.

use std::path::Path;

use crate::artifacts::{ArtifactResult, invalid, load_json};
use crate::domain::movie::Movie;

pub const CATALOG_FILE: &str = "catalog.json";
pub const SIMILARITY_FILE: &str = "similarity.json";

/// The catalog plus its pairwise content-similarity matrix. Row `i` of the
/// matrix scores every movie against the movie at catalog position `i`.
#[derive(Debug)]
pub struct MovieLibrary {
    movies: Vec<Movie>,
    similarity: Vec<Vec<f32>>,
}

impl MovieLibrary {
    pub fn load(dir: &Path) -> ArtifactResult<Self> {
        let catalog_path = dir.join(CATALOG_FILE);
        let movies: Vec<Movie> = load_json(&catalog_path)?;
        if movies.is_empty() {
            return Err(invalid(&catalog_path, "catalog is empty"));
        }

        let similarity_path = dir.join(SIMILARITY_FILE);
        let similarity: Vec<Vec<f32>> = load_json(&similarity_path)?;
        if similarity.len() != movies.len() {
            return Err(invalid(
                &similarity_path,
                format!(
                    "matrix has {} rows, catalog has {} movies",
                    similarity.len(),
                    movies.len()
                ),
            ));
        }
        for (index, row) in similarity.iter().enumerate() {
            if row.len() != movies.len() {
                return Err(invalid(
                    &similarity_path,
                    format!("row {index} has {} columns, expected {}", row.len(), movies.len()),
                ));
            }
        }

        Ok(Self { movies, similarity })
    }

    /// Exact-match catalog position of a title.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|movie| movie.title == title)
    }

    pub fn title(&self, index: usize) -> &str {
        &self.movies[index].title
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|movie| movie.title.as_str())
    }

    pub fn similarity_row(&self, index: usize) -> &[f32] {
        &self.similarity[index]
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(movies: Vec<Movie>, similarity: Vec<Vec<f32>>) -> Self {
        Self { movies, similarity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::ArtifactError;

    fn write_artifacts(dir: &Path, catalog: &str, similarity: &str) {
        std::fs::write(dir.join(CATALOG_FILE), catalog).unwrap();
        std::fs::write(dir.join(SIMILARITY_FILE), similarity).unwrap();
    }

    #[test]
    fn loads_an_aligned_catalog_and_matrix() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(
            dir.path(),
            r#"[{"id": 10, "title": "Alpha"}, {"id": 11, "title": "Beta"}]"#,
            "[[1.0, 0.5], [0.5, 1.0]]",
        );

        let library = MovieLibrary::load(dir.path()).expect("library should load");
        assert_eq!(library.len(), 2);
        assert_eq!(library.index_of("Beta"), Some(1));
        assert_eq!(library.index_of("Gamma"), None);
        assert_eq!(library.similarity_row(0), &[1.0, 0.5]);
    }

    #[test]
    fn rejects_a_row_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(
            dir.path(),
            r#"[{"id": 10, "title": "Alpha"}, {"id": 11, "title": "Beta"}]"#,
            "[[1.0, 0.5]]",
        );

        let error = MovieLibrary::load(dir.path()).unwrap_err();
        assert!(matches!(error, ArtifactError::Invalid { .. }));
    }

    #[test]
    fn rejects_a_ragged_matrix() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(
            dir.path(),
            r#"[{"id": 10, "title": "Alpha"}, {"id": 11, "title": "Beta"}]"#,
            "[[1.0, 0.5], [0.5]]",
        );

        let error = MovieLibrary::load(dir.path()).unwrap_err();
        assert!(matches!(error, ArtifactError::Invalid { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = MovieLibrary::load(dir.path()).unwrap_err();
        assert!(matches!(error, ArtifactError::Io { .. }));
    }
}
