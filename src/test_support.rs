//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::api::types::Movie;

/// Builds a movie record from its four wire fields.
pub fn movie(imdb_id: &str, title: &str, year: &str, poster: &str) -> Movie {
    Movie {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster: poster.to_string(),
    }
}

/// A small result set in server order, posters included.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie(
            "tt0096895",
            "Batman",
            "1989",
            "https://example.com/batman.jpg",
        ),
        movie(
            "tt0103776",
            "Batman Returns",
            "1992",
            "https://example.com/returns.jpg",
        ),
        movie("tt0118688", "Batman & Robin", "1997", "N/A"),
    ]
}
