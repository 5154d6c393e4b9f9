//! Read-only movie catalog rendered as the selectable options of the form.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::errors::CatalogError;

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    pub director: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: u16, director: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            director: director.into(),
        }
    }

    /// `year • director`, the line shown under each option.
    pub fn byline(&self) -> String {
        format!("{} • {}", self.year, self.director)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
}

impl MovieCatalog {
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        if movies.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { movies })
    }

    /// Catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            movies: vec![
                Movie::new("Inception", 2010, "Christopher Nolan"),
                Movie::new("Spirited Away", 2001, "Hayao Miyazaki"),
                Movie::new("The Godfather", 1972, "Francis Ford Coppola"),
                Movie::new("Parasite", 2019, "Bong Joon-ho"),
                Movie::new("Interstellar", 2014, "Christopher Nolan"),
                Movie::new("Pulp Fiction", 1994, "Quentin Tarantino"),
            ],
        }
    }

    /// Loads a JSON array of `{ "title", "year", "director" }` objects.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(data)?;
        Self::new(movies)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Finds a movie by case-insensitive title or 1-based position. An exact
    /// title wins over a position, so numeric titles stay selectable.
    pub fn resolve(&self, input: &str) -> Option<&Movie> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.movies
            .iter()
            .find(|movie| movie.title.eq_ignore_ascii_case(trimmed))
            .or_else(|| {
                trimmed
                    .parse::<usize>()
                    .ok()
                    .and_then(|position| position.checked_sub(1))
                    .and_then(|index| self.movies.get(index))
            })
    }

    /// Closest title within a small edit distance, for "did you mean" hints.
    pub fn suggest(&self, input: &str) -> Option<&Movie> {
        let needle = input.trim().to_lowercase();
        self.movies
            .iter()
            .map(|movie| (levenshtein(&movie.title.to_lowercase(), &needle), movie))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, movie)| movie)
    }
}

impl Default for MovieCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
