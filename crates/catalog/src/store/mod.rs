//! In-memory movie collection.
//!
//! A `MovieStore` owns one insertion-ordered `Vec<Movie>` for the
//! lifetime of the process. Nothing is persisted; every operation is a
//! single linear scan or scan-plus-mutation. Duplicate ids are allowed
//! and every lookup takes the first match in scan order.

mod error;

pub use error::CatalogError;

use crate::movie::{Movie, MovieUpdate, NewMovie};

#[derive(Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Validates and appends a new record. Client-supplied ratings are
    /// discarded; the record starts unrated. Duplicate ids are not
    /// rejected.
    pub fn add(&mut self, new: NewMovie) -> Result<(), CatalogError> {
        let movie = new.into_movie().ok_or(CatalogError::MissingFields)?;
        self.movies.push(movie);
        Ok(())
    }

    /// Every record in insertion order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// First record with a matching id (exact, case-sensitive).
    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Overwrites the fields present in `update` on the first record
    /// matching `id` and returns the merged record.
    pub fn update(&mut self, id: &str, update: MovieUpdate) -> Option<Movie> {
        let movie = self.movies.iter_mut().find(|m| m.id == id)?;
        if let Some(new_id) = update.id {
            movie.id = new_id;
        }
        if let Some(title) = update.title {
            movie.title = title;
        }
        if let Some(director) = update.director {
            movie.director = director;
        }
        if let Some(release_year) = update.release_year {
            movie.release_year = release_year;
        }
        if let Some(genre) = update.genre {
            movie.genre = genre;
        }
        if let Some(ratings) = update.ratings {
            movie.ratings = ratings;
        }
        Some(movie.clone())
    }

    /// Removes the first record matching `id`, keeping the order of
    /// the remainder. Returns whether a record was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.movies.iter().position(|m| m.id == id) {
            Some(index) => {
                self.movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Appends a rating to the first record matching `id`. The range
    /// check runs before the lookup, so an out-of-range rating is
    /// rejected even for ids that do not exist.
    pub fn add_rating(&mut self, id: &str, rating: f64) -> Result<(), CatalogError> {
        if !(1.0..=5.0).contains(&rating) {
            return Err(CatalogError::RatingOutOfRange);
        }
        let movie = self
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(CatalogError::MovieNotFound)?;
        movie.ratings.push(rating);
        Ok(())
    }

    /// Mean rating of the record matching `id`; `Ok(None)` when the
    /// record exists but is unrated.
    pub fn average_rating(&self, id: &str) -> Result<Option<f64>, CatalogError> {
        let movie = self.get(id).ok_or(CatalogError::MovieNotFound)?;
        Ok(movie.mean_rating())
    }

    /// Rated records sorted by descending mean rating. Unrated records
    /// are excluded; the sort is stable, so equal means keep insertion
    /// order.
    pub fn top_rated(&self) -> Vec<Movie> {
        let mut ranked: Vec<(f64, &Movie)> = self
            .movies
            .iter()
            .filter_map(|m| m.mean_rating().map(|mean| (mean, m)))
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().map(|(_, m)| m.clone()).collect()
    }

    /// Records whose genre equals `genre`, ignoring case.
    pub fn by_genre(&self, genre: &str) -> Vec<Movie> {
        let genre = genre.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.genre.to_lowercase() == genre)
            .cloned()
            .collect()
    }

    /// Records whose director equals `director`, ignoring case.
    pub fn by_director(&self, director: &str) -> Vec<Movie> {
        let director = director.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.director.to_lowercase() == director)
            .cloned()
            .collect()
    }

    /// Records whose title contains `keyword`, ignoring case. Only the
    /// title is searched.
    pub fn search(&self, keyword: &str) -> Vec<Movie> {
        let keyword = keyword.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&keyword))
            .cloned()
            .collect()
    }
}
