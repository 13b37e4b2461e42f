use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog record: identity, descriptive fields, and every rating
/// received so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    #[serde(default)]
    pub ratings: Vec<f64>,
}

impl Movie {
    /// Arithmetic mean of all received ratings, `None` while unrated.
    pub fn mean_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: f64 = self.ratings.iter().sum();
        Some(sum / self.ratings.len() as f64)
    }
}

/// Creation payload. Every field is optional at the wire level so an
/// incomplete submission surfaces as a catalog error rather than a
/// deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub id: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    /// Ignored when present; records always start unrated.
    pub ratings: Option<Vec<f64>>,
}

impl NewMovie {
    /// Checks the required fields and builds the record. Empty strings
    /// and a release year of zero count as missing. Client-supplied
    /// ratings are dropped.
    pub(crate) fn into_movie(self) -> Option<Movie> {
        let id = self.id.filter(|v| !v.is_empty())?;
        let title = self.title.filter(|v| !v.is_empty())?;
        let director = self.director.filter(|v| !v.is_empty())?;
        let release_year = self.release_year.filter(|y| *y != 0)?;
        let genre = self.genre.filter(|v| !v.is_empty())?;
        Some(Movie {
            id,
            title,
            director,
            release_year,
            genre,
            ratings: Vec::new(),
        })
    }
}

/// Partial update. Present fields overwrite the stored values, absent
/// fields are left untouched. No field is protected: `id` and
/// `ratings` may be replaced, and the merged record is not
/// revalidated.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdate {
    pub id: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub ratings: Option<Vec<f64>>,
}
