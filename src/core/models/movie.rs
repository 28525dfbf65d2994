use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub duration: String,
    pub rating: String,
    pub image: String,
    pub description: String,
    pub showtimes: Vec<String>,
}

impl Movie {
    pub fn has_showtime(&self, showtime: &str) -> bool {
        self.showtimes.iter().any(|s| s == showtime)
    }
}
