use serde::Deserialize;
use time::{macros::format_description, Date};

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

impl Movie {
    /// Release date parsed from TMDB's `YYYY-MM-DD`. TMDB sends `""` for unknown dates.
    pub fn release(&self) -> Option<Date> {
        let raw = self.release_date.as_deref()?;
        Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release().map(|d| d.year())
    }

    /// Full image URL for the poster, e.g. `poster_url("w500")`.
    pub fn poster_url(&self, size: &str) -> Option<String> {
        image_url(self.poster_path.as_deref()?, size)
    }

    pub fn overview_text(&self) -> &str {
        self.overview
            .as_deref()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or("No overview available.")
    }
}

fn image_url(path: &str, size: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    Some(format!("{}/{}{}", IMAGE_BASE_URL, size, path))
}

/// Envelope returned by `/search/movie`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSearchResponse {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn first_page() -> u32 {
    1
}

impl MovieSearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Error body TMDB sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub status_message: Option<String>,
}
