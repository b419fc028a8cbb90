mod client;
mod config;
mod error;
pub mod models;

pub use client::TmdbClient;
pub use config::{BearerToken, TmdbConfig, DEFAULT_BASE_URL};
pub use error::TmdbError;
pub use models::{Movie, MovieSearchResponse};

pub type Result<T> = std::result::Result<T, TmdbError>;
