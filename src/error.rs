use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Listing not found")]
    ListingNotFound,

    #[error("Invalid listing: {0}")]
    InvalidListing(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
