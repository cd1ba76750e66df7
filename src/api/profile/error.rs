use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("cannot follow your own profile: {0}")]
    SelfFollow(String),

    #[error("profile api request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("profile api returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("profile api base url cannot carry path segments")]
    InvalidBaseUrl,
}
