use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterAPIError {
    #[error("Malformed roster data")]
    MalformedRoster(#[from] ParseError),
    #[error("No saved roster")]
    NoSavedRoster,
    #[error("Schedule generation is not implemented")]
    NotImplemented,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid roster data: {0}")]
pub struct ParseError(#[from] serde_json::Error);
