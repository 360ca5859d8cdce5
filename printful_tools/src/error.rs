use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintfulApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid response from Printful: {0}")]
    ResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Printful API error {status}. {message}")]
    QueryError { status: u16, message: String },
}
