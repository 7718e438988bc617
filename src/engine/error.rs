use thiserror::Error;

/// Errors raised by the guessing engine and its data plumbing.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A power/toughness value is neither numeric nor a known placeholder.
    /// This means the catalog and the card data disagree, so it is fatal.
    #[error("malformed stat value '{value}' on card '{card}'")]
    MalformedStatValue { card: String, value: String },

    #[error("card record #{0} has an empty name")]
    EmptyName(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
