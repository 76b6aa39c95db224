use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A token could not provide what the current mode needs (surface text, gold label).
    #[error("malformed input in document {document:?}, sentence {sentence}, token {token}: {reason}")]
    MalformedInput {
        document: String,
        sentence: usize,
        token: usize,
        reason: String,
    },
    /// A collaborator returned or expected a sequence whose length differs
    /// from the number of tokens submitted.
    #[error("contract violation in document {document:?}, sentence {sentence}: expected {expected} labels, got {actual}")]
    ContractViolation {
        document: String,
        sentence: usize,
        expected: usize,
        actual: usize,
    },
    /// A classifier predicted an empty label for a token.
    #[error("contract violation in document {document:?}, sentence {sentence}, token {token}: empty label")]
    EmptyLabel {
        document: String,
        sentence: usize,
        token: usize,
    },
    #[error("sequence length mismatch: {items} items, {labels} labels")]
    LengthMismatch { items: usize, labels: usize },
    #[error("mode misuse: {0}")]
    ModeMisuse(String),
    #[error("invalid line: {0:?}")]
    InvalidLine(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
