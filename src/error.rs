use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // The fallback arm of the line grammar accepts any remainder, so this
    // variant is a defensive check rather than an expected failure.
    #[error("line {line}: cannot tokenize line")]
    Tokenize { line: usize },

    #[error("line {line}: invalid indentation (depth {found}, at most {max} allowed here)")]
    Indentation {
        line: usize,
        found: usize,
        max: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("deserialize failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl Error {
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Tokenize { line } | Error::Indentation { line, .. } => Some(*line),
            Error::Io(_) | Error::Deserialize(_) => None,
        }
    }
}
