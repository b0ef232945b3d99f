use thiserror::Error;

#[derive(Error, Debug)]
pub enum FemineError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Malformed corpus: {0}")]
    MalformedCorpus(String),

    #[error("FemineError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FemineError {
    fn from(error: std::io::Error) -> Self {
        FemineError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FemineError {
    fn from(error: reqwest::Error) -> Self {
        FemineError::Reqwest(Box::new(error))
    }
}
