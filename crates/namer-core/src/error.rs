use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamerError {
    #[error("invalid word {0:?}: words must be non-empty and contain no whitespace")]
    InvalidWord(String),
    #[error("word generator exhausted after {attempts} draws ({produced} of {requested} pairs)")]
    GeneratorExhausted {
        requested: usize,
        produced: usize,
        attempts: usize,
    },
    #[error("{0} was never suggested and cannot be saved")]
    UnknownSuggestion(String),
    #[error("invalid setting {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
    #[error("failed to load settings: {0}")]
    Config(#[from] Box<figment::Error>),
}

pub type Result<T> = std::result::Result<T, NamerError>;
