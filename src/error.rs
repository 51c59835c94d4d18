use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptevoError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing field in example: {field}")]
    MissingField { field: String },

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error(transparent)]
    Model(anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PromptevoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_model_error_chain_has_no_duplicates() {
        let err = PromptevoError::Model(anyhow::anyhow!("connection reset").context("querying stub"));

        let mut chain = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }

        assert_eq!(chain, vec!["querying stub", "connection reset"]);
    }
}
