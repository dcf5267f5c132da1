use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read warehouse fixture {path}: {source}")]
    FixtureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse warehouse fixture: {0}")]
    FixtureParse(#[from] serde_yaml::Error),

    #[error("invalid warehouse fixture: {0}")]
    Validation(String),
}
