use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreationalError {
    #[error("Unknown {kind} token `{token}`")]
    UnknownToken { kind: &'static str, token: String },

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CreationalError {
    pub fn unknown_token<S: Into<String>>(kind: &'static str, token: S) -> Self {
        Self::UnknownToken {
            kind,
            token: token.into(),
        }
    }
}
