use crate::CreationalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widget family produced by an abstract GUI factory.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Windows,
    Mac,
}

impl Theme {
    /// Maps a configuration token to a theme.
    ///
    /// Only the exact token `"Windows"` selects [`Theme::Windows`]; every other
    /// token, including the empty string, falls back to [`Theme::Mac`].
    pub fn select(token: &str) -> Self {
        if token == "Windows" {
            Self::Windows
        } else {
            Self::Mac
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::Mac => write!(f, "Mac"),
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = CreationalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Windows" => Ok(Self::Windows),
            "Mac" => Ok(Self::Mac),
            _ => Err(CreationalError::unknown_token("theme", value)),
        }
    }
}

/// Runtime environment a logger creator is bound to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    #[serde(rename = "production")]
    Production,
    #[serde(rename = "development")]
    Development,
}

impl Environment {
    /// Maps a configuration token to an environment.
    ///
    /// `"production"` selects [`Environment::Production`]; anything else is
    /// treated as development.
    pub fn select(token: &str) -> Self {
        if token == "production" {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
        }
    }
}

impl TryFrom<&str> for Environment {
    type Error = CreationalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            _ => Err(CreationalError::unknown_token("environment", value)),
        }
    }
}
