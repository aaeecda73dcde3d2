use crate::{CreationalError, Environment, Theme};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tokens that pick the product families for a demonstration run.
///
/// ```toml
/// theme = "Windows"
/// environment = "production"
/// strict = false
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    pub theme: String,
    pub environment: String,
    /// Reject unrecognized tokens instead of falling back.
    pub strict: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Windows.to_string(),
            environment: Environment::Production.to_string(),
            strict: false,
        }
    }
}

impl DemoConfig {
    pub fn new<S: Into<String>>(theme: S, environment: S) -> Self {
        Self {
            theme: theme.into(),
            environment: environment.into(),
            strict: false,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CreationalError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CreationalError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// In strict mode both tokens must name a known family. Lenient configs
    /// always pass since selection falls back.
    pub fn validate(&self) -> Result<(), CreationalError> {
        if !self.strict {
            return Ok(());
        }

        Theme::try_from(self.theme.as_str())?;
        Environment::try_from(self.environment.as_str())?;
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        Theme::select(&self.theme)
    }

    pub fn environment(&self) -> Environment {
        Environment::select(&self.environment)
    }
}
