use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single side effect observed by an output sink.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Render { text: String },
    Log { severity: Severity, text: String },
}

impl OutputLine {
    pub fn render<S: Into<String>>(text: S) -> Self {
        Self::Render { text: text.into() }
    }

    pub fn log<S: Into<String>>(severity: Severity, text: S) -> Self {
        Self::Log {
            severity,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Render { text } | Self::Log { text, .. } => text,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Render { .. } => None,
            Self::Log { severity, .. } => Some(*severity),
        }
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render { text } => write!(f, "{}", text),
            Self::Log { severity, text } => write!(f, "[{}] {}", severity, text),
        }
    }
}
