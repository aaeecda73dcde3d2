use crate::{Environment, Theme};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Identity of one demonstration run. Used for tracing only; it never reaches
/// an output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of a completed demonstration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    pub theme: Theme,
    pub environment: Environment,
}
