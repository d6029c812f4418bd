use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::Serialize;

/// Lifecycle state of a care task. All three values are mutually reachable;
/// there are no transition restrictions. Inbound values arrive as plain
/// strings and go through [`FromStr`](std::str::FromStr).
#[derive(Debug, Display, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("done")]
    Done,
    #[display("skipped")]
    Skipped,
}

impl std::str::FromStr for TaskStatus {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            "skipped" => Ok(Self::Skipped),
            other => anyhow::bail!("invalid task status: {:?}", other),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub pet_id: i64,
    pub title: String,
    pub category: String,
    pub due_at: DateTime<Utc>,
    pub status: TaskStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
