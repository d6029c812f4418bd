use chrono::{DateTime, Utc};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
