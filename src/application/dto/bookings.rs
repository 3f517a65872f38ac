use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDto {
    pub id: i64,
    pub name: String,
    pub slug: Slug,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDto {
    pub id: i64,
    pub business_slug: Slug,
    #[serde(with = "serde_time")]
    pub starts_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub ends_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}
