use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Billed customer. Money columns are minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub ico: Option<String>,
    pub dic: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate_cents: i64,
    pub kilometer_rate_cents: i64,
    pub hardware_margin_pct: i32,
    pub software_margin_pct: i32,
    pub outsourcing_fee_cents: i64,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated column values for an insert or a full update
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrganization {
    pub name: String,
    pub code: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub ico: Option<String>,
    pub dic: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate_cents: i64,
    pub kilometer_rate_cents: i64,
    pub hardware_margin_pct: i32,
    pub software_margin_pct: i32,
    pub outsourcing_fee_cents: i64,
    pub is_active: bool,
}
