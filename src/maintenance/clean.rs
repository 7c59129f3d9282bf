use crate::error::AppResult;
use crate::infrastructure::db::DbPool;

/// Business tables in delete order; every later table is referenced by an earlier one
pub const BUSINESS_TABLES: [&str; 5] = [
    "invoices",
    "work_records",
    "hardware",
    "services",
    "organizations",
];

/// Deleted row count per table, in delete order
#[derive(Debug, Default)]
pub struct CleanReport {
    pub deleted: Vec<(&'static str, u64)>,
}

impl CleanReport {
    pub fn total(&self) -> u64 {
        self.deleted.iter().map(|(_, rows)| rows).sum()
    }
}

/// Delete all business data while keeping users. Runs in one transaction,
/// so a failing step leaves the database untouched.
pub async fn clean_business_data(pool: &DbPool) -> AppResult<CleanReport> {
    let mut tx = pool.begin().await?;
    let mut report = CleanReport::default();

    for table in BUSINESS_TABLES {
        // Table names come from the constant list above
        let result = sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
        tracing::info!(table, rows = result.rows_affected(), "Deleted rows");
        report.deleted.push((table, result.rows_affected()));
    }

    tx.commit().await?;
    Ok(report)
}
