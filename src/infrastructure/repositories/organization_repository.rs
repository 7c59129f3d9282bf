use crate::infrastructure::db::DbPool;
use crate::{
    domain::organization::{NewOrganization, Organization},
    error::{AppError, AppResult},
};
use std::sync::Arc;
use uuid::Uuid;

const CODE_TAKEN: &str = "Organization code already exists";

pub struct OrganizationRepository {
    pool: Arc<DbPool>,
}

impl OrganizationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// All organizations ordered by name
    pub async fn list_all(&self) -> AppResult<Vec<Organization>> {
        let pool = self.pool.as_ref();
        let organizations =
            sqlx::query_as::<_, Organization>("SELECT * FROM organizations ORDER BY name ASC")
                .fetch_all(pool)
                .await?;

        Ok(organizations)
    }

    pub async fn find_by_id(&self, organization_id: Uuid) -> AppResult<Option<Organization>> {
        let pool = self.pool.as_ref();
        let organization =
            sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
                .bind(organization_id)
                .fetch_optional(pool)
                .await?;

        Ok(organization)
    }

    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<Organization>> {
        let pool = self.pool.as_ref();
        let organization =
            sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE code = $1")
                .bind(code)
                .fetch_optional(pool)
                .await?;

        Ok(organization)
    }

    /// Insert an organization. A duplicate code is reported as `Conflict`.
    pub async fn create(
        &self,
        organization: &NewOrganization,
        created_by: Option<Uuid>,
    ) -> AppResult<Organization> {
        let pool = self.pool.as_ref();
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let created = sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations (
                id, name, code, contact_person, address, ico, dic, email, phone,
                hourly_rate_cents, kilometer_rate_cents, hardware_margin_pct,
                software_margin_pct, outsourcing_fee_cents, is_active, created_by,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $17)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&organization.name)
        .bind(&organization.code)
        .bind(&organization.contact_person)
        .bind(&organization.address)
        .bind(&organization.ico)
        .bind(&organization.dic)
        .bind(&organization.email)
        .bind(&organization.phone)
        .bind(organization.hourly_rate_cents)
        .bind(organization.kilometer_rate_cents)
        .bind(organization.hardware_margin_pct)
        .bind(organization.software_margin_pct)
        .bind(organization.outsourcing_fee_cents)
        .bind(organization.is_active)
        .bind(created_by)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, CODE_TAKEN))?;

        Ok(created)
    }

    /// Replace every editable column. `None` when the row does not exist.
    pub async fn update(
        &self,
        organization_id: Uuid,
        organization: &NewOrganization,
    ) -> AppResult<Option<Organization>> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let updated = sqlx::query_as::<_, Organization>(
            r#"
            UPDATE organizations
            SET name = $1, code = $2, contact_person = $3, address = $4, ico = $5,
                dic = $6, email = $7, phone = $8, hourly_rate_cents = $9,
                kilometer_rate_cents = $10, hardware_margin_pct = $11,
                software_margin_pct = $12, outsourcing_fee_cents = $13,
                is_active = $14, updated_at = $15
            WHERE id = $16
            RETURNING *
            "#,
        )
        .bind(&organization.name)
        .bind(&organization.code)
        .bind(&organization.contact_person)
        .bind(&organization.address)
        .bind(&organization.ico)
        .bind(&organization.dic)
        .bind(&organization.email)
        .bind(&organization.phone)
        .bind(organization.hourly_rate_cents)
        .bind(organization.kilometer_rate_cents)
        .bind(organization.hardware_margin_pct)
        .bind(organization.software_margin_pct)
        .bind(organization.outsourcing_fee_cents)
        .bind(organization.is_active)
        .bind(now)
        .bind(organization_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, CODE_TAKEN))?;

        Ok(updated)
    }

    /// Delete an organization. Returns false when nothing was deleted.
    /// Rows still referencing it make the delete fail with `BadRequest`.
    pub async fn delete(&self, organization_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(organization_id)
            .execute(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                    AppError::BadRequest(
                        "Organization cannot be deleted while it has records".to_string(),
                    )
                }
                other => AppError::Database(other),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
