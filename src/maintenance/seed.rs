use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::auth::hash_password;
use crate::domain::organization::{NewOrganization, Organization};
use crate::domain::shared::to_minor_units;
use crate::domain::user::{NewUser, User, UserRole};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::repositories::{OrganizationRepository, UserRepository};

pub const ADMIN_EMAIL: &str = "admin@fakturace.cz";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_NAME: &str = "Administrator";

const HARDWARE_MARGIN_PCT: i32 = 15;
const SOFTWARE_MARGIN_PCT: i32 = 10;

/// One baseline customer; rates are whole currency units
pub struct OrganizationSeed {
    pub name: &'static str,
    pub code: &'static str,
    pub contact_person: &'static str,
    pub hourly_rate: i64,
    pub kilometer_rate: i64,
    pub email: &'static str,
}

pub const ORGANIZATION_SEEDS: [OrganizationSeed; 4] = [
    OrganizationSeed {
        name: "Lázně Toušeň",
        code: "LT",
        contact_person: "L. Valehrach",
        hourly_rate: 550,
        kilometer_rate: 10,
        email: "info@laznetousen.cz",
    },
    OrganizationSeed {
        name: "Oresi CZ",
        code: "O",
        contact_person: "Jan Novák",
        hourly_rate: 650,
        kilometer_rate: 12,
        email: "info@oresi.cz",
    },
    OrganizationSeed {
        name: "Oresi SK",
        code: "OSK",
        contact_person: "Peter Kováč",
        hourly_rate: 500,
        kilometer_rate: 10,
        email: "info@oresi.sk",
    },
    OrganizationSeed {
        name: "TVM NET GROUP",
        code: "TVMNET",
        contact_person: "Tomáš Veselý",
        hourly_rate: 600,
        kilometer_rate: 11,
        email: "info@tvmnet.cz",
    },
];

impl OrganizationSeed {
    pub fn to_new_organization(&self) -> AppResult<NewOrganization> {
        Ok(NewOrganization {
            name: self.name.to_string(),
            code: Some(self.code.to_string()),
            contact_person: Some(self.contact_person.to_string()),
            address: None,
            ico: None,
            dic: None,
            email: Some(self.email.to_string()),
            phone: None,
            hourly_rate_cents: minor_units(self.hourly_rate)?,
            kilometer_rate_cents: minor_units(self.kilometer_rate)?,
            hardware_margin_pct: HARDWARE_MARGIN_PCT,
            software_margin_pct: SOFTWARE_MARGIN_PCT,
            outsourcing_fee_cents: 0,
            is_active: true,
        })
    }
}

fn minor_units(rate: i64) -> AppResult<i64> {
    to_minor_units(Decimal::from(rate))
        .ok_or_else(|| AppError::Internal(format!("Rate {} does not fit in minor units", rate)))
}

/// What a seed run inserted
#[derive(Debug)]
pub struct SeedReport {
    pub admin: User,
    pub organizations: Vec<Organization>,
}

/// Insert the default administrator. Fails with `Conflict` when it already exists.
pub async fn create_admin(pool: Arc<DbPool>) -> AppResult<User> {
    let password_hash = hash_password(ADMIN_PASSWORD).await?;
    let admin = UserRepository::new(pool)
        .create(&NewUser {
            email: ADMIN_EMAIL.to_string(),
            password_hash,
            name: ADMIN_NAME.to_string(),
            role: UserRole::Admin,
        })
        .await?;

    tracing::info!(user_id = %admin.id, email = %admin.email, "Administrator created");
    Ok(admin)
}

/// Load the administrator and the four baseline organizations, one at a time.
/// The first failing insert aborts the run; rows inserted before it stay.
pub async fn seed_baseline(pool: Arc<DbPool>) -> AppResult<SeedReport> {
    let admin = create_admin(pool.clone()).await?;
    let organization_repo = OrganizationRepository::new(pool);

    let mut organizations = Vec::with_capacity(ORGANIZATION_SEEDS.len());
    for seed in &ORGANIZATION_SEEDS {
        let organization = organization_repo
            .create(&seed.to_new_organization()?, Some(admin.id))
            .await?;
        tracing::info!(
            organization_id = %organization.id,
            code = seed.code,
            "Organization created: {}",
            organization.name
        );
        organizations.push(organization);
    }

    Ok(SeedReport {
        admin,
        organizations,
    })
}
