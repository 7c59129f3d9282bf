//! Operator tooling shared by the `seed` and `clean-database` binaries and the
//! test harness.

pub mod clean;
pub mod seed;

pub use clean::{clean_business_data, CleanReport, BUSINESS_TABLES};
pub use seed::{create_admin, seed_baseline, SeedReport, ADMIN_EMAIL, ADMIN_NAME, ADMIN_PASSWORD};
