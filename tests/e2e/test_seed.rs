use crate::e2e::helpers;

use fakturace_backend::domain::auth::verify_password;
use fakturace_backend::domain::organization::Organization;
use fakturace_backend::domain::user::User;
use fakturace_backend::maintenance::{seed_baseline, ADMIN_EMAIL, ADMIN_PASSWORD};
use helpers::binaries::{run_against, SEED_BIN};
use helpers::TestContext;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_context::test_context;

// The provisioned database already holds the administrator; start from empty
async fn empty_database(ctx: &TestContext) {
    sqlx::query("DELETE FROM users")
        .execute(&ctx.pool)
        .await
        .unwrap();
}

#[test_context(TestContext)]
#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn it_should_seed_admin_and_baseline_organizations(ctx: &TestContext) {
    empty_database(ctx).await;

    let report = seed_baseline(Arc::new(ctx.pool.clone())).await.unwrap();
    assert_eq!(report.organizations.len(), 4);

    let users = sqlx::query_as::<_, User>("SELECT * FROM users")
        .fetch_all(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, ADMIN_EMAIL);
    assert!(verify_password(&users[0].password_hash, ADMIN_PASSWORD).await.unwrap());

    let organizations =
        sqlx::query_as::<_, Organization>("SELECT * FROM organizations ORDER BY name")
            .fetch_all(&ctx.pool)
            .await
            .unwrap();
    let rates: Vec<(&str, Option<&str>, i64, i64)> = organizations
        .iter()
        .map(|org| {
            (
                org.name.as_str(),
                org.code.as_deref(),
                org.hourly_rate_cents,
                org.kilometer_rate_cents,
            )
        })
        .collect();
    assert_eq!(
        rates,
        vec![
            ("Lázně Toušeň", Some("LT"), 55000, 1000),
            ("Oresi CZ", Some("O"), 65000, 1200),
            ("Oresi SK", Some("OSK"), 50000, 1000),
            ("TVM NET GROUP", Some("TVMNET"), 60000, 1100),
        ]
    );
    for org in &organizations {
        assert_eq!(org.hardware_margin_pct, 15);
        assert_eq!(org.software_margin_pct, 10);
        assert_eq!(org.outsourcing_fee_cents, 0);
        assert_eq!(org.created_by, Some(users[0].id));
    }
}

#[test_context(TestContext)]
#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn it_should_fail_with_conflict_when_run_twice(ctx: &TestContext) {
    empty_database(ctx).await;
    seed_baseline(Arc::new(ctx.pool.clone())).await.unwrap();

    let err = seed_baseline(Arc::new(ctx.pool.clone())).await.unwrap_err();

    assert!(err.is_conflict(), "expected conflict, got {}", err);
    assert_eq!(ctx.fixtures.count_rows("users").await.unwrap(), 1);
    assert_eq!(ctx.fixtures.count_rows("organizations").await.unwrap(), 4);
}

#[test_context(TestContext)]
#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn it_should_exit_zero_then_one_when_the_binary_runs_twice(ctx: &TestContext) {
    empty_database(ctx).await;

    let first = run_against(SEED_BIN, &ctx.config.database_url).await.unwrap();
    assert!(first.success(), "first seed run exited with {}", first);
    assert_eq!(ctx.fixtures.count_rows("users").await.unwrap(), 1);
    assert_eq!(ctx.fixtures.count_rows("organizations").await.unwrap(), 4);

    let second = run_against(SEED_BIN, &ctx.config.database_url).await.unwrap();
    assert_eq!(second.code(), Some(1));
    assert_eq!(ctx.fixtures.count_rows("users").await.unwrap(), 1);
    assert_eq!(ctx.fixtures.count_rows("organizations").await.unwrap(), 4);
}
