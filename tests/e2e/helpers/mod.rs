use fakturace_backend::domain::user::UserRole;
use fakturace_backend::infrastructure::config::Config;
use fakturace_backend::maintenance::{ADMIN_EMAIL, ADMIN_PASSWORD};
use hyper::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use test_context::AsyncTestContext;

pub mod api_client;
pub mod provisioner;

use api_client::TestClient;
use fixtures::{TestFixtures, USER_PASSWORD};
use provisioner::TestEnvironment;

/// Per-test environment: its own database, app and client
pub struct TestContext {
    pub client: TestClient,
    pub pool: PgPool,
    pub config: Config,
    pub fixtures: TestFixtures,
    env: Option<TestEnvironment>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let env = TestEnvironment::provision("e2e")
                .await
                .expect("Failed to provision test database");

            Self {
                client: env.client.clone(),
                pool: env.pool.clone(),
                config: env.config.clone(),
                fixtures: TestFixtures::new(env.pool.clone()),
                env: Some(env),
            }
        }
    }

    fn teardown(mut self) -> impl std::future::Future<Output = ()> + Send {
        async move {
            if let Some(env) = self.env.take() {
                env.teardown().await.expect("Failed to tear down test database");
            }
        }
    }
}

impl TestContext {
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .client
            .post(
                "/api/auth/login",
                &json!({ "email": email, "password": password }),
            )
            .await
            .unwrap();
        response.assert_status(StatusCode::OK);

        response
            .body
            .as_ref()
            .and_then(|b| b.get("token"))
            .and_then(|t| t.as_str())
            .expect("Missing token in login response")
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Token for a freshly created user with the given role
    pub async fn token_for_role(&self, email: &str, role: UserRole) -> String {
        self.fixtures.create_user(email, role).await.unwrap();
        self.login(email, USER_PASSWORD).await
    }
}
