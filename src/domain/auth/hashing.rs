use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rngs::OsRng;

use crate::error::{AppError, AppResult};

pub fn password_hasher() -> Argon2<'static> {
    // Argon2id, 19 MiB, 2 passes
    const MEMORY_COST_KIB: u32 = 19 * 1024;
    const ITERATIONS: u32 = 2;
    const PARALLELISM: u32 = 1;
    let params = Params::new(MEMORY_COST_KIB, ITERATIONS, PARALLELISM, None)
        .expect("valid Argon2 parameters");
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
}

fn hash_blocking(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = password_hasher()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::Internal(format!("Failed to hash password: {}", err)))?;
    Ok(hash.to_string())
}

fn verify_blocking(stored: &str, candidate: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|err| AppError::Internal(format!("Invalid password hash: {}", err)))?;
    Ok(password_hasher()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}

async fn run_blocking<T, F>(work: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| AppError::Internal(format!("Password hashing task failed: {}", err)))?
}

/// Hash a password into a self-describing PHC string.
/// Argon2 runs on the blocking pool, off the async workers.
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_owned();
    run_blocking(move || hash_blocking(&password)).await
}

pub async fn verify_password(stored: &str, candidate: &str) -> AppResult<bool> {
    let stored = stored.to_owned();
    let candidate = candidate.to_owned();
    run_blocking(move || verify_blocking(&stored, &candidate)).await
}
