use menuplan_user::{PasswordCost, password::hash_password, validate_password};

/// Check the strength of `password` and hash it at `cost`.
pub fn hash(password: &str, cost: &PasswordCost) -> anyhow::Result<String> {
    validate_password(password)?;

    let hash = hash_password(password, cost)?;

    tracing::info!(
        memory_kib = cost.memory_kib,
        iterations = cost.iterations,
        parallelism = cost.parallelism,
        "password hashed"
    );

    Ok(hash)
}
