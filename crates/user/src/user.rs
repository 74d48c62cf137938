use std::sync::LazyLock;

use menuplan_shared::{Document, Model, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::password::{self, PasswordCost};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern compiles"));

const MIN_PASSWORD_LEN: usize = 8;

/// Account holder.
///
/// `user_password` holds the plaintext until [`User::hash_password`] runs,
/// and the Argon2id PHC string afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_email: String,
    pub user_password: String,
    pub user_name: String,
}

impl User {
    pub fn new(
        user_email: impl Into<String>,
        user_password: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            user_email: user_email.into(),
            user_password: user_password.into(),
            user_name: user_name.into(),
        }
    }

    /// Replaces the plaintext password with its hash at the default cost.
    ///
    /// Call exactly once, on plaintext: a second call hashes the hash.
    pub fn hash_password(&mut self) -> menuplan_shared::Result<()> {
        self.hash_password_with(&PasswordCost::default())
    }

    pub fn hash_password_with(&mut self, cost: &PasswordCost) -> menuplan_shared::Result<()> {
        self.user_password = password::hash_password(&self.user_password, cost)?;

        tracing::debug!(user_email = %self.user_email, "password hashed");

        Ok(())
    }

    /// True iff `candidate` matches the stored hash. Errors only when the
    /// stored value is not a hash, i.e. [`User::hash_password`] never ran.
    pub fn check_password(&self, candidate: &str) -> menuplan_shared::Result<bool> {
        password::verify_password(candidate, &self.user_password)
    }

    pub fn to_dict_with(&self, exclude_password: bool) -> Document {
        let mut doc = Document::new();
        doc.insert("user_email".to_owned(), self.user_email.clone().into());
        doc.insert("user_name".to_owned(), self.user_name.clone().into());

        if !exclude_password {
            doc.insert("user_password".to_owned(), self.user_password.clone().into());
        }

        doc
    }
}

/// Fails with `Invalid email format.` unless `email` starts with a
/// `local@domain.tld` shape.
pub fn validate_email(email: &str) -> menuplan_shared::Result<()> {
    if !EMAIL_RE.is_match(email) {
        bail!("Invalid email format.");
    }

    Ok(())
}

/// Strength rules for a plaintext password, first failure wins.
pub fn validate_password(password: &str) -> menuplan_shared::Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        bail!("Password must be at least {MIN_PASSWORD_LEN} characters long.");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        bail!("Password must contain at least one number.");
    }

    if !password.chars().any(char::is_alphabetic) {
        bail!("Password must contain at least one letter.");
    }

    Ok(())
}

impl Model for User {
    fn validate(&self) -> menuplan_shared::Result<()> {
        validate_email(&self.user_email)?;
        validate_password(&self.user_password)
    }

    fn to_dict(&self) -> Document {
        self.to_dict_with(true)
    }
}
