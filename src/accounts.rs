// src/accounts.rs
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("an account with this email already exists")]
    DuplicateAccount,
    #[error("no account exists for this email")]
    AccountNotFound,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("password hashing failed")]
    HashingFailed,
}

/// In-memory account records, email -> bcrypt hash.
///
/// The service owns accounts for its process lifetime; swapping in a durable
/// backend only touches this type, not the handlers.
pub struct CredentialStore {
    accounts: RwLock<HashMap<String, String>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Create an account. Rejects a second registration for the same email
    /// regardless of password.
    pub fn register(&self, email: &str, password: &str) -> Result<(), AccountError> {
        // Hash outside the lock; bcrypt is deliberately slow.
        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|_| AccountError::HashingFailed)?;

        let mut accounts = self.accounts.write().expect("account map lock poisoned");
        if accounts.contains_key(email) {
            return Err(AccountError::DuplicateAccount);
        }
        accounts.insert(email.to_string(), hash);
        info!("Registered account: {}", email);
        Ok(())
    }

    /// Check a password against the stored hash. Unknown emails and bad
    /// passwords stay distinguishable so the boundary can map them to
    /// different statuses.
    pub fn verify(&self, email: &str, password: &str) -> Result<(), AccountError> {
        let accounts = self.accounts.read().expect("account map lock poisoned");
        let hash = accounts.get(email).ok_or(AccountError::AccountNotFound)?;

        if bcrypt::verify(password, hash).unwrap_or(false) {
            Ok(())
        } else {
            Err(AccountError::InvalidCredentials)
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
