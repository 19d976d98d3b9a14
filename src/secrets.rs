//! Minimal vault interface for credential retrieval.
//!
//! The vault is an opaque external collaborator: this module only defines
//! the one operation the service needs (`fetch_secret`) and an
//! environment-backed implementation for local runs. Vault internals are
//! explicitly out of scope.

use thiserror::Error;

/// Error type for secret retrieval.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret '{name}' not found in vault '{vault}'")]
    NotFound { vault: String, name: String },
}

/// A store that can resolve named secrets.
pub trait SecretStore {
    /// Fetch the value of a named secret.
    fn fetch_secret(&self, name: &str) -> Result<String, SecretError>;
}

/// Environment-backed vault.
///
/// Secret `name` in vault `v` resolves to the environment variable
/// `{V}_{NAME}` (uppercased, dashes folded to underscores), so one process
/// environment can carry several scoped vaults side by side.
pub struct EnvVault {
    vault_name: String,
}

impl EnvVault {
    /// Create a vault scoped to the given name.
    pub fn new(vault_name: impl Into<String>) -> Self {
        Self {
            vault_name: vault_name.into(),
        }
    }

    fn env_key(&self, name: &str) -> String {
        format!("{}_{}", self.vault_name, name)
            .to_uppercase()
            .replace('-', "_")
    }
}

impl SecretStore for EnvVault {
    fn fetch_secret(&self, name: &str) -> Result<String, SecretError> {
        tracing::info!(vault = %self.vault_name, secret = name, "Retrieving secret");
        std::env::var(self.env_key(name)).map_err(|_| SecretError::NotFound {
            vault: self.vault_name.clone(),
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_vault_resolves_scoped_variable() {
        std::env::set_var("DEMO_VAULT_DB_CONNECTION", "/tmp/quotes.db");
        let vault = EnvVault::new("demo-vault");
        let value = vault.fetch_secret("db-connection").unwrap();
        assert_eq!(value, "/tmp/quotes.db");
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let vault = EnvVault::new("empty-vault");
        let err = vault.fetch_secret("absent").unwrap_err();
        assert!(matches!(err, SecretError::NotFound { .. }));
        assert!(err.to_string().contains("absent"));
    }
}
