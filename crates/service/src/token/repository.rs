use async_trait::async_trait;
use models::{ActorLogin, Authentication};

use crate::errors::ServiceError;

/// Credential store: turns a login into the claims bundle for its actor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// `None` when the email is unknown or the password does not match.
    async fn resolve(&self, login: &ActorLogin) -> Result<Option<Authentication>, ServiceError>;
}

/// In-memory credential store with Argon2-hashed passwords.
pub mod memory {
    use super::*;
    use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
    use rand::rngs::OsRng;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    struct StoredCredential {
        password_hash: String,
        auth: Authentication,
    }

    #[derive(Default)]
    pub struct InMemoryCredentialStore {
        entries: RwLock<HashMap<String, StoredCredential>>, // key: lower-cased email
    }

    impl InMemoryCredentialStore {
        /// Store `auth` under `email`, replacing any previous password.
        pub async fn register(&self, email: &str, password: &str, auth: Authentication) -> Result<(), ServiceError> {
            let salt = SaltString::generate(&mut OsRng);
            let password_hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|e| ServiceError::Db(format!("hashing error: {}", e)))?
                .to_string();
            self.entries
                .write()
                .await
                .insert(email.trim().to_lowercase(), StoredCredential { password_hash, auth });
            Ok(())
        }
    }

    #[async_trait]
    impl TokenRepository for InMemoryCredentialStore {
        async fn resolve(&self, login: &ActorLogin) -> Result<Option<Authentication>, ServiceError> {
            let (password_hash, auth) = {
                let entries = self.entries.read().await;
                match entries.get(&login.email.trim().to_lowercase()) {
                    Some(stored) => (stored.password_hash.clone(), stored.auth.clone()),
                    None => return Ok(None),
                }
            };
            // verify outside the lock
            let parsed = PasswordHash::new(&password_hash)
                .map_err(|e| ServiceError::Db(format!("stored hash unreadable: {}", e)))?;
            if Argon2::default().verify_password(login.password.as_bytes(), &parsed).is_err() {
                return Ok(None);
            }
            Ok(Some(auth))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::test_support::neo_auth;

        #[tokio::test]
        async fn resolves_only_matching_passwords() -> Result<(), anyhow::Error> {
            let store = InMemoryCredentialStore::default();
            store.register("Neo@Zion.org", "red-pill", neo_auth()).await?;

            let hit = store.resolve(&ActorLogin::new("neo@zion.org", "red-pill")).await?;
            assert_eq!(hit, Some(neo_auth()));

            assert!(store.resolve(&ActorLogin::new("neo@zion.org", "blue-pill")).await?.is_none());
            assert!(store.resolve(&ActorLogin::new("smith@matrix.org", "red-pill")).await?.is_none());
            Ok(())
        }

        #[tokio::test]
        async fn resolve_does_not_hold_the_store_during_verification() -> Result<(), anyhow::Error> {
            let store = InMemoryCredentialStore::default();
            store.register("neo@zion.org", "red-pill", neo_auth()).await?;

            let login = ActorLogin::new("neo@zion.org", "red-pill");
            let trinity = Authentication { email: "trinity@zion.org".into(), ..neo_auth() };
            let (hit, registered) = tokio::join!(store.resolve(&login), store.register("trinity@zion.org", "white-rabbit", trinity.clone()));
            registered?;
            assert_eq!(hit?, Some(neo_auth()));

            let later = store.resolve(&ActorLogin::new("trinity@zion.org", "white-rabbit")).await?;
            assert_eq!(later, Some(trinity));
            Ok(())
        }
    }
}
