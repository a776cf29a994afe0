//! Account service - Handles account creation and lookup.
//!
//! The service is stateless apart from its injected collaborators. It never
//! checks for duplicates before inserting; the store's unique constraints
//! decide, and a rejected insert comes back as a conflict.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{Account, AccountId, CredentialHasher};

use crate::repository::{AccountFilter, AccountStore};

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Hash the secret, validate, and persist a new account.
    ///
    /// A hashing failure is reported before any validation failure.
    async fn create_account(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<Account>;

    /// Get account by its store-assigned identifier
    async fn get_account_by_id(&self, id: &str) -> AppResult<Account>;

    /// Get account by exact email
    async fn get_account_by_email(&self, email: &str) -> AppResult<Account>;

    /// Get account by exact username
    async fn get_account_by_username(&self, username: &str) -> AppResult<Account>;
}

/// Concrete implementation of AccountService.
pub struct AccountManager {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AccountManager {
    /// Create new account service instance
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    async fn find(&self, filter: AccountFilter) -> AppResult<Account> {
        self.store.find_one(filter).await?.ok_or_not_found()
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn create_account(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<Account> {
        let credential_hash = self.hasher.hash(&password).map_err(|e| {
            warn!(error = %e, "Credential hashing failed");
            AppError::from(e)
        })?;

        let account = Account::new(username, email, credential_hash);

        if let Err(reason) = account.validate() {
            debug!(%reason, "Rejected account");
            return Err(AppError::ValidationFailed(reason));
        }

        let id = self.store.insert(&account).await.map_err(|e| {
            if e.is_conflict() {
                debug!(username = %account.username, email = %account.email, "Duplicate account");
            } else {
                warn!(error = %e, "Failed to persist account");
            }
            AppError::PersistenceFailed(e)
        })?;

        info!(account_id = %id, username = %account.username, "Account created");
        Ok(account.with_id(id))
    }

    async fn get_account_by_id(&self, id: &str) -> AppResult<Account> {
        let id: AccountId = id
            .parse()
            .map_err(|_| AppError::InvalidIdentifier(id.to_string()))?;

        self.find(AccountFilter::Id(id)).await
    }

    async fn get_account_by_email(&self, email: &str) -> AppResult<Account> {
        self.find(AccountFilter::Email(email.to_string())).await
    }

    async fn get_account_by_username(&self, username: &str) -> AppResult<Account> {
        self.find(AccountFilter::Username(username.to_string())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::PersistenceError;
    use domain::{HashError, MockCredentialHasher, ValidationError};
    use mockall::predicate::eq;

    use crate::repository::MockAccountStore;

    fn hashing_ok() -> MockCredentialHasher {
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .returning(|plain| Ok(format!("$argon2id$v=19$hashed-{}", plain.len())));
        hasher
    }

    fn hashing_fails() -> MockCredentialHasher {
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .returning(|_| Err(HashError::new("out of memory")));
        hasher
    }

    fn service(store: MockAccountStore, hasher: MockCredentialHasher) -> AccountManager {
        AccountManager::new(Arc::new(store), Arc::new(hasher))
    }

    fn stored(id: AccountId) -> Account {
        Account::new("alice", "alice@example.com", "$argon2id$hash").with_id(id)
    }

    #[tokio::test]
    async fn test_create_account_success() {
        let id = AccountId::generate();

        let mut store = MockAccountStore::new();
        store
            .expect_insert()
            .withf(|account| {
                account.id.is_none()
                    && account.username == "alice"
                    && account.email == "alice@example.com"
                    && account.credential_hash != "secret123"
            })
            .times(1)
            .returning(move |_| Ok(id));

        let service = service(store, hashing_ok());
        let account = service
            .create_account(
                "alice".to_string(),
                "alice@example.com".to_string(),
                "secret123".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(account.id, Some(id));
        assert_eq!(account.username, "alice");
        assert_eq!(account.email, "alice@example.com");
        assert_ne!(account.credential_hash, "secret123");
        assert!(!account.credential_hash.is_empty());
    }

    #[tokio::test]
    async fn test_create_account_hashes_the_given_secret() {
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .withf(|plain| plain == "secret123")
            .times(1)
            .returning(|_| Ok("hashed".to_string()));

        let mut store = MockAccountStore::new();
        store
            .expect_insert()
            .returning(|_| Ok(AccountId::generate()));

        let service = service(store, hasher);
        let account = service
            .create_account(
                "alice".to_string(),
                "alice@example.com".to_string(),
                "secret123".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(account.credential_hash, "hashed");
    }

    #[tokio::test]
    async fn test_create_account_missing_username() {
        let mut store = MockAccountStore::new();
        store.expect_insert().never();

        let service = service(store, hashing_ok());
        let err = service
            .create_account(String::new(), "bob@example.com".to_string(), "pw".to_string())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::ValidationFailed(ValidationError::MissingField("username"))
        );
    }

    #[tokio::test]
    async fn test_create_account_invalid_emails_never_reach_store() {
        for email in ["bad@host", "a@b.co123", "A@B.com"] {
            let mut store = MockAccountStore::new();
            store.expect_insert().never();

            let service = service(store, hashing_ok());
            let err = service
                .create_account("bob".to_string(), email.to_string(), "pw".to_string())
                .await
                .unwrap_err();

            assert_eq!(
                err,
                AppError::ValidationFailed(ValidationError::InvalidFormat("email")),
                "{email}"
            );
        }
    }

    #[tokio::test]
    async fn test_create_account_empty_hash_is_rejected() {
        let mut hasher = MockCredentialHasher::new();
        hasher.expect_hash().returning(|_| Ok(String::new()));

        let mut store = MockAccountStore::new();
        store.expect_insert().never();

        let service = service(store, hasher);
        let err = service
            .create_account("bob".to_string(), "bob@example.com".to_string(), "pw".to_string())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::ValidationFailed(ValidationError::MissingField("credential_hash"))
        );
    }

    #[tokio::test]
    async fn test_hashing_failure_preempts_validation() {
        let mut store = MockAccountStore::new();
        store.expect_insert().never();

        let service = service(store, hashing_fails());
        let err = service
            .create_account(String::new(), "not an email".to_string(), "pw".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::HashingFailed("out of memory".to_string()));
    }

    #[tokio::test]
    async fn test_create_account_conflict_is_distinguishable() {
        let mut store = MockAccountStore::new();
        store
            .expect_insert()
            .times(1)
            .returning(|_| Err(PersistenceError::conflict("idx_accounts_email")));

        let service = service(store, hashing_ok());
        let err = service
            .create_account(
                "alice2".to_string(),
                "alice@example.com".to_string(),
                "pw".to_string(),
            )
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(
            err,
            AppError::PersistenceFailed(PersistenceError::conflict("idx_accounts_email"))
        );
    }

    #[tokio::test]
    async fn test_create_account_store_failure() {
        let mut store = MockAccountStore::new();
        store
            .expect_insert()
            .times(1)
            .returning(|_| Err(PersistenceError::database("connection refused")));

        let service = service(store, hashing_ok());
        let err = service
            .create_account(
                "alice".to_string(),
                "alice@example.com".to_string(),
                "pw".to_string(),
            )
            .await
            .unwrap_err();

        assert!(!err.is_conflict());
        assert!(matches!(
            err,
            AppError::PersistenceFailed(PersistenceError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_get_account_by_id_success() {
        let id = AccountId::generate();

        let mut store = MockAccountStore::new();
        store
            .expect_find_one()
            .with(eq(AccountFilter::Id(id)))
            .times(2)
            .returning(move |_| Ok(Some(stored(id))));

        let service = service(store, MockCredentialHasher::new());
        let first = service.get_account_by_id(&id.to_string()).await.unwrap();
        let second = service.get_account_by_id(&id.to_string()).await.unwrap();

        assert_eq!(first.id, Some(id));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_account_by_id_malformed() {
        let mut store = MockAccountStore::new();
        store.expect_find_one().never();

        let service = service(store, MockCredentialHasher::new());
        let err = service.get_account_by_id("not-a-real-id").await.unwrap_err();

        assert_eq!(err, AppError::InvalidIdentifier("not-a-real-id".to_string()));
    }

    #[tokio::test]
    async fn test_get_account_by_id_not_found() {
        let mut store = MockAccountStore::new();
        store.expect_find_one().returning(|_| Ok(None));

        let service = service(store, MockCredentialHasher::new());
        let err = service
            .get_account_by_id(&AccountId::generate().to_string())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::NotFound);
    }

    #[tokio::test]
    async fn test_get_account_by_email() {
        let id = AccountId::generate();

        let mut store = MockAccountStore::new();
        store
            .expect_find_one()
            .with(eq(AccountFilter::Email("alice@example.com".to_string())))
            .returning(move |_| Ok(Some(stored(id))));

        let service = service(store, MockCredentialHasher::new());
        let account = service.get_account_by_email("alice@example.com").await.unwrap();

        assert_eq!(account.id, Some(id));
    }

    #[tokio::test]
    async fn test_get_account_by_username_not_found() {
        let mut store = MockAccountStore::new();
        store
            .expect_find_one()
            .with(eq(AccountFilter::Username("ghost".to_string())))
            .returning(|_| Ok(None));

        let service = service(store, MockCredentialHasher::new());
        let err = service.get_account_by_username("ghost").await.unwrap_err();

        assert_eq!(err, AppError::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_store_failure_propagates() {
        let mut store = MockAccountStore::new();
        store
            .expect_find_one()
            .returning(|_| Err(PersistenceError::database("timeout")));

        let service = service(store, MockCredentialHasher::new());
        let err = service.get_account_by_email("a@b.com").await.unwrap_err();

        assert_eq!(
            err,
            AppError::PersistenceFailed(PersistenceError::Database("timeout".to_string()))
        );
    }
}
