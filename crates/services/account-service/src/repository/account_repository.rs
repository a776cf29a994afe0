//! Account store contract and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use common::PersistenceError;
use domain::{Account, AccountId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Exact-match selector for [`AccountStore::find_one`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    Id(AccountId),
    Email(String),
    Username(String),
}

/// Account store trait for dependency injection.
///
/// Implementations must enforce uniqueness of `email`, of `username` and of
/// the `(email, username)` pair atomically on insert. The service never
/// checks for duplicates itself.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account and return the identifier assigned to it.
    ///
    /// A duplicate identity fails with [`PersistenceError::Conflict`].
    async fn insert(&self, account: &Account) -> Result<AccountId, PersistenceError>;

    /// Find a single account matching the filter
    async fn find_one(&self, filter: AccountFilter) -> Result<Option<Account>, PersistenceError>;
}

/// PostgreSQL implementation of AccountStore.
///
/// Uniqueness is enforced by the unique indexes created at startup.
pub struct SeaOrmAccountStore {
    db: DatabaseConnection,
}

impl SeaOrmAccountStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStore for SeaOrmAccountStore {
    async fn insert(&self, account: &Account) -> Result<AccountId, PersistenceError> {
        let id = AccountId::generate();
        let active_model = ActiveModel {
            id: Set(id.as_uuid()),
            username: Set(account.username.clone()),
            email: Set(account.email.clone()),
            credential_hash: Set(account.credential_hash.clone()),
            created_at: Set(chrono::Utc::now()),
        };

        AccountEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(PersistenceError::from)?;

        Ok(id)
    }

    async fn find_one(&self, filter: AccountFilter) -> Result<Option<Account>, PersistenceError> {
        let query = match filter {
            AccountFilter::Id(id) => AccountEntity::find_by_id(id.as_uuid()),
            AccountFilter::Email(email) => {
                AccountEntity::find().filter(account::Column::Email.eq(email))
            }
            AccountFilter::Username(username) => {
                AccountEntity::find().filter(account::Column::Username.eq(username))
            }
        };

        let result = query.one(&self.db).await.map_err(PersistenceError::from)?;

        Ok(result.map(Account::from))
    }
}
