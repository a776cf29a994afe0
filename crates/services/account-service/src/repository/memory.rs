//! In-memory account store, for tests and local runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AccountFilter, AccountStore};
use common::PersistenceError;
use domain::{Account, AccountId, FIELD_EMAIL, FIELD_USERNAME};

/// In-memory implementation of AccountStore.
///
/// Duplicate checks and the write happen under one write lock, so concurrent
/// inserts of the same identity have exactly one winner.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn insert(&self, account: &Account) -> Result<AccountId, PersistenceError> {
        let mut accounts = self.accounts.write().await;

        // The pair constraint is implied by the two single-field ones
        if accounts.values().any(|a| a.email == account.email) {
            return Err(PersistenceError::conflict(FIELD_EMAIL));
        }
        if accounts.values().any(|a| a.username == account.username) {
            return Err(PersistenceError::conflict(FIELD_USERNAME));
        }

        let id = AccountId::generate();
        accounts.insert(id, account.clone().with_id(id));

        tracing::debug!(account_id = %id, "Stored account in memory");
        Ok(id)
    }

    async fn find_one(&self, filter: AccountFilter) -> Result<Option<Account>, PersistenceError> {
        let accounts = self.accounts.read().await;
        let found = match filter {
            AccountFilter::Id(id) => accounts.get(&id),
            AccountFilter::Email(email) => accounts.values().find(|a| a.email == email),
            AccountFilter::Username(username) => {
                accounts.values().find(|a| a.username == username)
            }
        };

        Ok(found.cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, email: &str) -> Account {
        Account::new(username, email, "hash")
    }

    #[tokio::test]
    async fn test_insert_then_find_by_each_field() {
        let store = InMemoryAccountStore::new();
        let id = store
            .insert(&account("alice", "alice@example.com"))
            .await
            .unwrap();

        let by_id = store.find_one(AccountFilter::Id(id)).await.unwrap().unwrap();
        let by_email = store
            .find_one(AccountFilter::Email("alice@example.com".to_string()))
            .await
            .unwrap()
            .unwrap();
        let by_username = store
            .find_one(AccountFilter::Username("alice".to_string()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(by_id.id, Some(id));
        assert_eq!(by_id, by_email);
        assert_eq!(by_id, by_username);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = InMemoryAccountStore::new();
        store.insert(&account("alice", "same@example.com")).await.unwrap();

        let err = store
            .insert(&account("bob", "same@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err, PersistenceError::Conflict("email".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = InMemoryAccountStore::new();
        store.insert(&account("alice", "a@example.com")).await.unwrap();

        let err = store
            .insert(&account("alice", "b@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err, PersistenceError::Conflict("username".to_string()));
    }

    #[tokio::test]
    async fn test_lookup_is_exact_match() {
        let store = InMemoryAccountStore::new();
        store.insert(&account("alice", "alice@example.com")).await.unwrap();

        let result = store
            .find_one(AccountFilter::Username("Alice".to_string()))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_empty_store_finds_nothing() {
        let store = InMemoryAccountStore::new();
        assert!(store.is_empty().await);

        let result = store
            .find_one(AccountFilter::Id(AccountId::generate()))
            .await
            .unwrap();

        assert!(result.is_none());
    }
}
