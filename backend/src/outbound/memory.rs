//! In-memory `ContactRepository` implementation.
//!
//! Used when the server starts without a database URL and by tests that want
//! real repository semantics without PostgreSQL. Identifiers behave like a
//! SQL sequence: they start at 1 and are never reused after a delete.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDetails, ContactId};

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    rows: BTreeMap<ContactId, ContactDetails>,
}

/// Process-local contact storage guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    store: Mutex<Store>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ContactRepositoryError> {
        self.store.lock().map_err(|_| {
            error!("in-memory contact store lock poisoned");
            ContactRepositoryError::connection("in-memory store lock poisoned")
        })
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, details: &ContactDetails) -> Result<ContactId, ContactRepositoryError> {
        let mut store = self.lock()?;
        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ContactRepositoryError::query("contact id sequence exhausted"))?;
        let id = ContactId::new(next).map_err(|err| ContactRepositoryError::query(err.to_string()))?;
        store.last_id = next;
        store.rows.insert(id, details.clone());
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .rows
            .iter()
            .map(|(id, details)| Contact::new(*id, details.clone()))
            .collect())
    }

    async fn get_by_id(&self, id: ContactId) -> Result<Contact, ContactRepositoryError> {
        let store = self.lock()?;
        store
            .rows
            .get(&id)
            .map(|details| Contact::new(id, details.clone()))
            .ok_or_else(|| ContactRepositoryError::not_found(id))
    }

    async fn update(
        &self,
        id: ContactId,
        details: &ContactDetails,
    ) -> Result<(), ContactRepositoryError> {
        let mut store = self.lock()?;
        match store.rows.get_mut(&id) {
            Some(row) => {
                *row = details.clone();
                Ok(())
            }
            None => Err(ContactRepositoryError::not_found(id)),
        }
    }

    async fn delete(&self, id: ContactId) -> Result<(), ContactRepositoryError> {
        let mut store = self.lock()?;
        store
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ContactRepositoryError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Country, ContactForm};
    use rstest::{fixture, rstest};

    #[fixture]
    fn awa() -> ContactDetails {
        ContactForm {
            nom: "Diallo".into(),
            prenom: "Awa".into(),
            numero_telephone: "655123456".into(),
            pays: "cameroun".into(),
            email: "awa@example.com".into(),
        }
        .validate()
        .expect("valid fixture")
    }

    #[fixture]
    fn paul() -> ContactDetails {
        ContactForm {
            nom: "Martin".into(),
            prenom: "Paul".into(),
            numero_telephone: "612345678".into(),
            pays: "france".into(),
            email: "paul@example.fr".into(),
        }
        .validate()
        .expect("valid fixture")
    }

    #[rstest]
    #[tokio::test]
    async fn lifecycle_scenario(awa: ContactDetails) {
        let repo = InMemoryContactRepository::new();

        let id = repo.create(&awa).await.expect("create");
        assert_eq!(id.get(), 1);

        let fetched = repo.get_by_id(id).await.expect("get");
        assert_eq!(fetched.details(), &awa);

        let all = repo.list_all().await.expect("list");
        assert_eq!(all, vec![Contact::new(id, awa)]);

        repo.delete(id).await.expect("delete");
        assert_eq!(
            repo.get_by_id(id).await,
            Err(ContactRepositoryError::not_found(1))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_every_field(awa: ContactDetails, paul: ContactDetails) {
        let repo = InMemoryContactRepository::new();
        let id = repo.create(&awa).await.expect("create");

        repo.update(id, &paul).await.expect("update");

        let fetched = repo.get_by_id(id).await.expect("get");
        assert_eq!(fetched.details(), &paul);
        assert_eq!(fetched.details().country, Country::France);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_ids_are_not_found(awa: ContactDetails) {
        let repo = InMemoryContactRepository::new();
        let missing = ContactId::new(42).expect("valid id");

        assert_eq!(
            repo.update(missing, &awa).await,
            Err(ContactRepositoryError::not_found(42))
        );
        assert_eq!(
            repo.delete(missing).await,
            Err(ContactRepositoryError::not_found(42))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_and_listing_is_ordered(awa: ContactDetails, paul: ContactDetails) {
        let repo = InMemoryContactRepository::new();
        let first = repo.create(&awa).await.expect("first");
        let second = repo.create(&paul).await.expect("second");
        repo.delete(first).await.expect("delete first");
        let third = repo.create(&awa).await.expect("third");

        assert_eq!((first.get(), second.get(), third.get()), (1, 2, 3));
        let ids: Vec<_> = repo
            .list_all()
            .await
            .expect("list")
            .iter()
            .map(|contact| contact.id().get())
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
