//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! Each operation is a single SQL statement, so every mutation completes or
//! fails atomically. Missing rows are detected from affected-row counts and
//! reported as `NotFound`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDetails, ContactId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ContactRow, ContactUpdate, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    map_basic_pool_error(error, |message| ContactRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    map_basic_diesel_error(
        error,
        |message| ContactRepositoryError::query(message),
        |message| ContactRepositoryError::connection(message),
    )
}

/// Convert a stored row, rejecting data that no longer satisfies the domain.
fn row_to_contact(row: ContactRow) -> Result<Contact, ContactRepositoryError> {
    let id = row.id;
    Contact::try_from(row).map_err(|err| {
        warn!(contact_id = id, error = %err, "stored contact failed validation");
        ContactRepositoryError::query(format!("stored contact {id} is invalid: {err}"))
    })
}

fn ensure_affected(rows: usize, id: ContactId) -> Result<(), ContactRepositoryError> {
    if rows == 0 {
        return Err(ContactRepositoryError::not_found(id));
    }
    Ok(())
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn create(&self, details: &ContactDetails) -> Result<ContactId, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let raw_id: i32 = diesel::insert_into(contacts::table)
            .values(NewContactRow::from(details))
            .returning(contacts::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        ContactId::new(raw_id).map_err(|err| ContactRepositoryError::query(err.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .order(contacts::id.asc())
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn get_by_id(&self, id: ContactId) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = contacts::table
            .find(id.get())
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        match row {
            Some(row) => row_to_contact(row),
            None => Err(ContactRepositoryError::not_found(id)),
        }
    }

    async fn update(
        &self,
        id: ContactId,
        details: &ContactDetails,
    ) -> Result<(), ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(contacts::table.find(id.get()))
            .set(ContactUpdate::from(details))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        ensure_affected(updated, id)
    }

    async fn delete(&self, id: ContactId) -> Result<(), ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(contacts::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        ensure_affected(deleted, id)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn row(pays: &str) -> ContactRow {
        ContactRow {
            id: 5,
            nom: "Diallo".to_owned(),
            prenom: "Awa".to_owned(),
            numero_telephone: 655_123_456,
            pays: pays.to_owned(),
            email: "awa@example.com".to_owned(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, ContactRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, ContactRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_converts_to_contact() {
        let contact = row_to_contact(row("guinee")).expect("valid row");

        assert_eq!(contact.id().get(), 5);
        assert_eq!(contact.details().country, crate::domain::Country::Guinee);
        assert_eq!(contact.details().phone_number.get(), 655_123_456);
    }

    #[rstest]
    fn row_with_unknown_country_is_a_query_error() {
        let repo_err = row_to_contact(row("atlantis")).expect_err("invalid row");

        assert!(matches!(repo_err, ContactRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("stored contact 5 is invalid"));
    }

    #[rstest]
    fn zero_affected_rows_is_not_found() {
        let id = ContactId::new(8).expect("valid id");

        assert_eq!(ensure_affected(0, id), Err(ContactRepositoryError::not_found(8)));
        assert_eq!(ensure_affected(1, id), Ok(()));
    }
}
