//! Contact domain service implementing the driving ports.
//!
//! The service delegates to a [`ContactRepository`] and translates its
//! failures into transport-agnostic [`Error`] values.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, ContactsCommand, ContactsQuery,
};
use crate::domain::{Contact, ContactDetails, ContactId, Error};

/// Contact service implementing [`ContactsQuery`] and [`ContactsCommand`].
#[derive(Clone)]
pub struct ContactService<R> {
    repository: Arc<R>,
}

impl<R> ContactService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ContactService<R>
where
    R: ContactRepository,
{
    fn map_repository_error(error: ContactRepositoryError) -> Error {
        match error {
            ContactRepositoryError::NotFound { id } => {
                debug!(contact_id = id, "contact lookup missed");
                Error::not_found(format!("contact {id} not found"))
            }
            ContactRepositoryError::Connection { message } => {
                warn!(%message, "contact repository unavailable");
                Error::service_unavailable(format!("contact repository unavailable: {message}"))
            }
            ContactRepositoryError::Query { message } => {
                warn!(%message, "contact repository query failed");
                Error::internal(format!("contact repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_contact(&self, id: ContactId) -> Result<Contact, Error> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn create_contact(&self, details: ContactDetails) -> Result<ContactId, Error> {
        let id = self
            .repository
            .create(&details)
            .await
            .map_err(Self::map_repository_error)?;
        info!(contact_id = %id, "contact created");
        Ok(id)
    }

    async fn update_contact(&self, id: ContactId, details: ContactDetails) -> Result<(), Error> {
        self.repository
            .update(id, &details)
            .await
            .map_err(Self::map_repository_error)?;
        info!(contact_id = %id, "contact updated");
        Ok(())
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        info!(contact_id = %id, "contact deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
