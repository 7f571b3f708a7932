//! Driven port for contact persistence adapters and their errors.
//!
//! The repository is the sole owner of persisted contact state. Each
//! operation touches a single record and completes or fails as one unit.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDetails, ContactId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Storage could not be reached.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
        /// No contact has the requested identifier.
        NotFound { id: i32 } => "contact {id} not found",
    }
}

/// Storage port for contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact and return its freshly assigned identifier.
    async fn create(&self, details: &ContactDetails) -> Result<ContactId, ContactRepositoryError>;

    /// Every stored contact, in ascending identifier order.
    async fn list_all(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Fetch one contact; fails with `NotFound` when absent.
    async fn get_by_id(&self, id: ContactId) -> Result<Contact, ContactRepositoryError>;

    /// Replace every field of an existing contact.
    async fn update(
        &self,
        id: ContactId,
        details: &ContactDetails,
    ) -> Result<(), ContactRepositoryError>;

    /// Remove a contact permanently.
    async fn delete(&self, id: ContactId) -> Result<(), ContactRepositoryError>;
}
