//! Driving port for contact mutations.
//!
//! Callers validate submissions with
//! [`ContactForm::validate`](crate::domain::ContactForm::validate) first; this
//! port only ever receives well-typed [`ContactDetails`].

use async_trait::async_trait;

use crate::domain::{ContactDetails, ContactId, Error};

/// Domain use-case port for creating, replacing, and deleting contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Store a new contact and return its identifier.
    async fn create_contact(&self, details: ContactDetails) -> Result<ContactId, Error>;

    /// Replace all fields of an existing contact.
    async fn update_contact(&self, id: ContactId, details: ContactDetails) -> Result<(), Error>;

    /// Delete a contact permanently.
    async fn delete_contact(&self, id: ContactId) -> Result<(), Error>;
}
