//! Driving port for reading contacts.
//!
//! HTTP handlers use this port to list and fetch contacts without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, Error};

/// Domain use-case port for contact reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// All contacts in insertion order.
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error>;

    /// A single contact; `NotFound` when absent.
    async fn get_contact(&self, id: ContactId) -> Result<Contact, Error>;
}
