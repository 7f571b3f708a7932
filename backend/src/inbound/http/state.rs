//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactsCommand, ContactsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, update, and delete use-cases.
    pub contacts: Arc<dyn ContactsCommand>,
    /// Read use-cases.
    pub contacts_query: Arc<dyn ContactsQuery>,
}

impl HttpState {
    /// Construct state from the contact command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use contacts::domain::ContactService;
    /// use contacts::inbound::http::state::HttpState;
    /// use contacts::outbound::memory::InMemoryContactRepository;
    ///
    /// let service = Arc::new(ContactService::new(Arc::new(InMemoryContactRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.contacts_query.clone();
    /// ```
    pub fn new(contacts: Arc<dyn ContactsCommand>, contacts_query: Arc<dyn ContactsQuery>) -> Self {
        Self {
            contacts,
            contacts_query,
        }
    }
}
