//! Builders for HTTP state backed by the configured contact repository.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use contacts::domain::ContactService;
use contacts::domain::ports::ContactRepository;
use contacts::inbound::http::state::HttpState;
use contacts::outbound::memory::InMemoryContactRepository;
use contacts::outbound::persistence::DieselContactRepository;

use super::ServerConfig;

fn state_for<R>(repository: R) -> web::Data<HttpState>
where
    R: ContactRepository + 'static,
{
    let service = Arc::new(ContactService::new(Arc::new(repository)));
    web::Data::new(HttpState::new(service.clone(), service))
}

/// Build HTTP state using PostgreSQL when a pool is configured, otherwise an
/// in-memory repository that lives as long as the process.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "contact storage selected");
            state_for(DieselContactRepository::new(pool.clone()))
        }
        None => {
            info!(storage = "memory", "contact storage selected");
            state_for(InMemoryContactRepository::new())
        }
    }
}
