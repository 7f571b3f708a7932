//! Contact book web application.
//!
//! The crate is split along ports and adapters: [`domain`] holds the contact
//! model, validation, and use-case ports; [`inbound`] serves HTML pages over
//! Actix; [`outbound`] stores contacts in PostgreSQL or in memory.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
