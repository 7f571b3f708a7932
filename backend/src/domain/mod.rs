//! Domain primitives, validation, ports, and services.
//!
//! Purpose: define the contact entity and its validation contract
//! independently of HTTP and SQL. Adapters under `inbound` and `outbound`
//! depend on this module, never the other way round.
//!
//! Public surface:
//! - Contact, ContactDetails, ContactId and field newtypes: the entity.
//! - Country: the closed set of accepted countries.
//! - ContactForm, ContactFormErrors: submission validation.
//! - ContactService: implementation of the driving ports.
//! - Error, ErrorCode: transport-agnostic failures.

pub mod contact;
pub mod contact_form;
pub mod contact_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::contact::{
    Contact, ContactDetails, ContactId, ContactValidationError, Country, EmailAddress, FirstName,
    LastName, PhoneNumber,
};
pub use self::contact_form::{ContactField, ContactForm, ContactFormErrors, FieldError};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
