//! HTTP inbound adapter serving the contact pages.

pub mod contacts;
pub mod error;
pub mod health;
pub mod state;
pub mod views;

pub use error::ApiResult;
