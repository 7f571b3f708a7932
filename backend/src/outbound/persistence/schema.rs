//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Contacts managed through the HTML pages.
    ///
    /// `pays` is constrained by a CHECK to the slugs of `Country`.
    contacts (id) {
        /// Primary key assigned by a sequence.
        id -> Int4,
        /// Last name (max 100 characters).
        nom -> Varchar,
        /// First name (max 50 characters).
        prenom -> Varchar,
        /// Phone number stored as an integer.
        numero_telephone -> Int8,
        /// Country slug (max 10 characters).
        pays -> Varchar,
        /// Email address (max 254 characters).
        email -> Varchar,
    }
}
