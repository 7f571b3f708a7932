//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{
    Contact, ContactDetails, ContactId, ContactValidationError, Country, EmailAddress, FirstName,
    LastName, PhoneNumber,
};

use super::schema::contacts;

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub numero_telephone: i64,
    pub pays: String,
    pub email: String,
}

impl TryFrom<ContactRow> for Contact {
    type Error = ContactValidationError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let details = ContactDetails {
            last_name: LastName::new(row.nom)?,
            first_name: FirstName::new(row.prenom)?,
            phone_number: PhoneNumber::new(row.numero_telephone),
            country: row.pays.parse::<Country>()?,
            email: EmailAddress::new(row.email)?,
        };
        Ok(Contact::new(ContactId::new(row.id)?, details))
    }
}

/// Insertable struct for creating contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub nom: &'a str,
    pub prenom: &'a str,
    pub numero_telephone: i64,
    pub pays: &'a str,
    pub email: &'a str,
}

/// Changeset struct replacing every editable column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct ContactUpdate<'a> {
    pub nom: &'a str,
    pub prenom: &'a str,
    pub numero_telephone: i64,
    pub pays: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a ContactDetails> for NewContactRow<'a> {
    fn from(details: &'a ContactDetails) -> Self {
        Self {
            nom: details.last_name.as_ref(),
            prenom: details.first_name.as_ref(),
            numero_telephone: details.phone_number.get(),
            pays: details.country.slug(),
            email: details.email.as_ref(),
        }
    }
}

impl<'a> From<&'a ContactDetails> for ContactUpdate<'a> {
    fn from(details: &'a ContactDetails) -> Self {
        Self {
            nom: details.last_name.as_ref(),
            prenom: details.first_name.as_ref(),
            numero_telephone: details.phone_number.get(),
            pays: details.country.slug(),
            email: details.email.as_ref(),
        }
    }
}
