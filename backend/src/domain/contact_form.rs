//! Validation and normalisation of submitted contact forms.
//!
//! [`ContactForm`] holds the raw text exactly as it was submitted. Calling
//! [`ContactForm::validate`] checks every field independently and either
//! yields a [`ContactDetails`] ready for persistence or a
//! [`ContactFormErrors`] listing each rejected field. Validation has no side
//! effects.

use std::fmt;

use serde::Deserialize;
use serde_json::json;

use super::contact::{
    ContactDetails, ContactValidationError, Country, EmailAddress, FirstName, LastName,
    PhoneNumber,
};
use super::Error;

/// Form field names, as submitted and as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// `nom`, the last name.
    Nom,
    /// `prenom`, the first name.
    Prenom,
    /// `numero_telephone`.
    NumeroTelephone,
    /// `pays`, the country.
    Pays,
    /// `email`.
    Email,
}

impl ContactField {
    /// Fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Nom,
        Self::Prenom,
        Self::NumeroTelephone,
        Self::Pays,
        Self::Email,
    ];

    /// Submitted field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nom => "nom",
            Self::Prenom => "prenom",
            Self::NumeroTelephone => "numero_telephone",
            Self::Pays => "pays",
            Self::Email => "email",
        }
    }

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nom => "Nom",
            Self::Prenom => "Prénom",
            Self::NumeroTelephone => "Numéro de téléphone",
            Self::Pays => "Pays",
            Self::Email => "Email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Rejected field.
    pub field: ContactField,
    /// Why it was rejected.
    pub error: ContactValidationError,
}

/// Every field rejected by a single validation pass.
///
/// ## Invariants
/// - Never empty; at most one entry per field, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormErrors(Vec<FieldError>);

impl ContactFormErrors {
    /// Rejected fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Names of the rejected fields.
    #[must_use]
    pub fn fields(&self) -> Vec<ContactField> {
        self.0.iter().map(|entry| entry.field).collect()
    }

    /// Reason a given field was rejected, if it was.
    #[must_use]
    pub fn for_field(&self, field: ContactField) -> Option<&ContactValidationError> {
        self.0
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| &entry.error)
    }

    /// Number of rejected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContactFormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", entry.field, entry.error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ContactFormErrors {}

impl From<&ContactFormErrors> for Error {
    fn from(errors: &ContactFormErrors) -> Self {
        let fields: Vec<_> = errors
            .iter()
            .map(|entry| {
                json!({
                    "field": entry.field.as_str(),
                    "code": entry.error.code(),
                    "message": entry.error.to_string(),
                })
            })
            .collect();
        Error::invalid_request("contact form is invalid").with_details(json!({ "fields": fields }))
    }
}

/// Raw contact submission.
///
/// Missing fields deserialise as empty strings so they are reported as
/// required rather than rejected wholesale by the extractor.
///
/// # Examples
/// ```
/// use contacts::domain::{ContactField, ContactForm};
///
/// let form = ContactForm {
///     nom: "Diallo".into(),
///     prenom: "Awa".into(),
///     numero_telephone: "655123456".into(),
///     pays: "cameroun".into(),
///     email: "not-an-email".into(),
/// };
/// let errors = form.validate().expect_err("email is invalid");
/// assert_eq!(errors.fields(), vec![ContactField::Email]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// Raw last name.
    pub nom: String,
    /// Raw first name.
    pub prenom: String,
    /// Raw phone number.
    pub numero_telephone: String,
    /// Raw country slug or display code.
    pub pays: String,
    /// Raw email address.
    pub email: String,
}

impl ContactForm {
    /// Pre-fill a form with stored values, e.g. for editing.
    #[must_use]
    pub fn from_details(details: &ContactDetails) -> Self {
        Self {
            nom: details.last_name.as_ref().to_owned(),
            prenom: details.first_name.as_ref().to_owned(),
            numero_telephone: details.phone_number.to_string(),
            pays: details.country.slug().to_owned(),
            email: details.email.as_ref().to_owned(),
        }
    }

    /// Raw submitted value for a field.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Nom => &self.nom,
            ContactField::Prenom => &self.prenom,
            ContactField::NumeroTelephone => &self.numero_telephone,
            ContactField::Pays => &self.pays,
            ContactField::Email => &self.email,
        }
    }

    /// Validate every field and build normalised contact details.
    ///
    /// # Errors
    /// Returns [`ContactFormErrors`] naming each invalid field.
    pub fn validate(&self) -> Result<ContactDetails, ContactFormErrors> {
        let mut errors = Vec::new();
        let last_name = collect(&mut errors, ContactField::Nom, LastName::new(self.nom.as_str()));
        let first_name = collect(
            &mut errors,
            ContactField::Prenom,
            FirstName::new(self.prenom.as_str()),
        );
        let phone_number = collect(
            &mut errors,
            ContactField::NumeroTelephone,
            PhoneNumber::parse(&self.numero_telephone),
        );
        let country = collect(&mut errors, ContactField::Pays, self.pays.parse::<Country>());
        let email = collect(
            &mut errors,
            ContactField::Email,
            EmailAddress::new(self.email.as_str()),
        );

        match (last_name, first_name, phone_number, country, email) {
            (Some(last_name), Some(first_name), Some(phone_number), Some(country), Some(email)) => {
                Ok(ContactDetails {
                    last_name,
                    first_name,
                    phone_number,
                    country,
                    email,
                })
            }
            _ => Err(ContactFormErrors(errors)),
        }
    }
}

fn collect<T>(
    errors: &mut Vec<FieldError>,
    field: ContactField,
    result: Result<T, ContactValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(FieldError { field, error });
            None
        }
    }
}
