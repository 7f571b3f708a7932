//! Contact entity and its field types.
//!
//! Every field is a validated newtype so a [`ContactDetails`] value can only
//! be built from data that satisfies the persisted constraints.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Maximum length of a last name, in characters.
pub const LAST_NAME_MAX: usize = 100;
/// Maximum length of a first name, in characters.
pub const FIRST_NAME_MAX: usize = 50;
/// Maximum length of an email address, in characters.
pub const EMAIL_MAX: usize = 254;

/// Reasons a single contact field can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    /// Identifier is zero or negative.
    #[error("contact id must be a positive integer")]
    InvalidId,
    /// Last name is blank after trimming.
    #[error("last name must not be empty")]
    EmptyLastName,
    /// Last name exceeds `max` characters.
    #[error("last name must be at most {max} characters")]
    LastNameTooLong { max: usize },
    /// First name is blank after trimming.
    #[error("first name must not be empty")]
    EmptyFirstName,
    /// First name exceeds `max` characters.
    #[error("first name must be at most {max} characters")]
    FirstNameTooLong { max: usize },
    /// Phone number is blank.
    #[error("phone number must not be empty")]
    EmptyPhoneNumber,
    /// Phone number is not a base-10 integer that fits in 64 bits.
    #[error("phone number must be a whole number")]
    InvalidPhoneNumber,
    /// Country is blank.
    #[error("country must not be empty")]
    EmptyCountry,
    /// Country is outside the accepted set.
    #[error("country must be one of: cameroun, france, guinee")]
    UnknownCountry,
    /// Email is blank.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email exceeds `max` characters.
    #[error("email must be at most {max} characters")]
    EmailTooLong { max: usize },
    /// Email is not a syntactically valid address.
    #[error("email must be a valid email address")]
    InvalidEmail,
}

impl ContactValidationError {
    /// Stable code reported alongside the message.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::EmptyLastName
            | Self::EmptyFirstName
            | Self::EmptyPhoneNumber
            | Self::EmptyCountry
            | Self::EmptyEmail => "required",
            Self::LastNameTooLong { .. }
            | Self::FirstNameTooLong { .. }
            | Self::EmailTooLong { .. } => "too_long",
            Self::InvalidPhoneNumber => "invalid_integer",
            Self::UnknownCountry => "invalid_choice",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

/// System-assigned contact identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(i32);

impl ContactId {
    /// Wrap a storage identifier; identifiers start at 1.
    pub fn new(id: i32) -> Result<Self, ContactValidationError> {
        if id < 1 {
            return Err(ContactValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Raw integer value as stored.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ContactId> for i32 {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

fn bounded_text(
    value: impl Into<String>,
    max: usize,
    empty: ContactValidationError,
    too_long: ContactValidationError,
) -> Result<String, ContactValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    if trimmed.chars().count() > max {
        return Err(too_long);
    }
    Ok(trimmed.to_owned())
}

/// Last name ("nom").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastName(String);

impl LastName {
    /// Trim and validate a last name.
    pub fn new(value: impl Into<String>) -> Result<Self, ContactValidationError> {
        bounded_text(
            value,
            LAST_NAME_MAX,
            ContactValidationError::EmptyLastName,
            ContactValidationError::LastNameTooLong { max: LAST_NAME_MAX },
        )
        .map(Self)
    }
}

impl AsRef<str> for LastName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// First name ("prenom").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstName(String);

impl FirstName {
    /// Trim and validate a first name.
    pub fn new(value: impl Into<String>) -> Result<Self, ContactValidationError> {
        bounded_text(
            value,
            FIRST_NAME_MAX,
            ContactValidationError::EmptyFirstName,
            ContactValidationError::FirstNameTooLong { max: FIRST_NAME_MAX },
        )
        .map(Self)
    }
}

impl AsRef<str> for FirstName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Phone number stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumber(i64);

impl PhoneNumber {
    /// Wrap an already-numeric phone number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse submitted text; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, ContactValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContactValidationError::EmptyPhoneNumber);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ContactValidationError::InvalidPhoneNumber)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of countries a contact may belong to.
///
/// Validation, rendering, and the storage schema all read from this one
/// declaration. Each country carries a display code which is a label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Cameroun, shown with `+237`.
    Cameroun,
    /// France, shown with `+1`.
    France,
    /// Guinée, shown with `+231`.
    Guinee,
}

impl Country {
    /// Every accepted country, in display order.
    pub const ALL: [Self; 3] = [Self::Cameroun, Self::France, Self::Guinee];

    /// Persisted and submitted identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Cameroun => "cameroun",
            Self::France => "france",
            Self::Guinee => "guinee",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cameroun => "Cameroun",
            Self::France => "France",
            Self::Guinee => "Guinée",
        }
    }

    /// Opaque display code shown next to the label.
    #[must_use]
    pub const fn display_code(self) -> &'static str {
        match self {
            Self::Cameroun => "+237",
            Self::France => "+1",
            Self::Guinee => "+231",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Country {
    type Err = ContactValidationError;

    /// Accepts the slug in any case, or the display code with or without `+`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContactValidationError::EmptyCountry);
        }
        let code = trimmed.strip_prefix('+').unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|country| {
                country.slug().eq_ignore_ascii_case(trimmed)
                    || country.display_code().trim_start_matches('+') == code
            })
            .ok_or(ContactValidationError::UnknownCountry)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Dot-atom local part, dotted domain labels, alphabetic TLD.
        let pattern = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address with a lower-cased domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trim, validate, and normalise an email address.
    pub fn new(value: impl Into<String>) -> Result<Self, ContactValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ContactValidationError::EmptyEmail);
        }
        if trimmed.chars().count() > EMAIL_MAX {
            return Err(ContactValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(trimmed) {
            return Err(ContactValidationError::InvalidEmail);
        }
        let (local, domain) = trimmed
            .rsplit_once('@')
            .ok_or(ContactValidationError::InvalidEmail)?;
        Ok(Self(format!("{local}@{}", domain.to_ascii_lowercase())))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// The five user-editable fields of a contact, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    /// Family name (`nom`).
    pub last_name: LastName,
    /// Given name (`prenom`).
    pub first_name: FirstName,
    /// Phone number (`numero_telephone`).
    pub phone_number: PhoneNumber,
    /// Country (`pays`).
    pub country: Country,
    /// Email address.
    pub email: EmailAddress,
}

/// A persisted contact.
///
/// ## Invariants
/// - `id` is assigned by the repository and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    details: ContactDetails,
}

impl Contact {
    /// Pair an identifier with its stored details.
    #[must_use]
    pub fn new(id: ContactId, details: ContactDetails) -> Self {
        Self { id, details }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Current field values.
    #[must_use]
    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    /// "Prénom Nom" as shown in listings.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.details.first_name.as_ref(),
            self.details.last_name.as_ref()
        )
    }
}

#[cfg(test)]
mod tests;
