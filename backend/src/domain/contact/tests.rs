//! Tests for contact field types.

use super::*;
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(-4)]
fn contact_id_rejects_non_positive(#[case] raw: i32) {
    assert_eq!(ContactId::new(raw), Err(ContactValidationError::InvalidId));
}

#[rstest]
fn contact_id_round_trips_value() {
    let id = ContactId::new(12).expect("valid id");
    assert_eq!(i32::from(id), 12);
    assert_eq!(id.to_string(), "12");
}

#[rstest]
fn names_are_trimmed() {
    let last = LastName::new("  Diallo ").expect("valid last name");
    let first = FirstName::new("\tAwa").expect("valid first name");
    assert_eq!(last.as_ref(), "Diallo");
    assert_eq!(first.as_ref(), "Awa");
}

#[rstest]
fn last_name_length_counts_characters() {
    let at_limit = "é".repeat(LAST_NAME_MAX);
    assert!(LastName::new(at_limit).is_ok());
    assert_eq!(
        LastName::new("x".repeat(LAST_NAME_MAX + 1)),
        Err(ContactValidationError::LastNameTooLong { max: LAST_NAME_MAX })
    );
}

#[rstest]
fn first_name_limit_is_fifty() {
    assert!(FirstName::new("a".repeat(FIRST_NAME_MAX)).is_ok());
    assert_eq!(
        FirstName::new("a".repeat(FIRST_NAME_MAX + 1)),
        Err(ContactValidationError::FirstNameTooLong { max: FIRST_NAME_MAX })
    );
    assert_eq!(FirstName::new("   "), Err(ContactValidationError::EmptyFirstName));
}

#[rstest]
#[case("655123456", 655_123_456)]
#[case(" 42 ", 42)]
#[case("+237", 237)]
#[case("-1", -1)]
fn phone_number_parses_integers(#[case] raw: &str, #[case] expected: i64) {
    assert_eq!(PhoneNumber::parse(raw).map(PhoneNumber::get), Ok(expected));
}

#[rstest]
#[case("", ContactValidationError::EmptyPhoneNumber)]
#[case("06 55 12", ContactValidationError::InvalidPhoneNumber)]
#[case("12.5", ContactValidationError::InvalidPhoneNumber)]
#[case("abc", ContactValidationError::InvalidPhoneNumber)]
#[case("99999999999999999999", ContactValidationError::InvalidPhoneNumber)]
fn phone_number_rejects_non_integers(#[case] raw: &str, #[case] expected: ContactValidationError) {
    assert_eq!(PhoneNumber::parse(raw), Err(expected));
}

#[rstest]
#[case("cameroun", Country::Cameroun)]
#[case("FRANCE", Country::France)]
#[case(" Guinee ", Country::Guinee)]
#[case("237", Country::Cameroun)]
#[case("+1", Country::France)]
#[case("231", Country::Guinee)]
fn country_accepts_slugs_and_codes(#[case] raw: &str, #[case] expected: Country) {
    assert_eq!(raw.parse::<Country>(), Ok(expected));
}

#[rstest]
#[case("", ContactValidationError::EmptyCountry)]
#[case("senegal", ContactValidationError::UnknownCountry)]
#[case("221", ContactValidationError::UnknownCountry)]
#[case("guinée", ContactValidationError::UnknownCountry)]
fn country_rejects_values_outside_the_set(
    #[case] raw: &str,
    #[case] expected: ContactValidationError,
) {
    assert_eq!(raw.parse::<Country>(), Err(expected));
}

#[rstest]
fn country_slugs_fit_the_column() {
    for country in Country::ALL {
        assert!(country.slug().len() <= 10);
        assert_eq!(country.slug().parse::<Country>(), Ok(country));
    }
}

#[rstest]
#[case("awa@example.com", "awa@example.com")]
#[case(" Awa.Diallo@Example.COM ", "Awa.Diallo@example.com")]
#[case("first+tag@mail.example.org", "first+tag@mail.example.org")]
fn email_accepts_and_normalises(#[case] raw: &str, #[case] expected: &str) {
    let email = EmailAddress::new(raw).expect("valid email");
    assert_eq!(email.as_ref(), expected);
}

#[rstest]
#[case("awa.example.com")]
#[case("awa@")]
#[case("@example.com")]
#[case("awa@example")]
#[case("awa@@example.com")]
#[case("awa..diallo@example.com")]
#[case("awa diallo@example.com")]
#[case("awa@-example.com")]
fn email_rejects_malformed_addresses(#[case] raw: &str) {
    assert_eq!(EmailAddress::new(raw), Err(ContactValidationError::InvalidEmail));
}

#[rstest]
fn email_rejects_empty_and_oversized() {
    assert_eq!(EmailAddress::new("  "), Err(ContactValidationError::EmptyEmail));
    let oversized = format!("{}@example.com", "a".repeat(EMAIL_MAX));
    assert_eq!(
        EmailAddress::new(oversized),
        Err(ContactValidationError::EmailTooLong { max: EMAIL_MAX })
    );
}

#[rstest]
fn full_name_joins_first_and_last() {
    let details = ContactDetails {
        last_name: LastName::new("Diallo").expect("last name"),
        first_name: FirstName::new("Awa").expect("first name"),
        phone_number: PhoneNumber::new(655_123_456),
        country: Country::Cameroun,
        email: EmailAddress::new("awa@example.com").expect("email"),
    };
    let contact = Contact::new(ContactId::new(1).expect("id"), details);
    assert_eq!(contact.full_name(), "Awa Diallo");
}
