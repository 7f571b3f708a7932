//! Tests for the contact service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockContactRepository;
use crate::domain::{ContactForm, ErrorCode};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

fn make_service(repo: MockContactRepository) -> ContactService<MockContactRepository> {
    ContactService::new(Arc::new(repo))
}

#[fixture]
fn details() -> ContactDetails {
    ContactForm {
        nom: "Diallo".into(),
        prenom: "Awa".into(),
        numero_telephone: "655123456".into(),
        pays: "cameroun".into(),
        email: "awa@example.com".into(),
    }
    .validate()
    .expect("fixture form is valid")
}

fn id(raw: i32) -> ContactId {
    ContactId::new(raw).expect("valid id")
}

#[rstest]
#[tokio::test]
async fn create_returns_repository_id(details: ContactDetails) {
    let mut repo = MockContactRepository::new();
    let expected = details.clone();
    repo.expect_create()
        .withf(move |candidate| *candidate == expected)
        .times(1)
        .return_once(|_| Ok(ContactId::new(1).expect("valid id")));

    let created = make_service(repo)
        .create_contact(details)
        .await
        .expect("create succeeds");
    assert_eq!(created, id(1));
}

#[rstest]
#[tokio::test]
async fn get_maps_not_found() {
    let mut repo = MockContactRepository::new();
    repo.expect_get_by_id()
        .with(eq(id(9)))
        .times(1)
        .return_once(|_| Err(ContactRepositoryError::not_found(9)));

    let error = make_service(repo)
        .get_contact(id(9))
        .await
        .expect_err("missing contact");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "contact 9 not found");
}

#[rstest]
#[tokio::test]
async fn list_maps_connection_failure_to_service_unavailable() {
    let mut repo = MockContactRepository::new();
    repo.expect_list_all()
        .times(1)
        .return_once(|| Err(ContactRepositoryError::connection("pool timed out")));

    let error = make_service(repo)
        .list_contacts()
        .await
        .expect_err("storage down");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn update_maps_query_failure_to_internal(details: ContactDetails) {
    let mut repo = MockContactRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(|_, _| Err(ContactRepositoryError::query("database error")));

    let error = make_service(repo)
        .update_contact(id(2), details)
        .await
        .expect_err("query failed");
    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn update_targets_the_requested_id(details: ContactDetails) {
    let mut repo = MockContactRepository::new();
    repo.expect_update()
        .withf(|target, _| *target == ContactId::new(4).expect("valid id"))
        .times(1)
        .return_once(|_, _| Ok(()));

    make_service(repo)
        .update_contact(id(4), details)
        .await
        .expect("update succeeds");
}

#[rstest]
#[tokio::test]
async fn delete_propagates_not_found() {
    let mut repo = MockContactRepository::new();
    repo.expect_delete()
        .with(eq(id(3)))
        .times(1)
        .return_once(|_| Err(ContactRepositoryError::not_found(3)));

    let error = make_service(repo)
        .delete_contact(id(3))
        .await
        .expect_err("missing contact");
    assert_eq!(error.code(), ErrorCode::NotFound);
}
