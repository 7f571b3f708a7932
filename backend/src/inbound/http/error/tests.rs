//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn render(error: &Error) -> (StatusCode, Option<String>, String) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    assert_eq!(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/html; charset=utf-8")
    );
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("password=hunter2")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert!(body.contains("Internal server error"));
    assert!(!body.contains("hunter2"));
    assert!(body.contains(&expected_trace_id));
}

#[rstest]
#[actix_web::test]
async fn not_found_page_shows_message(expected_trace_id: String) {
    let error = Error::not_found("contact 42 not found").with_trace_id(expected_trace_id);

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert!(body.contains("contact 42 not found"));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let (status, header, body) = render(&Error::invalid_request("bad")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert!(!body.contains("Trace"));
}

#[rstest]
fn redaction_keeps_trace_id_and_drops_details() {
    let error = Error::internal("boom")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": true}));

    let redacted = redact_if_internal(&error);

    assert_eq!(redacted.message(), "Internal server error");
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
    assert!(redacted.details().is_none());
}

#[rstest]
fn non_internal_errors_are_not_redacted() {
    let error = Error::service_unavailable("database unavailable");
    assert_eq!(redact_if_internal(&error), error);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    use actix_web::error;

    let actix_err = error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.trace_id(), None);
    assert_eq!(err.details(), None);
}
