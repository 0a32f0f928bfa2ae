use axum::http::{HeaderMap, HeaderValue};
use mdexport::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

fn headers_with(id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(id).unwrap());
    headers
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_client_id_when_reading_headers_then_reused() {
    let id = RequestId::from_headers(&headers_with("worker-7:abc"));

    assert_eq!(id.as_str(), "worker-7:abc");
}

#[test]
fn given_no_header_when_reading_headers_then_uuid_generated() {
    let id = RequestId::from_headers(&HeaderMap::new());

    assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
}

#[test]
fn given_overlong_client_id_when_reading_headers_then_replaced() {
    let id = RequestId::from_headers(&headers_with(&"a".repeat(129)));

    assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
}

#[test]
fn given_client_id_with_spaces_when_reading_headers_then_replaced() {
    let id = RequestId::from_headers(&headers_with("two words"));

    assert_ne!(id.as_str(), "two words");
}
