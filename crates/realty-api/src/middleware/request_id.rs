//! Request id middleware.
//!
//! Reads `x-request-id` from the incoming request or assigns a UUID v4,
//! writes it back into the request headers for downstream handlers and
//! echoes it on the response.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Longest client-supplied id that is accepted as is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Ensures every request and response carries an `x-request-id`.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let value = incoming(request.headers()).unwrap_or_else(generate);
    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, value.clone());

    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, value);
    response
}

/// The request id of a request that went through [`request_id`].
pub fn request_id_of(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

fn incoming(headers: &HeaderMap) -> Option<HeaderValue> {
    request_id_of(headers)
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .and_then(|id| HeaderValue::from_str(id).ok())
}

fn generate() -> HeaderValue {
    let id = Uuid::new_v4().to_string();
    HeaderValue::from_str(&id).unwrap_or(HeaderValue::from_static("unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(incoming(&headers).unwrap(), "abc-123");
    }

    #[test]
    fn test_blank_or_oversized_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(incoming(&headers).is_none());

        let long = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&long).unwrap());
        assert!(incoming(&headers).is_none());
    }

    #[test]
    fn test_generated_id_is_uuid() {
        let value = generate();
        assert!(Uuid::parse_str(value.to_str().unwrap()).is_ok());
    }
}
