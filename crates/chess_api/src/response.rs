//! Response validation
//!
//! Turns a raw [`HttpResponse`] into the engine's move or a classified
//! [`ChessApiError`]. Checks run in a fixed order: status, JSON shape,
//! inline error text, then the `san` field.

use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::error::{ChessApiError, ChessApiResult};
use crate::transport::HttpResponse;

const EXPECTED_OBJECT: &str = "Invalid API response: expected JSON object";
const MISSING_SAN: &str = "Invalid API response: missing or invalid \"san\" field";

/// Substring that marks the `text` field as an inline error report
const ERROR_MARKER: &str = "error";

/// Validates `response` and extracts the `san` move
pub fn decode_best_move(response: &HttpResponse) -> ChessApiResult<String> {
    let object = decode_object(response)?;

    match object.get("san") {
        Some(Value::String(san)) => Ok(san.clone()),
        _ => Err(ChessApiError::invalid_response(MISSING_SAN)),
    }
}

/// Status check, JSON object parse and inline error detection
fn decode_object(response: &HttpResponse) -> ChessApiResult<Map<String, Value>> {
    if !response.is_success() {
        warn!(status = response.status, "chess API returned non-success status");
        return Err(ChessApiError::Transport {
            status: response.status,
        });
    }

    trace!(body = %response.body, "chess API response");

    let object = match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Object(object)) => object,
        _ => return Err(ChessApiError::invalid_response(EXPECTED_OBJECT)),
    };

    // The service reports failures inside a 200 response
    if let Some(Value::String(text)) = object.get("text") {
        if text.contains(ERROR_MARKER) {
            warn!(text = %text, "chess API reported an error");
            return Err(ChessApiError::Api {
                message: text.clone(),
            });
        }
    }

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChessApiErrorKind;

    fn ok(body: &str) -> HttpResponse {
        HttpResponse::new(200, body)
    }

    #[test]
    fn test_returns_san() {
        let response = ok(r#"{"move":"e2e4","san":"e4","from":"e2","to":"e4"}"#);
        assert_eq!(decode_best_move(&response).unwrap(), "e4");
    }

    #[test]
    fn test_san_returned_unchanged() {
        let response = ok(r#"{"san":"exd8=Q+"}"#);
        assert_eq!(decode_best_move(&response).unwrap(), "exd8=Q+");
    }

    #[test]
    fn test_status_outside_success_range() {
        for status in [100, 199, 300, 301, 404, 500, 503] {
            let response = HttpResponse::new(status, r#"{"san":"e4"}"#);
            let err = decode_best_move(&response).unwrap_err();
            assert_eq!(err.kind(), ChessApiErrorKind::Transport);
            assert_eq!(err.status_code(), Some(status));
            assert!(err.to_string().contains(&status.to_string()));
        }
    }

    #[test]
    fn test_any_2xx_is_accepted() {
        for status in [200, 201, 204, 299] {
            let response = HttpResponse::new(status, r#"{"san":"Nf3"}"#);
            assert_eq!(decode_best_move(&response).unwrap(), "Nf3");
        }
    }

    #[test]
    fn test_non_json_body() {
        let err = decode_best_move(&ok("<html>bad gateway</html>")).unwrap_err();
        assert_eq!(err.kind(), ChessApiErrorKind::InvalidResponse);
        assert_eq!(err.to_string(), EXPECTED_OBJECT);
    }

    #[test]
    fn test_non_object_json() {
        for body in ["[1, 2]", "\"e4\"", "42", "null", "true"] {
            let err = decode_best_move(&ok(body)).unwrap_err();
            assert_eq!(err.to_string(), EXPECTED_OBJECT, "body: {body}");
        }
    }

    #[test]
    fn test_inline_error_text() {
        let err = decode_best_move(&ok(r#"{"text": "error: Invalid FEN"}"#)).unwrap_err();
        assert_eq!(err.kind(), ChessApiErrorKind::ApiError);
        assert_eq!(err.to_string(), "error: Invalid FEN");
    }

    #[test]
    fn test_inline_error_wins_over_san() {
        let err = decode_best_move(&ok(r#"{"text":"engine error","san":"e4"}"#)).unwrap_err();
        assert_eq!(err.kind(), ChessApiErrorKind::ApiError);
    }

    #[test]
    fn test_error_substring_matches_anywhere() {
        let err = decode_best_move(&ok(r#"{"text":"no errors found","san":"e4"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "no errors found");
    }

    #[test]
    fn test_text_without_marker_is_ignored() {
        let response = ok(r#"{"text":"Move e2 → e4 (e4): [0.3]","san":"e4"}"#);
        assert_eq!(decode_best_move(&response).unwrap(), "e4");
    }

    #[test]
    fn test_marker_match_is_case_sensitive() {
        let response = ok(r#"{"text":"ERROR","san":"e4"}"#);
        assert_eq!(decode_best_move(&response).unwrap(), "e4");
    }

    #[test]
    fn test_non_string_text_is_ignored() {
        let response = ok(r#"{"text":["error"],"san":"d4"}"#);
        assert_eq!(decode_best_move(&response).unwrap(), "d4");
    }

    #[test]
    fn test_missing_san() {
        let err = decode_best_move(&ok(r#"{"some": "data"}"#)).unwrap_err();
        assert_eq!(err.kind(), ChessApiErrorKind::InvalidResponse);
        assert_eq!(
            err.to_string(),
            "Invalid API response: missing or invalid \"san\" field"
        );
    }

    #[test]
    fn test_non_string_san() {
        for body in [r#"{"san":null}"#, r#"{"san":4}"#, r#"{"san":{"to":"e4"}}"#] {
            let err = decode_best_move(&ok(body)).unwrap_err();
            assert_eq!(err.to_string(), MISSING_SAN, "body: {body}");
        }
    }
}
