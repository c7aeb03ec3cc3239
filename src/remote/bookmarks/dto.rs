//! Bookmark API Data Transfer Objects
//!
//! These types match EXACTLY what the bookmark endpoints return.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the bookmarks module - convert to domain
//! types via the adapter.
//!
//! Example check response:
//! ```json
//! {
//!   "success": true,
//!   "bookmarks": { "12": true, "19": false }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Batched check request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub book_ids: Vec<i64>,
}

/// Batched check response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckResponse {
    pub success: bool,
    /// JSON object keys are strings even though book ids are integers
    #[serde(default)]
    pub bookmarks: HashMap<String, bool>,
}

/// Toggle request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub book_id: i64,
}

/// Toggle response: the server-authoritative new state
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToggleResponse {
    pub bookmarked: bool,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_check_response() {
        let json = r#"{
            "success": true,
            "bookmarks": { "12": true, "19": false }
        }"#;

        let response: CheckResponse =
            serde_json::from_str(json).expect("Should parse check response");

        assert!(response.success);
        assert_eq!(response.bookmarks.len(), 2);
        assert_eq!(response.bookmarks.get("12"), Some(&true));
        assert_eq!(response.bookmarks.get("19"), Some(&false));
    }

    #[test]
    fn test_parse_check_response_without_bookmarks() {
        let json = r#"{ "success": true }"#;

        let response: CheckResponse =
            serde_json::from_str(json).expect("Should parse sparse response");

        assert!(response.success);
        assert!(response.bookmarks.is_empty());
    }

    #[test]
    fn test_parse_toggle_response() {
        let json = r#"{ "bookmarked": true }"#;

        let response: ToggleResponse =
            serde_json::from_str(json).expect("Should parse toggle response");

        assert!(response.bookmarked);
    }

    #[test]
    fn test_check_request_uses_camel_case() {
        let request = CheckRequest {
            book_ids: vec![1, 2],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"bookIds":[1,2]}"#);
    }

    #[test]
    fn test_toggle_request_uses_camel_case() {
        let request = ToggleRequest { book_id: 7 };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"bookId":7}"#);
    }
}
