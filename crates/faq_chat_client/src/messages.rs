//! HTTP wire types for the FAQ backend. Client ↔ server JSON.

use serde::{Deserialize, Serialize};

/// Client → server: body of `POST /ask`.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
    pub message: &'a str,
    /// Empty string means "all categories".
    pub category: &'a str,
}

impl<'a> AskRequest<'a> {
    pub fn new(message: &'a str, category: &'a str) -> Self {
        Self { message, category }
    }
}

/// Server → client: body of a successful `POST /ask`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Server → client: body of `GET /categories`. A missing field decodes as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Server → client: body of `GET /`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Server → client: error body attached to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    /// Extract `detail` from a raw error body; `None` when the body is not the expected shape.
    pub fn from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .map(|e| e.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_serializes_both_fields() {
        let json = serde_json::to_value(AskRequest::new("  hello ", "")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "  hello ", "category": "" }));
    }

    #[test]
    fn categories_missing_field_is_empty() {
        let resp: CategoriesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.categories.is_empty());
    }

    #[test]
    fn categories_keep_server_order_and_duplicates() {
        let resp: CategoriesResponse =
            serde_json::from_str(r#"{"categories":["B","A","B"]}"#).unwrap();
        assert_eq!(resp.categories, vec!["B", "A", "B"]);
    }

    #[test]
    fn ask_response_requires_answer() {
        assert!(serde_json::from_str::<AskResponse>(r#"{"reply":"x"}"#).is_err());
    }

    #[test]
    fn error_detail_from_fastapi_body() {
        let body = r#"{"detail":"検索中にエラーが発生しました"}"#;
        assert_eq!(
            ErrorDetail::from_body(body).as_deref(),
            Some("検索中にエラーが発生しました")
        );
        assert_eq!(ErrorDetail::from_body("Internal Server Error"), None);
    }
}
