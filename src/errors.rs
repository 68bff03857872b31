//! Error types for the swiftpay-rs library.
//!
//! This module defines all error types that can occur during SwiftPay API
//! operations, including the structured error bodies returned by the gateway
//! and their classification into known kinds.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error body returned by the SwiftPay gateway.
///
/// The gateway reports failures as a JSON object with an `error` message,
/// an optional numeric `errCode`, and an optional free-form `text` detail.
/// All three fields are preserved verbatim on [`SwiftPayError::Api`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Numeric error code, when the gateway sends one.
    #[serde(rename = "errCode", skip_serializing_if = "Option::is_none")]
    pub err_code: Option<i64>,

    /// Human-readable error message, exactly as received.
    pub error: String,

    /// Optional detail accompanying the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => write!(f, "{}: {}", self.error, text),
            _ => write!(f, "{}", self.error),
        }
    }
}

/// Known classes of gateway error messages.
///
/// The gateway identifies failures by exact (Russian-language) message
/// strings rather than stable codes. Only the messages listed in
/// [`MESSAGE_KINDS`] map to a named kind; every other message classifies as
/// [`ApiErrorKind::Unknown`], which callers should treat as the ordinary
/// outcome rather than an exceptional one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The gateway rejected the API key (`Ошибка авторизации`).
    InvalidToken,
    /// The gateway rejected the request parameters
    /// (`Ошибка при валидации параметров`).
    InvalidParams,
    /// Any message not present in the classification table.
    Unknown,
}

/// Exact-match table from gateway message to [`ApiErrorKind`].
///
/// Supporting a new message means adding one row here.
pub const MESSAGE_KINDS: &[(&str, ApiErrorKind)] = &[
    ("Ошибка авторизации", ApiErrorKind::InvalidToken),
    ("Ошибка при валидации параметров", ApiErrorKind::InvalidParams),
];

impl ApiErrorKind {
    /// Classifies a gateway error message.
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftpay_rs::ApiErrorKind;
    ///
    /// assert_eq!(ApiErrorKind::classify("Ошибка авторизации"), ApiErrorKind::InvalidToken);
    /// assert_eq!(ApiErrorKind::classify("Что-то пошло не так"), ApiErrorKind::Unknown);
    /// ```
    pub fn classify(message: &str) -> Self {
        MESSAGE_KINDS
            .iter()
            .find(|(known, _)| *known == message)
            .map(|(_, kind)| *kind)
            .unwrap_or(ApiErrorKind::Unknown)
    }
}

/// Main error type for SwiftPay operations.
#[derive(Error, Debug)]
pub enum SwiftPayError {
    /// A parameter failed local validation; no request was sent.
    #[error("{0}")]
    InvalidParams(String),

    /// The gateway answered HTTP 404 for the requested path.
    #[error("Method not found")]
    MethodNotFound,

    /// The gateway returned a structured error body.
    #[error("{body}")]
    Api {
        /// Classification of the gateway message.
        kind: ApiErrorKind,
        /// The error body, verbatim.
        body: ApiErrorBody,
    },

    /// Error during HTTP request/response handling.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing a URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
}

impl SwiftPayError {
    /// Returns the numeric error code, if this error carries one.
    ///
    /// [`SwiftPayError::MethodNotFound`] always reports `-1`; gateway errors
    /// report their `errCode` field when present.
    pub fn code(&self) -> Option<i64> {
        match self {
            SwiftPayError::MethodNotFound => Some(-1),
            SwiftPayError::Api { body, .. } => body.err_code,
            _ => None,
        }
    }

    /// Returns the gateway error classification, for [`SwiftPayError::Api`].
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            SwiftPayError::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<ApiErrorBody> for SwiftPayError {
    fn from(body: ApiErrorBody) -> Self {
        SwiftPayError::Api {
            kind: ApiErrorKind::classify(&body.error),
            body,
        }
    }
}

/// Result type alias for SwiftPay operations.
pub type Result<T> = std::result::Result<T, SwiftPayError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn body(err_code: Option<i64>, error: &str, text: Option<&str>) -> ApiErrorBody {
        ApiErrorBody {
            err_code,
            error: error.to_string(),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn test_classify_known_messages() {
        assert_eq!(
            ApiErrorKind::classify("Ошибка авторизации"),
            ApiErrorKind::InvalidToken
        );
        assert_eq!(
            ApiErrorKind::classify("Ошибка при валидации параметров"),
            ApiErrorKind::InvalidParams
        );
    }

    #[test]
    fn test_classify_falls_back_to_unknown() {
        assert_eq!(ApiErrorKind::classify(""), ApiErrorKind::Unknown);
        assert_eq!(
            ApiErrorKind::classify("Недостаточно средств"),
            ApiErrorKind::Unknown
        );
        // Near misses must not match: the table is exact, not prefix-based.
        assert_eq!(
            ApiErrorKind::classify("Ошибка авторизации "),
            ApiErrorKind::Unknown
        );
    }

    #[test]
    fn test_error_body_display() {
        assert_eq!(body(None, "Ошибка авторизации", None).to_string(), "Ошибка авторизации");
        assert_eq!(
            body(Some(7), "Ошибка при валидации параметров", Some("shop_id")).to_string(),
            "Ошибка при валидации параметров: shop_id"
        );
        // Empty detail renders like an absent one.
        assert_eq!(body(None, "oops", Some("")).to_string(), "oops");
    }

    #[test]
    fn test_error_body_wire_names() {
        let parsed: ApiErrorBody =
            serde_json::from_str(r#"{"errCode":5,"error":"Ошибка авторизации"}"#).unwrap();
        assert_eq!(parsed, body(Some(5), "Ошибка авторизации", None));

        let rendered = serde_json::to_value(&parsed).unwrap();
        assert_eq!(rendered["errCode"], 5);
        assert!(rendered.get("text").is_none());
    }

    #[test]
    fn test_api_error_from_body() {
        let err: SwiftPayError = body(Some(5), "Ошибка авторизации", None).into();
        assert_eq!(err.kind(), Some(ApiErrorKind::InvalidToken));
        assert_eq!(err.code(), Some(5));
        assert_eq!(err.to_string(), "Ошибка авторизации");
    }

    #[test]
    fn test_method_not_found_contract() {
        let err = SwiftPayError::MethodNotFound;
        assert_eq!(err.code(), Some(-1));
        assert_eq!(err.kind(), None);
        assert_eq!(err.to_string(), "Method not found");
    }

    #[test]
    fn test_invalid_params_display_is_bare_message() {
        let err = SwiftPayError::InvalidParams(
            "shopId should be a number greater than 0".to_string(),
        );
        assert_eq!(err.to_string(), "shopId should be a number greater than 0");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: SwiftPayError = json_err.into();
        assert!(matches!(err, SwiftPayError::JsonError(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
