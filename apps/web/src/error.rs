//! Browser binding error types.

use match_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element #{0}")]
    MissingElement(&'static str),

    #[error("element #{id} is not a {expected}")]
    WrongElementType {
        id: &'static str,
        expected: &'static str,
    },

    #[error("invalid config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Result type alias using WebError.
pub type Result<T> = std::result::Result<T, WebError>;

/// Log a failed DOM call made from an event handler, which has no caller to
/// return the error to.
pub fn log_failure<T>(result: std::result::Result<T, JsValue>, action: &str) {
    if let Err(err) = result {
        tracing::error!(err = %WebError::from(err), "failed to {}", action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            WebError::MissingElement("score").to_string(),
            "missing element #score"
        );
        assert_eq!(
            WebError::WrongElementType {
                id: "question",
                expected: "HtmlInputElement",
            }
            .to_string(),
            "element #question is not a HtmlInputElement"
        );
    }
}
