//! JSON payloads exchanged with the prediction endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PredictError;
use crate::ticker::Ticker;

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub ticker: String,
}

impl PredictionRequest {
    pub fn new(ticker: &Ticker) -> Self {
        Self {
            ticker: ticker.as_str().to_owned(),
        }
    }
}

/// Decoded response body.
///
/// Only `predicted_price` and `error` decide what gets rendered. The server
/// also echoes `ticker` on success and adds `details` to its 500 answers;
/// those two are kept for logging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionResponse {
    pub predicted_price: Option<f64>,
    pub error: Option<String>,
    pub ticker: Option<String>,
    pub details: Option<String>,
}

impl PredictionResponse {
    pub fn price(predicted_price: f64) -> Self {
        Self {
            predicted_price: Some(predicted_price),
            ..Self::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Parse a response body.
    ///
    /// Any JSON value is accepted as long as the fields that matter have a
    /// usable type: a body without the known fields (`{}`, `[]`, `42`)
    /// decodes to an empty response. `null` has no fields to look at and is
    /// rejected. A `predicted_price` of `null`, `false` or `""` counts as
    /// absent; any other non-numeric price is rejected.
    pub fn from_json(body: &str) -> Result<Self, PredictError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, PredictError> {
        if value.is_null() {
            return Err(PredictError::Decode(
                "response body is null, expected a JSON object".to_owned(),
            ));
        }

        let predicted_price = match value.get("predicted_price") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(text)) if text.is_empty() => None,
            Some(Value::Number(number)) => number.as_f64(),
            Some(other) => {
                return Err(PredictError::Decode(format!(
                    "predicted_price must be a number, got {other}"
                )));
            }
        };

        Ok(Self {
            predicted_price,
            error: value.get("error").and_then(error_text),
            ticker: value.get("ticker").and_then(Value::as_str).map(str::to_owned),
            details: value.get("details").and_then(Value::as_str).map(str::to_owned),
        })
    }

    /// The application-level error message, if the server sent a non-empty one.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }
}

/// Error messages are normally strings; other values are shown as their JSON
/// text unless they are falsy (`null`, `false`, `0`, `""`).
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
