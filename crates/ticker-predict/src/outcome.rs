use std::fmt;

use crate::error::PredictError;
use crate::protocol::PredictionResponse;
use crate::ticker::Ticker;

/// Shown while the request is in flight.
pub const LOADING_TEXT: &str = "Predicting...";

/// Fallback when the endpoint gave neither a price nor an error message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Final state of one submission; its `Display` is the text for the
/// display region.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `Predicted Price for <ticker>: $<price>`
    Price { ticker: Ticker, price: f64 },
    /// `Prediction error: <message>`
    Rejected { message: String },
    /// `An error occurred: <message>`
    Failed { message: String },
}

impl Outcome {
    pub fn from_response(ticker: &Ticker, response: &PredictionResponse) -> Self {
        match response.predicted_price {
            Some(price) => Self::Price {
                ticker: ticker.clone(),
                price,
            },
            None => Self::Rejected {
                message: response.error_message().unwrap_or(UNKNOWN_ERROR).to_owned(),
            },
        }
    }

    pub fn from_error(error: &PredictError) -> Self {
        Self::Failed {
            message: error.to_string(),
        }
    }

    pub fn is_price(&self) -> bool {
        matches!(self, Self::Price { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price { ticker, price } => {
                write!(f, "Predicted Price for {ticker}: ${}", format_price(*price))
            }
            Self::Rejected { message } => write!(f, "Prediction error: {message}"),
            Self::Failed { message } => write!(f, "An error occurred: {message}"),
        }
    }
}

/// Two decimal places, exact ties rounded away from zero.
///
/// `{:.2}` alone would round ties to even (`0.125` -> `0.12`), while prices
/// such as eighths are expected to come out as `0.13`.
fn format_price(price: f64) -> String {
    // Every finite f64 has at most 1074 fractional decimal digits, so this
    // expansion is exact and the third digit decides the rounding.
    let exact = format!("{:.1074}", price.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return format!("{price:.2}");
    };

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if fraction.as_bytes()[2] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let sign = if price < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(&digits[..split]),
        String::from_utf8_lossy(&digits[split..])
    )
}
