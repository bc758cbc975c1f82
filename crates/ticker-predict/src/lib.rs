//! Submit a ticker symbol to a prediction endpoint and render the result.
//!
//! The core is [`handler::predict_outcome`], a function of a [`Ticker`] and a
//! [`PredictionService`] that yields the text for the display region. The
//! [`handler::SubmissionHandler`] adds input validation and the loading state
//! on top of a [`handler::FormView`]; the `platform` modules bind it to a real
//! page or terminal.

pub mod error;
pub mod handler;
pub mod outcome;
pub mod platform;
pub mod protocol;
pub mod service;
pub mod ticker;

pub use error::PredictError;
pub use handler::{FormView, SubmissionHandler, predict_outcome};
pub use outcome::Outcome;
pub use protocol::{PredictionRequest, PredictionResponse};
pub use service::{DEFAULT_ENDPOINT, PredictionService, ReqwestPredictionService};
pub use ticker::Ticker;
