//! The submission handler: read the ticker, show the loading text, ask the
//! service, show the outcome.

use log::{debug, info, warn};

use crate::outcome::{LOADING_TEXT, Outcome};
use crate::protocol::PredictionRequest;
use crate::service::PredictionService;
use crate::ticker::Ticker;

/// The UI boundary: one input field and one display region.
pub trait FormView {
    /// Current raw content of the ticker input.
    fn ticker_input(&self) -> String;

    /// Replace the text of the display region.
    fn show_result(&self, text: &str);
}

impl<V: FormView + ?Sized> FormView for &V {
    fn ticker_input(&self) -> String {
        (**self).ticker_input()
    }

    fn show_result(&self, text: &str) {
        (**self).show_result(text)
    }
}

/// Ask `service` for a prediction of `ticker` and turn the answer, or the
/// failure, into the [`Outcome`] to display.
pub async fn predict_outcome<S: PredictionService>(service: &S, ticker: &Ticker) -> Outcome {
    let request = PredictionRequest::new(ticker);
    match service.predict(&request).await {
        Ok(response) => Outcome::from_response(ticker, &response),
        Err(error) => {
            warn!("prediction request for {ticker} failed: {error}");
            Outcome::from_error(&error)
        }
    }
}

/// Binds a [`PredictionService`] to a [`FormView`].
///
/// Submissions are not serialized against each other: when two are in flight
/// the one that resolves last owns the display.
pub struct SubmissionHandler<S, V> {
    service: S,
    view: V,
}

impl<S: PredictionService, V: FormView> SubmissionHandler<S, V> {
    pub fn new(service: S, view: V) -> Self {
        Self { service, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle one form submission.
    ///
    /// Blank input is ignored: nothing is sent, the display stays as it is
    /// and `None` is returned. Otherwise the display goes to the loading text
    /// until the request settles.
    pub async fn submit(&self) -> Option<Outcome> {
        let Some(ticker) = Ticker::parse(&self.view.ticker_input()) else {
            debug!("ignoring submission with empty ticker");
            return None;
        };

        self.view.show_result(LOADING_TEXT);
        let outcome = predict_outcome(&self.service, &ticker).await;
        info!("{outcome}");
        self.view.show_result(&outcome.to_string());
        Some(outcome)
    }
}
