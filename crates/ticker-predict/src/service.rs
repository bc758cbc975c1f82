//! The HTTP capability the submission handler talks to.

use log::{debug, trace};
use reqwest::StatusCode;

use crate::error::PredictError;
use crate::protocol::{PredictionRequest, PredictionResponse};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Something that can turn a [`PredictionRequest`] into a [`PredictionResponse`].
///
/// Futures are not required to be `Send`: in the browser the request runs on
/// the page's single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictError>;
}

impl<S: PredictionService + ?Sized> PredictionService for &S {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictError> {
        (**self).predict(request).await
    }
}

/// [`PredictionService`] backed by `reqwest`.
///
/// On wasm32 reqwest goes through the browser's `fetch`, so the same type
/// serves the page and the terminal. There is no timeout and no retry.
#[derive(Debug, Clone)]
pub struct ReqwestPredictionService {
    client: reqwest::Client,
    endpoint: String,
}

/// Status and body of a response, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: StatusCode,
    pub body: String,
}

impl RawReply {
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

impl ReqwestPredictionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &PredictionRequest) -> Result<reqwest::Response, PredictError> {
        debug!("POST {} ticker={:?}", self.endpoint, request.ticker);
        // `.json()` sets `Content-Type: application/json`
        self.client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(PredictError::transport)
    }

    /// Send `request` and return whatever came back, whatever the status.
    pub async fn probe(&self, request: &PredictionRequest) -> Result<RawReply, PredictError> {
        let response = self.send(request).await?;
        let status = response.status();
        let body = response.text().await.map_err(PredictError::transport)?;
        Ok(RawReply { status, body })
    }
}

impl Default for ReqwestPredictionService {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl PredictionService for ReqwestPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictError> {
        let response = self.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            debug!("{} answered {status}", self.endpoint);
            return Err(PredictError::Status(status));
        }

        let body = response.text().await.map_err(PredictError::transport)?;
        let decoded = PredictionResponse::from_json(&body)?;
        if decoded.ticker.is_some() || decoded.details.is_some() {
            trace!(
                "response extras: ticker={:?} details={:?}",
                decoded.ticker, decoded.details
            );
        }
        Ok(decoded)
    }
}
