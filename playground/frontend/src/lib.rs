use ticker_predict::DEFAULT_ENDPOINT;
use ticker_predict::platform::browser::{FORM_ID, bind_prediction_form};
use wasm_bindgen::prelude::*;

/// Overrides the endpoint when set on the form, e.g.
/// `<form id="predictionForm" data-endpoint="https://example.com/predict">`.
const ENDPOINT_ATTRIBUTE: &str = "data-endpoint";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    bind_prediction_form(&endpoint())
}

fn endpoint() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FORM_ID))
        .and_then(|form| form.get_attribute(ENDPOINT_ATTRIBUTE))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned())
}
