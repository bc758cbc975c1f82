//! Binds the submission handler to the page's prediction form.
//!
//! The page markup supplies three elements: the form `#predictionForm`, the
//! text input `#tickerInput` and the output element `#result`.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::handler::{FormView, SubmissionHandler};
use crate::service::{PredictionService, ReqwestPredictionService};

pub const FORM_ID: &str = "predictionForm";
pub const INPUT_ID: &str = "tickerInput";
pub const RESULT_ID: &str = "result";

/// [`FormView`] over the ticker input and the result element.
pub struct DomFormView {
    input: HtmlInputElement,
    result: Element,
}

impl DomFormView {
    pub fn new(input: HtmlInputElement, result: Element) -> Self {
        Self { input, result }
    }

    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let input = element_by_id(document, INPUT_ID)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str(&format!("#{INPUT_ID} is not an <input>")))?;
        let result = element_by_id(document, RESULT_ID)?;
        Ok(Self::new(input, result))
    }
}

impl FormView for DomFormView {
    fn ticker_input(&self) -> String {
        self.input.value()
    }

    fn show_result(&self, text: &str) {
        self.result.set_text_content(Some(text));
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))
}

/// Install the `submit` listener on `#predictionForm`, sending requests
/// through `service`.
///
/// The browser's default submission is always prevented, even for blank
/// input. Each submission runs as its own task on the page's event loop.
pub fn bind_form<S>(document: &Document, service: S) -> Result<(), JsValue>
where
    S: PredictionService + 'static,
{
    let form = element_by_id(document, FORM_ID)?;
    let view = DomFormView::from_document(document)?;
    let handler = Rc::new(SubmissionHandler::new(service, view));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let handler = Rc::clone(&handler);
        spawn_local(async move {
            handler.submit().await;
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // The listener lives as long as the page
    on_submit.forget();

    debug!("bound #{FORM_ID}");
    Ok(())
}

/// Bind the page's form to the prediction endpoint at `endpoint`.
pub fn bind_prediction_form(endpoint: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    bind_form(&document, ReqwestPredictionService::new(endpoint))
}
