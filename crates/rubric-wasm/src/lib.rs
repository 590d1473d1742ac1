#![deny(clippy::all)]

//! Browser bindings for the rubric page
//!
//! The page script only wires DOM events: it calls these functions and puts
//! the returned strings into containers or onto the clipboard.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use rubric_client::{ClientConfig, Labels, RubricRequest, Session, TeacherInput};
use rubric_core::{parse, render_csv, render_grid, render_html, render_tsv, RenderOptions};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Deserialize an optional JS object, falling back to the default
fn from_js_or_default<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Serialize to plain JS objects rather than `Map`s
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render markdown as an HTML fragment
#[wasm_bindgen(js_name = "renderHtml")]
pub fn render_html_js(markdown: &str, options: JsValue) -> Result<String, JsError> {
    let options: RenderOptions = from_js_or_default(options)?;
    Ok(render_html(&parse(markdown), &options))
}

/// Render markdown as tab-separated values
#[wasm_bindgen(js_name = "renderTsv")]
pub fn render_tsv_js(markdown: &str) -> String {
    render_tsv(&parse(markdown))
}

/// Render markdown as legacy CSV
#[wasm_bindgen(js_name = "renderCsv")]
pub fn render_csv_js(markdown: &str, options: JsValue) -> Result<String, JsError> {
    let options: RenderOptions = from_js_or_default(options)?;
    Ok(render_csv(&parse(markdown), &options))
}

/// Render markdown as an array of spreadsheet rows under `title`
#[wasm_bindgen(js_name = "renderGrid")]
pub fn render_grid_js(markdown: &str, title: &str) -> Result<JsValue, JsError> {
    to_js(&render_grid(&parse(markdown), title))
}

/// Build the JSON request body for the form fields
#[wasm_bindgen(js_name = "buildRequest")]
pub fn build_request_js(input: JsValue, labels: JsValue) -> Result<String, JsError> {
    let input: TeacherInput = from_js_or_default(input)?;
    let labels: Labels = from_js_or_default(labels)?;
    RubricRequest::new(&input, &labels)
        .to_json()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Client configuration for the page origin
#[wasm_bindgen(js_name = "configForOrigin")]
pub fn config_for_origin_js(origin: &str) -> Result<JsValue, JsError> {
    to_js(&ClientConfig::for_origin(origin))
}

/// Session shared by the submit and export handlers
#[wasm_bindgen]
pub struct RubricSession {
    inner: Session,
    options: RenderOptions,
    labels: Labels,
}

#[wasm_bindgen]
impl RubricSession {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, labels: JsValue) -> Result<RubricSession, JsError> {
        Ok(Self {
            inner: Session::new(),
            options: from_js_or_default(options)?,
            labels: from_js_or_default(labels)?,
        })
    }

    /// Validate a response and return the panels to display, in tab order
    #[wasm_bindgen(js_name = "acceptResponse")]
    pub fn accept_response(
        &mut self,
        input: JsValue,
        status: u16,
        body: &str,
    ) -> Result<JsValue, JsError> {
        let input: TeacherInput = from_js_or_default(input)?;
        let panels = self
            .inner
            .accept_response(input, status, body, &self.options)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&panels.into_values().collect::<Vec<_>>())
    }

    /// Build the clipboard export for the last results
    #[wasm_bindgen(js_name = "exportSheet")]
    pub fn export_sheet(&self) -> Result<String, JsError> {
        self.inner
            .export_sheet_now(&self.labels)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = "hasResults")]
    pub fn has_results(&self) -> bool {
        self.inner.has_results()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
