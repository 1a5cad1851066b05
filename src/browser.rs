//! Browser Glue
//!
//! Thin wrappers over the web APIs the board needs: clock, alerts and
//! reading a picked file as a data URI.

use chrono::{NaiveDate, Utc};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement};

/// Registration day (UTC calendar date)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Blocking notification
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// First file of a file-input change event.
///
/// The input is cleared so picking the same file again fires a new event.
pub fn take_selected_file(ev: &web_sys::Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    input.set_value("");
    file
}

/// Read a file into a `data:` URI
pub async fn read_file_as_data_url(file: File) -> Result<String, String> {
    let reader = FileReader::new().map_err(js_error)?;

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let done = reader.clone();
        let on_load = Closure::once_into_js(move || {
            let result = done.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let on_error = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file read failed"));
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader.read_as_data_url(&file).map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    value
        .as_string()
        .ok_or_else(|| "FileReader returned a non-string result".to_string())
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
