//! WASM bindings for browser-based bookmark conversion.
//!
//! This module exposes the conversion pipeline to JavaScript via
//! wasm-bindgen; the returned bytes are the ZIP archive, ready to hand to a
//! download helper as `converted-bookmarks.zip`.

use std::io::Cursor;

use wasm_bindgen::prelude::*;

use crate::convert::convert_str;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert bookmark XML text into a label track archive.
///
/// Returns the raw ZIP bytes. Malformed XML rejects with the parse error
/// message; missing-field warnings do not fail the conversion and can be
/// queried separately with [`conversion_warnings`].
#[wasm_bindgen]
pub fn convert_bookmarks(xml: &str) -> Result<Vec<u8>, JsValue> {
    let mut output = Cursor::new(Vec::new());
    convert_str(xml, &mut output).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(output.into_inner())
}

/// Run the conversion and return the aggregated warning message, if any.
///
/// An empty string means the run was clean. Malformed XML rejects as in
/// [`convert_bookmarks`].
#[wasm_bindgen]
pub fn conversion_warnings(xml: &str) -> Result<String, JsValue> {
    let mut output = Cursor::new(Vec::new());
    let report = convert_str(xml, &mut output).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(report.diagnostics.summary().unwrap_or_default())
}
