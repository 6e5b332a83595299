//! WASM bindings for secret-quorum
//!
//! This module provides JavaScript-friendly bindings for secret recovery and
//! value decoding.

use wasm_bindgen::prelude::*;

use crate::commands;
use crate::consensus::TieBreak;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Recover the secret from a JSON share file
///
/// # Arguments
/// * `json` - Share file contents (`keys` block plus one entry per share)
/// * `tie_break` - `"first"` (default when empty) or `"reject"`
///
/// # Returns
/// The report as a JavaScript object, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const report = wasm_recover(fileContents, "first");
/// console.log(`Secret: ${report.secret}`);
/// for (const share of report.wrong_shares) {
///     console.log(`Wrong share: x=${share.x}, y=${share.y}`);
/// }
/// ```
#[wasm_bindgen]
pub fn wasm_recover(json: &str, tie_break: &str) -> Result<JsValue, JsValue> {
    let tie_break: TieBreak = tie_break
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;

    let report = commands::recover(json, tie_break)
        .map_err(|e| JsValue::from_str(&format!("Recover failed: {e:#}")))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Decode a value written in `base` to a decimal string
///
/// # Example (JavaScript)
/// ```javascript
/// const value = wasm_decode("213", 4); // "39"
/// ```
#[wasm_bindgen]
pub fn wasm_decode(value: &str, base: u32) -> Result<String, JsValue> {
    commands::decode_value(value, base)
        .map_err(|e| JsValue::from_str(&format!("Decode failed: {e:#}")))
}
