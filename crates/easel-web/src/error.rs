use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human readable form of a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{}", describe(&value))
}

/// Converts a bridge error for callers on the JS side of the boundary.
pub(crate) fn to_js(err: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{err:#}")).into()
}
