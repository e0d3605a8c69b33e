//! File Inputs
//!
//! Reading the selected file and turning it into a data URL.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use form_model::ImageMeta;

use super::{document, js_err};

/// First file of a file input, with its metadata
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<(web_sys::File, ImageMeta)> {
    let file = input.files()?.get(0)?;
    let meta = ImageMeta {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    };
    Some((file, meta))
}

/// Empty the file input with this id
pub fn clear_file_input(id: &str) {
    let input = document()
        .ok()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value("");
    }
}

/// Read a file as a `data:` URL
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(js_err)?;

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file read failed"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(js_err)?;
    let value = JsFuture::from(promise).await.map_err(js_err)?;
    value.as_string().ok_or_else(|| "file reader returned no text".to_string())
}
