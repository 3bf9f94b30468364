//! Handing a fetched file to the browser's download machinery.
//!
//! The bytes become a `Blob`, the blob gets an object URL, and a
//! synthetic click on a detached anchor starts the download. The URL
//! is revoked straight away; the browser keeps the blob alive for the
//! download it already started.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub fn save_file(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("creating blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("creating object URL: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document object".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("creating anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| "element is not an anchor".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
