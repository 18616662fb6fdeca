//! Browser file download via a Blob and a temporary anchor element.

use anyhow::{anyhow, Result};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer `bytes` to the user as a file download.
pub fn save_file(filename: &str, mime_type: &str, bytes: &[u8]) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow!("no document body"))?;

    let data = Uint8Array::from(bytes);
    let parts = Array::new();
    parts.push(&data);

    let props = BlobPropertyBag::new();
    props.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|e| anyhow!("failed to create blob: {e:?}"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow!("failed to create object URL: {e:?}"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("failed to create anchor: {e:?}"))?
        .dyn_into()
        .map_err(|_| anyhow!("element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| anyhow!("failed to attach anchor: {e:?}"))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = Url::revoke_object_url(&url);

    Ok(())
}
