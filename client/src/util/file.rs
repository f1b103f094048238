//! Browser file helpers for theme export/import and image uploads.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as strings for the notice tray; nothing here panics.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

/// Offer `text` as a JSON file download named `file_name`.
///
/// # Errors
///
/// Returns an error string when the browser refuses to build the download.
pub fn download_json(file_name: &str, text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast as _, JsValue};

        let err = |e: JsValue| format!("{e:?}");
        let parts = js_sys::Array::of1(&JsValue::from_str(text));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(err)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "not an anchor".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, text);
        Err("not available on server".to_owned())
    }
}

/// Read the first file selected in an `<input type="file">` as text.
///
/// # Errors
///
/// Returns an error string when no file is selected or it cannot be read.
#[cfg(feature = "hydrate")]
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Result<String, String> {
    let file = input
        .files()
        .and_then(|files| files.get(0))
        .ok_or_else(|| "no file selected".to_owned())?;
    let text = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "file is not text".to_owned())
}

/// Largest image accepted by the upload fields, in megabytes.
pub const MAX_IMAGE_MB: u64 = 5;

/// Check a selected image's size against a cap of `max_mb` megabytes.
///
/// # Errors
///
/// Returns the message shown to the operator when the file is too large.
pub fn check_image_size(size_bytes: u64, max_mb: u64) -> Result<(), String> {
    if size_bytes > max_mb * 1024 * 1024 {
        return Err(format!("Please select an image smaller than {max_mb}MB"));
    }
    Ok(())
}

/// Read the first file selected in an `<input type="file">` as a data URL.
///
/// # Errors
///
/// Returns an error string when no file is selected or the read fails.
#[cfg(feature = "hydrate")]
pub async fn read_selected_data_url(input: &web_sys::HtmlInputElement) -> Result<String, String> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast as _, JsValue};

    let err = |e: JsValue| format!("{e:?}");
    let file = input
        .files()
        .and_then(|files| files.get(0))
        .ok_or_else(|| "no file selected".to_owned())?;
    let reader = web_sys::FileReader::new().map_err(err)?;
    let done = js_sys::Promise::new(&mut |resolve, reject| {
        let loaded = reader.clone();
        let on_load = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &loaded.result().unwrap_or(JsValue::NULL));
        });
        let on_error = Closure::once_into_js(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });
    reader.read_as_data_url(&file).map_err(err)?;
    let url = wasm_bindgen_futures::JsFuture::from(done).await.map_err(err)?;
    url.as_string().ok_or_else(|| "file could not be read".to_owned())
}

/// Size in bytes of the first selected file, if any.
#[cfg(feature = "hydrate")]
pub fn selected_file_size(input: &web_sys::HtmlInputElement) -> Option<u64> {
    let file = input.files().and_then(|files| files.get(0))?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    Some(size)
}

/// Today's date as `YYYY-MM-DD` (empty outside the browser).
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        date_prefix(&iso)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Milliseconds since the epoch (0 outside the browser).
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn date_prefix(iso: &str) -> String {
    iso.get(..10).unwrap_or(iso).to_owned()
}
