use percent_encoding::percent_decode_str;

pub const DEFAULT_EXPORT_FILENAME: &str = "attendance-report.xlsx";

/// Picks the download name out of a `Content-Disposition` header, preferring
/// the RFC 5987 `filename*` form.
pub fn filename_from_disposition(header: Option<&str>) -> String {
    let Some(header) = header else {
        return DEFAULT_EXPORT_FILENAME.to_string();
    };
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        if let Some(encoded) = part.strip_prefix("filename*=") {
            let value = encoded
                .split_once("''")
                .map(|(_, rest)| rest)
                .unwrap_or(encoded)
                .trim_matches('"');
            if let Ok(decoded) = percent_decode_str(value).decode_utf8() {
                if !decoded.trim().is_empty() {
                    return decoded.into_owned();
                }
            }
        } else if let Some(value) = part.strip_prefix("filename=") {
            let value = value.trim_matches('"').trim();
            if !value.is_empty() {
                plain = Some(value.to_string());
            }
        }
    }
    plain.unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn trigger_blob_download(filename: &str, content_type: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_blob_download(filename: &str, _content_type: &str, bytes: &[u8]) -> Result<(), String> {
    log::debug!("download of {} ({} bytes) skipped outside the browser", filename, bytes.len());
    Ok(())
}
