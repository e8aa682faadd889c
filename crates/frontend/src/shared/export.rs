//! CSV template download and uploaded-file reading
use contracts::domain::common::EntityKind;
use contracts::shared::csv_io::{template_csv, template_file_name};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

/// Downloads the header-only import template for `entity`.
pub fn download_template(entity: EntityKind) -> Result<(), String> {
    let csv = template_csv(entity).map_err(|e| e.to_string())?;
    // BOM so spreadsheet tools pick UTF-8
    let content = format!("\u{FEFF}{csv}");
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, &template_file_name(entity))?;
    log::info!("template downloaded for {}", entity);
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Element is not an anchor")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("{:?}", e))?;

    body.append_child(&anchor).map_err(|e| format!("{:?}", e))?;
    anchor.click();
    body.remove_child(&anchor).map_err(|e| format!("{:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke object URL: {:?}", e))
}

/// Reads the whole file as UTF-8 text.
pub async fn read_file_text(file: &File) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    text.as_string()
        .ok_or_else(|| format!("{} is not a text file", file.name()))
}
