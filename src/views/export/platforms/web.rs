// Browser implementation: a transient hidden anchor with a download attribute
use super::{FileSaver, SaveError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

impl From<JsValue> for SaveError {
    fn from(value: JsValue) -> Self {
        SaveError::Browser(format!("{value:?}"))
    }
}

pub struct BrowserSaver;

impl FileSaver for BrowserSaver {
    fn save_as(&self, uri: &str, suggested_name: &str) -> Result<(), SaveError> {
        let window = web_sys::window().ok_or_else(|| SaveError::Browser("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SaveError::Browser("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| SaveError::Browser("no document body".into()))?;

        let anchor = document
            .create_element("a")?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|e| SaveError::Browser(format!("failed to cast element: {e:?}")))?;
        anchor.set_href(uri);
        anchor.set_download(suggested_name);
        anchor.set_attribute("style", "display: none")?;

        body.append_child(&anchor)?;
        anchor.click();

        // The browser already has the instruction; a failed cleanup is not a failed save.
        if let Err(e) = body.remove_child(&anchor) {
            tracing::warn!("Failed to remove download anchor: {:?}", e);
        }

        tracing::info!("Issued browser download for {} as {}", uri, suggested_name);
        Ok(())
    }
}
