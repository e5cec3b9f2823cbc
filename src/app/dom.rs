use bootstrap::{BootstrapError, HostDocument, StylesheetResource};
use js_sys::wasm_bindgen::JsCast;
use shared_constants::STYLESHEET_ATTRIBUTE;
use web_sys::{Document, HtmlElement};

/// The browser document the application is served in.
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Self {
        Self::new(leptos::prelude::document())
    }
}

fn id_selector(id: &str) -> String {
    format!("[id=\"{}\"]", id.replace('\\', "\\\\").replace('"', "\\\""))
}

impl HostDocument for WebDocument {
    type Element = HtmlElement;

    fn elements_by_id(&self, id: &str) -> Result<Vec<HtmlElement>, BootstrapError> {
        let nodes = self
            .document
            .query_selector_all(&id_selector(id))
            .map_err(|e| BootstrapError::DocumentQueryFailure {
                target_id: id.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    fn register_stylesheet(&self, resource: &StylesheetResource) -> Result<(), BootstrapError> {
        let failure = |reason: String| BootstrapError::StylesheetResourceFailure {
            name: resource.name.to_string(),
            reason,
        };
        let head = self
            .document
            .head()
            .ok_or_else(|| failure("the document has no <head>".to_string()))?;
        let style = self
            .document
            .create_element("style")
            .map_err(|e| failure(format!("{e:?}")))?;
        style
            .set_attribute(STYLESHEET_ATTRIBUTE, &resource.name)
            .map_err(|e| failure(format!("{e:?}")))?;
        style.set_text_content(Some(resource.source.as_ref()));
        head.append_child(&style)
            .map_err(|e| failure(format!("{e:?}")))?;
        Ok(())
    }
}
