use crate::errors::PwaError;
use crate::global::window;
use crate::ports::DocumentPort;
use wasm_bindgen::JsCast;
use web_sys::HtmlLinkElement;

/// Document adapter backed by `window.document`.
///
/// Looks the document up on every call, so it holds no browser handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

impl BrowserDocument {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPort for BrowserDocument {
    fn append_manifest_link(&self, href: &str) -> Result<(), PwaError> {
        let document = window()?.document().ok_or(PwaError::Unavailable {
            message: "Document not found",
        })?;
        let head = document.head().ok_or(PwaError::Unavailable {
            message: "Document has no head element",
        })?;

        let link = document
            .create_element("link")?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|_| PwaError::Unavailable {
                message: "Failed to create link element",
            })?;
        link.set_rel("manifest");
        link.set_href(href);

        head.append_child(&link)?;
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn manifest_links(href: &str) -> u32 {
        let document = window().unwrap().document().unwrap();
        document
            .query_selector_all(&format!("link[rel=\"manifest\"][href=\"{}\"]", href))
            .unwrap()
            .length()
    }

    #[wasm_bindgen_test]
    fn test_append_manifest_link() {
        let href = "/adapter-test/manifest.json";
        BrowserDocument::new().append_manifest_link(href).unwrap();
        assert_eq!(manifest_links(href), 1);
    }

    #[wasm_bindgen_test]
    fn test_append_twice_duplicates_link() {
        let href = "/adapter-test/duplicate.json";
        let document = BrowserDocument::new();
        document.append_manifest_link(href).unwrap();
        document.append_manifest_link(href).unwrap();
        assert_eq!(manifest_links(href), 2);
    }
}
