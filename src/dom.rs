//! Handles to the host page's static markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The crate does not own the page. These handles wrap elements the static
//! site already renders, so components receive a scoped view of the
//! document instead of running their own document-wide queries. Native
//! builds report an empty document and every lookup is a defined no-op.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// One preformatted code container in the host document.
///
/// Wraps the `<pre>` element. The nested `<code>` element holds the
/// copyable text and may be absent, in which case every text lookup
/// reports `None` and the attached copy button stays inert.
#[derive(Clone)]
pub struct CodeBlock {
    #[cfg(feature = "csr")]
    element: web_sys::HtmlElement,
}

impl CodeBlock {
    /// Literal text of the nested code element.
    ///
    /// Prefers the rendered text and falls back to the raw text content
    /// when rendering yields nothing. An empty code element produces
    /// `Some("")`; empty text is still copyable.
    pub fn code_text(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let code = self.element.query_selector("code").ok().flatten()?;
            let rendered = code
                .dyn_ref::<web_sys::HtmlElement>()
                .map(web_sys::HtmlElement::inner_text)
                .unwrap_or_default();
            if rendered.is_empty() {
                Some(code.text_content().unwrap_or_default())
            } else {
                Some(rendered)
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

#[cfg(feature = "csr")]
impl CodeBlock {
    /// Make the block the positioning anchor for its copy button.
    pub fn prepare(&self) {
        let _ = self.element.style().set_property("position", "relative");
    }

    /// The element the copy button component mounts into.
    pub fn mount_point(&self) -> web_sys::HtmlElement {
        self.element.clone()
    }
}

/// Every `<pre>` block in the document that contains a `<code>` child.
///
/// Zero matches is fine; the caller simply mounts nothing. The scan runs
/// once at startup.
pub fn code_blocks() -> Vec<CodeBlock> {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all("pre") else {
            return Vec::new();
        };
        let mut blocks = Vec::new();
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            if matches!(element.query_selector("code"), Ok(Some(_))) {
                blocks.push(CodeBlock { element });
            }
        }
        blocks
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Host-provided slot for the dark mode toggle control, when present.
#[cfg(feature = "csr")]
pub fn theme_toggle_slot() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window().and_then(|w| w.document())?;
    let element = document.get_element_by_id("dark-mode-toggle")?;
    element.dyn_into::<web_sys::HtmlElement>().ok()
}
