//! Two-tier text copy: native clipboard API with a legacy fallback.
//!
//! TRADE-OFFS
//! ==========
//! `navigator.clipboard` can be denied by permissions policy or missing
//! outside secure contexts, so a failed write falls through to the old
//! selection + `execCommand("copy")` path before the attempt is reported
//! as failed.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use thiserror::Error;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "csr")]
use wasm_bindgen_futures::JsFuture;

/// Which copy tier placed the text on the clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    /// Asynchronous `navigator.clipboard` write.
    Native,
    /// Selection plus `execCommand("copy")`.
    Legacy,
}

/// Why a copy attempt failed.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The async clipboard API is missing or rejected the write.
    #[error("clipboard API unavailable: {0}")]
    ClipboardUnavailable(String),
    /// The legacy copy command failed as well.
    #[error("fallback copy failed: {0}")]
    FallbackFailed(String),
}

/// Copy `text` to the system clipboard.
///
/// Tries the native clipboard first and falls back to the legacy command
/// path when that write is unavailable or rejected. Empty text is valid
/// input. Fails only when both tiers fail.
pub async fn copy_text(text: &str) -> Result<CopyMethod, CopyError> {
    #[cfg(feature = "csr")]
    {
        match native_copy(text).await {
            Ok(()) => Ok(CopyMethod::Native),
            Err(err) => {
                log::warn!("clipboard API failed, trying fallback: {err}");
                legacy_copy(text).map(|()| CopyMethod::Legacy)
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err(CopyError::ClipboardUnavailable(
            "no browser clipboard in this environment".to_owned(),
        ))
    }
}

#[cfg(feature = "csr")]
async fn native_copy(text: &str) -> Result<(), CopyError> {
    let window =
        web_sys::window().ok_or_else(|| CopyError::ClipboardUnavailable("no window".to_owned()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| CopyError::ClipboardUnavailable(describe(&err)))
}

#[cfg(feature = "csr")]
fn legacy_copy(text: &str) -> Result<(), CopyError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CopyError::FallbackFailed("no document".to_owned()))?;
    let body = document
        .body()
        .ok_or_else(|| CopyError::FallbackFailed("document has no body".to_owned()))?;

    let textarea: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|err| CopyError::FallbackFailed(describe(&err)))?
        .unchecked_into();
    textarea.set_value(text);
    // Selectable, but off screen and without scrolling the page.
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");

    body.append_child(&textarea)
        .map_err(|err| CopyError::FallbackFailed(describe(&err)))?;
    textarea.select();
    let command = document.exec_command("copy");
    // The helper element leaves the page on every exit path, before the
    // command result is inspected.
    let _ = body.remove_child(&textarea);

    match command {
        Ok(true) => Ok(()),
        Ok(false) => Err(CopyError::FallbackFailed("copy command rejected".to_owned())),
        Err(err) => Err(CopyError::FallbackFailed(describe(&err))),
    }
}

#[cfg(feature = "csr")]
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
