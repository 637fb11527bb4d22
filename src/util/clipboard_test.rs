#![cfg(not(feature = "csr"))]

use futures::executor::block_on;

use super::*;

#[test]
fn copy_text_reports_clipboard_unavailable_without_a_browser() {
    let outcome = block_on(copy_text("let x = 1;"));
    assert!(matches!(outcome, Err(CopyError::ClipboardUnavailable(_))));
}

#[test]
fn copying_empty_text_is_not_rejected_as_input() {
    // Only the missing platform clipboard fails the native attempt; the
    // empty string itself is valid copy input.
    let outcome = block_on(copy_text(""));
    assert!(matches!(outcome, Err(CopyError::ClipboardUnavailable(_))));
}

#[test]
fn error_display_names_the_failing_tier() {
    let primary = CopyError::ClipboardUnavailable("denied".to_owned());
    assert_eq!(primary.to_string(), "clipboard API unavailable: denied");

    let fallback = CopyError::FallbackFailed("copy command rejected".to_owned());
    assert_eq!(fallback.to_string(), "fallback copy failed: copy command rejected");
}

#[test]
fn copy_methods_are_distinct() {
    assert_ne!(CopyMethod::Native, CopyMethod::Legacy);
}
