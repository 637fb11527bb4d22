//! # site-enhancements
//!
//! Leptos + WASM progressive enhancements for a static website.
//!
//! Two independent features ship in one module: a "copy code" button
//! mounted into every `<pre><code>` block on the page, and a dark mode
//! toggle whose preference persists in `localStorage`. The crate does not
//! render the page; it mounts small components into markup the static
//! site already serves.
//!
//! Host CSS hooks: `copy-code` (with `copy-code--success` and
//! `copy-code--error` modifiers), `theme-toggle`, and the `dark-mode`
//! class on the document root element.

pub mod components;
pub mod dom;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::copy_button::CopyButton;
#[cfg(feature = "csr")]
use crate::components::theme_toggle::ThemeToggle;

/// Mount all page enhancements.
///
/// Applies the stored dark mode preference first so the initial paint is
/// already themed, then attaches one copy button per code block and the
/// theme toggle into its `#dark-mode-toggle` slot. Runs once; blocks
/// inserted into the document after this call are not scanned.
#[cfg(feature = "csr")]
pub fn init() {
    util::dark_mode::apply(util::dark_mode::read_preference());

    let blocks = dom::code_blocks();
    let mounted = blocks.len();
    for block in blocks {
        block.prepare();
        let parent = block.mount_point();
        leptos::mount::mount_to(parent, move || view! { <CopyButton block=block/> }).forget();
    }

    if let Some(slot) = dom::theme_toggle_slot() {
        leptos::mount::mount_to(slot, || view! { <ThemeToggle/> }).forget();
    } else {
        log::debug!("page has no dark mode toggle slot");
    }

    log::info!("page enhancements ready: {mounted} code block(s)");
}

/// Module start hook. The host page loads the module deferred, so the
/// document is fully parsed by the time this runs.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    init();
}
