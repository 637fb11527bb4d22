//! Dark mode toggle control.

use leptos::prelude::*;

use crate::util::dark_mode;

/// Glyph button that flips the persisted dark mode preference.
///
/// Reads the stored preference at mount; each click applies the new mode
/// to the document and writes it back to storage before the signal
/// updates the glyph.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark = RwSignal::new(dark_mode::read_preference());

    let on_toggle = move |_| {
        let next = dark_mode::toggle(dark.get_untracked());
        dark.set(next);
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle title="Toggle dark mode">
            {move || if dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
