//! Copy-to-clipboard button for one code block.
//!
//! Owns the whole lifecycle of one button: click handling, the copy
//! attempt, transient success/error feedback, and the timed return to
//! idle. Buttons are independent; each owns its own revert timer.

use leptos::prelude::*;

use crate::dom::CodeBlock;
use crate::state::copy::CopyStatus;
#[cfg(feature = "csr")]
use crate::state::copy::REVERT_DELAY_MS;
#[cfg(feature = "csr")]
use crate::util::clipboard;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

/// Copy button mounted into a single `<pre>` block.
#[component]
pub fn CopyButton(block: CodeBlock) -> impl IntoView {
    let status = RwSignal::new(CopyStatus::default());

    // Pending auto-revert handle. Dropping a `Timeout` cancels it, so
    // replacing the slot's contents supersedes the previous timer.
    #[cfg(feature = "csr")]
    let revert: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let on_click = move |_| {
        // A block without a code child ignores the click.
        let text = block.code_text();
        let next = status.get_untracked().on_click(text.as_deref());
        if next == CopyStatus::Copying {
            #[cfg(feature = "csr")]
            {
                if let Some(text) = text {
                    // Every state-setting event replaces the pending revert.
                    revert.borrow_mut().take();
                    status.set(next);
                    let revert = Rc::clone(&revert);
                    leptos::task::spawn_local(async move {
                        let copied = match clipboard::copy_text(&text).await {
                            Ok(method) => {
                                log::debug!("code block copied ({method:?} tier)");
                                true
                            }
                            Err(err) => {
                                log::error!("failed to copy code block: {err}");
                                false
                            }
                        };
                        let settled = status.get_untracked().on_outcome(copied);
                        status.set(settled);
                        if settled.is_transient() {
                            let pending = Timeout::new(REVERT_DELAY_MS, move || {
                                status.set(status.get_untracked().on_revert());
                            });
                            *revert.borrow_mut() = Some(pending);
                        }
                    });
                }
            }
        }
    };

    view! {
        <button
            class=move || status.get().class()
            title="Copy code"
            aria-label=move || status.get().aria_label()
            on:click=on_click
        >
            <span class="copy-code__icon" aria-hidden="true">{move || status.get().icon()}</span>
            <span class="copy-code__label">{move || status.get().label()}</span>
        </button>
    }
}
