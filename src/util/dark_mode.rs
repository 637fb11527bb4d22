//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `dark-mode` class on the document root element. Toggle writes back to
//! `localStorage` and updates that class. Requires a browser environment;
//! native builds no-op so the rest of the crate stays testable.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "darkMode";
#[cfg(feature = "csr")]
const ENABLED: &str = "enabled";
#[cfg(feature = "csr")]
const DISABLED: &str = "disabled";
#[cfg(feature = "csr")]
const ROOT_CLASS: &str = "dark-mode";

/// Read the dark mode preference from localStorage.
///
/// Returns `true` only when the user previously enabled dark mode; a
/// missing or unreadable value means disabled.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == ENABLED;
            }
        }
        false
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Add or remove the `dark-mode` class on the document root element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(el) = root {
            let _ = if enabled {
                el.class_list().add_1(ROOT_CLASS)
            } else {
                el.class_list().remove_1(ROOT_CLASS)
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and synchronously persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { ENABLED } else { DISABLED });
            }
        }
    }
    next
}
