//! Leptos components mounted into the host page.
//!
//! DESIGN
//! ======
//! One component per enhancement. Components receive handles to existing
//! markup instead of querying the document themselves.

pub mod copy_button;
pub mod theme_toggle;
