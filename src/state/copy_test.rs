use super::*;

// =============================================================
// Transitions
// =============================================================

#[test]
fn default_state_is_idle() {
    assert_eq!(CopyStatus::default(), CopyStatus::Idle);
}

#[test]
fn click_with_text_starts_copying() {
    assert_eq!(CopyStatus::Idle.on_click(Some("fn main() {}")), CopyStatus::Copying);
}

#[test]
fn click_with_empty_text_still_starts_copying() {
    assert_eq!(CopyStatus::Idle.on_click(Some("")), CopyStatus::Copying);
}

#[test]
fn click_without_code_child_is_ignored_from_every_state() {
    for state in [CopyStatus::Idle, CopyStatus::Copying, CopyStatus::Success, CopyStatus::Error] {
        assert_eq!(state.on_click(None), state);
    }
}

#[test]
fn outcome_maps_to_success_or_error() {
    assert_eq!(CopyStatus::Copying.on_outcome(true), CopyStatus::Success);
    assert_eq!(CopyStatus::Copying.on_outcome(false), CopyStatus::Error);
}

#[test]
fn late_outcome_wins_over_displayed_feedback() {
    assert_eq!(CopyStatus::Success.on_outcome(false), CopyStatus::Error);
    assert_eq!(CopyStatus::Error.on_outcome(true), CopyStatus::Success);
}

#[test]
fn feedback_states_revert_to_idle() {
    assert_eq!(CopyStatus::Success.on_revert(), CopyStatus::Idle);
    assert_eq!(CopyStatus::Error.on_revert(), CopyStatus::Idle);
}

#[test]
fn re_entrant_click_from_feedback_restarts_the_attempt() {
    assert_eq!(CopyStatus::Success.on_click(Some("text")), CopyStatus::Copying);
    assert_eq!(CopyStatus::Error.on_click(Some("text")), CopyStatus::Copying);
}

#[test]
fn only_feedback_states_are_transient() {
    assert!(CopyStatus::Success.is_transient());
    assert!(CopyStatus::Error.is_transient());
    assert!(!CopyStatus::Idle.is_transient());
    assert!(!CopyStatus::Copying.is_transient());
}

#[test]
fn revert_delay_is_two_seconds() {
    assert_eq!(REVERT_DELAY_MS, 2_000);
}

// =============================================================
// Presentation
// =============================================================

#[test]
fn idle_and_copying_share_the_idle_presentation() {
    for state in [CopyStatus::Idle, CopyStatus::Copying] {
        assert_eq!(state.label(), "Copy");
        assert_eq!(state.icon(), "⧉");
        assert_eq!(state.class(), "copy-code");
        assert_eq!(state.aria_label(), "Copy code to clipboard");
    }
}

#[test]
fn success_presentation_confirms_the_copy() {
    let state = CopyStatus::Success;
    assert_eq!(state.label(), "Copied!");
    assert_eq!(state.icon(), "✓");
    assert_eq!(state.class(), "copy-code copy-code--success");
    assert_eq!(state.aria_label(), "Code copied to clipboard");
}

#[test]
fn error_presentation_reports_the_failure() {
    let state = CopyStatus::Error;
    assert_eq!(state.label(), "Failed");
    assert_eq!(state.icon(), "✕");
    assert_eq!(state.class(), "copy-code copy-code--error");
    assert_eq!(state.aria_label(), "Copy code to clipboard");
}

#[test]
fn reverting_restores_the_idle_presentation() {
    let reverted = CopyStatus::Error.on_revert();
    assert_eq!(reverted.label(), CopyStatus::Idle.label());
    assert_eq!(reverted.icon(), CopyStatus::Idle.icon());
    assert_eq!(reverted.class(), CopyStatus::Idle.class());
    assert_eq!(reverted.aria_label(), CopyStatus::Idle.aria_label());
}
