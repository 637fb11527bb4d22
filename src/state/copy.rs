//! Visual state machine for one copy button.
//!
//! DESIGN
//! ======
//! Every user-visible attribute of the button (glyph, label, class, ARIA
//! label) is a pure function of `CopyStatus`, so reverting the state
//! restores the whole presentation in one step.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

/// Delay before a success/error button returns to idle, in milliseconds.
pub const REVERT_DELAY_MS: u32 = 2_000;

/// Lifecycle of one copy attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyStatus {
    /// Waiting for a click.
    #[default]
    Idle,
    /// Clipboard write in flight.
    Copying,
    /// Text landed on the clipboard; transient confirmation shown.
    Success,
    /// Both copy tiers failed; transient failure notice shown.
    Error,
}

impl CopyStatus {
    /// Transition on click, given the block's resolved code text.
    ///
    /// A block without a code child (`None`) ignores the click; from any
    /// other situation a click starts a fresh attempt, including clicks
    /// landing while feedback from the previous attempt is still shown.
    pub fn on_click(self, text: Option<&str>) -> Self {
        if text.is_some() { Self::Copying } else { self }
    }

    /// Transition when a copy attempt settles.
    ///
    /// Applies regardless of the state it lands in: when attempts
    /// overlap, the last one to settle decides what is shown.
    pub fn on_outcome(self, copied: bool) -> Self {
        if copied { Self::Success } else { Self::Error }
    }

    /// Transition when the revert timer fires.
    pub fn on_revert(self) -> Self {
        Self::Idle
    }

    /// Whether this state schedules an auto-revert.
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    /// Icon glyph shown next to the label.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Idle | Self::Copying => "⧉",
            Self::Success => "✓",
            Self::Error => "✕",
        }
    }

    /// Button label text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle | Self::Copying => "Copy",
            Self::Success => "Copied!",
            Self::Error => "Failed",
        }
    }

    /// Full class string for the button element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle | Self::Copying => "copy-code",
            Self::Success => "copy-code copy-code--success",
            Self::Error => "copy-code copy-code--error",
        }
    }

    /// Accessible label mirroring the visual state.
    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Success => "Code copied to clipboard",
            Self::Idle | Self::Copying | Self::Error => "Copy code to clipboard",
        }
    }
}
