//! Controlled modal dialogs.
//!
//! A dialog never owns its visibility. The caller passes its open flag in
//! every frame through [`Dialog::open`] and receives change requests through
//! a [`DialogHandler`]. Two states exist, closed and open, and the only
//! transition the dialog itself requests is open→closed.
//!
//! [`Dialog`] is the shell: header, scrollable body, optional footer.
//! [`AdvancedDialog`] adds presentation options and a primary/secondary
//! action footer on top of the same contract.

mod action;
mod advanced;
mod chrome;
mod colors;
mod input;
mod layout;
mod options;
mod render;
mod shell;
mod state;
mod wrap;

pub use action::{ActionButton, ActionSlot, Actions};
pub use advanced::AdvancedDialog;
pub use layout::DialogLayout;
pub use options::{Animation, Backdrop, DialogOptions, Position, Presentation, Size, SizeSpec};
pub use shell::Dialog;
pub use state::{DialogState, FocusTarget};

/// Gesture that asked the dialog to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// The header close button was clicked or activated.
    CloseButton,
    /// A click landed outside the surface.
    OutsideClick,
    /// The dismiss key (Escape by default) was pressed.
    Escape,
}

/// Whether the dialog handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EventStatus {
    /// The dialog used or deliberately swallowed the event. Callers must not
    /// forward it to the page underneath.
    Consumed,
    /// The event targets the caller's body content or nothing at all.
    Ignored,
}

impl EventStatus {
    /// Whether the event was consumed.
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Receiver for everything a dialog asks of its caller.
///
/// These callbacks are the only way effects leave a dialog.
pub trait DialogHandler {
    /// Request a new value for the caller-owned open flag.
    ///
    /// Dialogs only ever request `false`; opening is always the caller's
    /// decision.
    fn set_open(&mut self, open: bool);

    /// Called after [`set_open`](Self::set_open) when a dismissal gesture
    /// closes the dialog.
    fn on_close(&mut self, reason: DismissReason) {
        let _ = reason;
    }

    /// Called when an enabled footer action is clicked or activated.
    fn on_action(&mut self, slot: ActionSlot) {
        let _ = slot;
    }
}
