//! dialog-shell - Controlled modal dialogs for ratatui
//!
//! Dialogs never own their visibility: the caller passes an open flag every
//! frame and receives close requests through a [`DialogHandler`]. The
//! [`Dialog`] shell renders a header, a scrollable body and an optional
//! footer; [`AdvancedDialog`] adds animation, backdrop, placement and a
//! primary/secondary action footer.

pub mod config;
pub mod dialog;
pub mod error;
pub mod paths;

pub use config::{Config, DialogCommand, KeyBindings};
pub use dialog::{
    ActionButton, ActionSlot, Actions, AdvancedDialog, Animation, Backdrop, Dialog,
    DialogHandler, DialogLayout, DialogOptions, DialogState, DismissReason, EventStatus,
    FocusTarget, Position, Presentation, Size, SizeSpec,
};
pub use error::ConfigError;
