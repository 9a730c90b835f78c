//! Resolved view of a dialog's props.
//!
//! Both the shell and the advanced variant lower themselves into a
//! [`Chrome`], which is what rendering and event handling operate on.
//! Header and footer composition is resolved here, once, as an ordered
//! first-match-wins chain.

use ratatui::layout::Rect;
use ratatui::text::{Line, Text};

use super::DismissReason;
use super::action::{ActionButton, ActionSlot, Actions};
use super::layout::{self, DialogLayout, FooterShape, Geometry};
use super::options::{DialogOptions, Presentation};
use super::state::{DialogState, FocusTarget};
use super::wrap;
use crate::config::KeyBindings;

/// Which header renders.
#[derive(Debug, Clone, Copy)]
pub(crate) enum HeaderSlot<'d, 'a> {
    /// Caller-supplied header line; replaces title and close button.
    Custom(&'d Line<'a>),
    /// Title, plus the close button when enabled.
    Default { close_button: bool },
}

/// Which footer renders.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FooterSlot<'d, 'a> {
    Custom(&'d Line<'a>),
    Actions(&'d Actions),
    Plain(&'d Line<'a>),
    None,
}

/// Header precedence: custom header, then the default header.
pub(crate) const fn resolve_header<'d, 'a>(
    custom: Option<&'d Line<'a>>,
    show_close_button: bool,
) -> HeaderSlot<'d, 'a> {
    match custom {
        Some(line) => HeaderSlot::Custom(line),
        None => HeaderSlot::Default {
            close_button: show_close_button,
        },
    }
}

/// Footer precedence: custom footer, then non-empty actions, then the plain
/// footer when `show_footer` is set.
pub(crate) fn resolve_footer<'d, 'a>(
    custom: Option<&'d Line<'a>>,
    actions: Option<&'d Actions>,
    plain: Option<&'d Line<'a>>,
    show_footer: bool,
) -> FooterSlot<'d, 'a> {
    if let Some(line) = custom {
        return FooterSlot::Custom(line);
    }
    if let Some(actions) = actions.filter(|actions| !actions.is_empty()) {
        return FooterSlot::Actions(actions);
    }
    if show_footer && let Some(line) = plain {
        return FooterSlot::Plain(line);
    }
    FooterSlot::None
}

/// Fully resolved props for one frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chrome<'d, 'a> {
    pub title: &'d str,
    pub is_open: bool,
    pub options: DialogOptions,
    pub presentation: Presentation,
    pub header: HeaderSlot<'d, 'a>,
    pub footer: FooterSlot<'d, 'a>,
    pub body: &'d Text<'a>,
    pub body_focusables: usize,
    pub keys: &'d KeyBindings,
}

impl Chrome<'_, '_> {
    /// Whether the close button is part of the rendered header.
    pub const fn has_close_button(&self) -> bool {
        matches!(self.header, HeaderSlot::Default { close_button: true })
    }

    /// Action button in `slot`, only if the actions footer won the footer slot.
    pub const fn action(&self, slot: ActionSlot) -> Option<&ActionButton> {
        match self.footer {
            FooterSlot::Actions(actions) => actions.get(slot),
            _ => None,
        }
    }

    /// Whether a dismissal gesture may close the dialog.
    pub const fn allows_dismiss(&self, reason: DismissReason) -> bool {
        if self.options.blocks_interaction() {
            return false;
        }
        match reason {
            DismissReason::CloseButton => self.has_close_button(),
            DismissReason::OutsideClick => self.options.close_on_outside_click,
            DismissReason::Escape => self.options.close_on_escape,
        }
    }

    /// Focusable elements in document order: header, body, footer.
    ///
    /// Header and footer controls count only when the settled layout for
    /// `area` has room to draw them.
    pub fn focus_ring(&self, area: Rect) -> Vec<FocusTarget> {
        let blocked = self.options.blocks_interaction();
        let settled = self.layout_at(area, u16::MAX);
        let mut ring = Vec::new();

        if !blocked && self.has_close_button() && settled.close_button.is_some() {
            ring.push(FocusTarget::CloseButton);
        }
        if !self.options.loading {
            ring.extend((0..self.body_focusables).map(FocusTarget::Body));
        }
        if !blocked && let FooterSlot::Actions(actions) = self.footer {
            ring.extend(
                actions
                    .iter()
                    .filter(|(slot, button)| {
                        button.is_enabled() && settled.action(*slot).is_some()
                    })
                    .map(|(slot, _)| FocusTarget::Action(slot)),
            );
        }

        ring
    }

    pub fn geometry(&self) -> Geometry {
        let footer = match self.footer {
            FooterSlot::None => FooterShape::None,
            FooterSlot::Custom(_) | FooterSlot::Plain(_) => FooterShape::Line,
            FooterSlot::Actions(actions) => FooterShape::Buttons {
                primary: actions.primary.as_ref().map(ActionButton::width),
                secondary: actions.secondary.as_ref().map(ActionButton::width),
            },
        };

        Geometry {
            size: self.presentation.resolve_size(self.options.size),
            position: self.presentation.position,
            animation: self.presentation.animation,
            close_button: self.has_close_button(),
            footer,
            resize_handle: self.presentation.resizable,
        }
    }

    pub fn layout(&self, area: Rect, state: &DialogState) -> DialogLayout {
        self.layout_at(area, state.frame())
    }

    fn layout_at(&self, area: Rect, frame: u16) -> DialogLayout {
        let loading = self.options.loading;
        layout::compute(area, &self.geometry(), frame, |width| {
            if loading {
                1
            } else {
                wrap::wrapped_height(self.body, width)
            }
        })
    }
}
