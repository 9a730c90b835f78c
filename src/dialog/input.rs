//! Dialog event handling: dismissal gestures, action clicks, focus and scroll.

use ratatui::crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

use super::action::ActionSlot;
use super::chrome::Chrome;
use super::layout::{DialogLayout, rect_contains};
use super::state::{DialogState, FocusTarget};
use super::{DialogHandler, DismissReason, EventStatus};
use crate::config::DialogCommand;

/// Route `event` through the dialog.
///
/// Closed dialogs ignore every event.
pub(crate) fn handle_event(
    chrome: &Chrome<'_, '_>,
    event: &Event,
    area: Rect,
    state: &mut DialogState,
    handler: &mut impl DialogHandler,
) -> EventStatus {
    let ring = chrome.focus_ring(area);
    state.sync(chrome.is_open, &ring);
    if !chrome.is_open {
        return EventStatus::Ignored;
    }

    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key(chrome, key, area, state, &ring, handler)
        }
        Event::Mouse(mouse) => {
            let layout = chrome.layout(area, state);
            handle_mouse(chrome, mouse, &layout, state, handler)
        }
        _ => EventStatus::Ignored,
    }
}

fn handle_key(
    chrome: &Chrome<'_, '_>,
    key: &KeyEvent,
    area: Rect,
    state: &mut DialogState,
    ring: &[FocusTarget],
    handler: &mut impl DialogHandler,
) -> EventStatus {
    let Some(command) = chrome.keys.command_for(key.code, key.modifiers) else {
        return EventStatus::Ignored;
    };

    match command {
        DialogCommand::Dismiss => dismiss(chrome, DismissReason::Escape, handler),
        DialogCommand::FocusNext => {
            state.focus_next(ring);
            EventStatus::Consumed
        }
        DialogCommand::FocusPrev => {
            state.focus_prev(ring);
            EventStatus::Consumed
        }
        // Everything else belongs to the focused body element.
        _ if state.body_focus().is_some() => EventStatus::Ignored,
        DialogCommand::Activate => match state.focus() {
            Some(FocusTarget::CloseButton) => dismiss(chrome, DismissReason::CloseButton, handler),
            Some(FocusTarget::Action(slot)) => click(chrome, slot, handler),
            _ => EventStatus::Ignored,
        },
        DialogCommand::ScrollUp => scroll(state, -1),
        DialogCommand::ScrollDown => scroll(state, 1),
        DialogCommand::PageUp => scroll(state, -page_height(chrome, area, state)),
        DialogCommand::PageDown => scroll(state, page_height(chrome, area, state)),
    }
}

fn handle_mouse(
    chrome: &Chrome<'_, '_>,
    mouse: &MouseEvent,
    layout: &DialogLayout,
    state: &mut DialogState,
    handler: &mut impl DialogHandler,
) -> EventStatus {
    let (x, y) = (mouse.column, mouse.row);
    let inside = rect_contains(layout.surface, x, y);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !inside {
                return dismiss(chrome, DismissReason::OutsideClick, handler);
            }
            if let Some(close) = layout.close_button
                && rect_contains(close, x, y)
            {
                return dismiss(chrome, DismissReason::CloseButton, handler);
            }
            for slot in [ActionSlot::Primary, ActionSlot::Secondary] {
                if let Some(rect) = layout.action(slot)
                    && rect_contains(rect, x, y)
                {
                    return click(chrome, slot, handler);
                }
            }
            if rect_contains(layout.body, x, y) {
                return EventStatus::Ignored;
            }
            EventStatus::Consumed
        }
        MouseEventKind::ScrollUp if rect_contains(layout.body, x, y) => scroll(state, -1),
        MouseEventKind::ScrollDown if rect_contains(layout.body, x, y) => scroll(state, 1),
        _ if inside => EventStatus::Consumed,
        _ => EventStatus::Ignored,
    }
}

/// Attempt a dismissal. Gated dismissals are swallowed, never forwarded.
fn dismiss(
    chrome: &Chrome<'_, '_>,
    reason: DismissReason,
    handler: &mut impl DialogHandler,
) -> EventStatus {
    if chrome.allows_dismiss(reason) {
        debug!(?reason, title = chrome.title, "Dialog dismissed");
        handler.set_open(false);
        handler.on_close(reason);
    } else {
        debug!(
            ?reason,
            title = chrome.title,
            loading = chrome.options.loading,
            disabled = chrome.options.disabled,
            "Dialog dismissal suppressed"
        );
    }
    EventStatus::Consumed
}

/// Attempt an action click; only enabled buttons in an interactive dialog fire.
fn click(
    chrome: &Chrome<'_, '_>,
    slot: ActionSlot,
    handler: &mut impl DialogHandler,
) -> EventStatus {
    let Some(button) = chrome.action(slot) else {
        return EventStatus::Ignored;
    };

    if chrome.options.blocks_interaction() || !button.is_enabled() {
        debug!(
            ?slot,
            label = %button.label,
            button_loading = button.loading,
            button_disabled = button.disabled,
            "Dialog action suppressed"
        );
        return EventStatus::Consumed;
    }

    debug!(?slot, label = %button.label, "Dialog action clicked");
    handler.on_action(slot);
    EventStatus::Consumed
}

fn scroll(state: &mut DialogState, delta: i32) -> EventStatus {
    state.scroll_by(delta);
    EventStatus::Consumed
}

fn page_height(chrome: &Chrome<'_, '_>, area: Rect, state: &DialogState) -> i32 {
    let body = chrome.layout(area, state).body;
    i32::from(body.height.saturating_sub(1).max(1))
}
