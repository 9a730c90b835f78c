//! Integration tests for the controlled dialog contract
//!
//! Every test drives dialogs the way a caller does: props rebuilt from the
//! caller's flag, events routed through `handle_event`, and a recording
//! `DialogHandler` standing in for the caller's state.

mod common;

use common::{AREA, Recorder, buffer_text, click, click_in, key, shift_key};
use dialog_shell::{
    ActionButton, ActionSlot, Actions, AdvancedDialog, Animation, Dialog, DialogCommand,
    DialogOptions, DialogState, DismissReason, EventStatus, FocusTarget, KeyBindings, Size,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::StatefulWidget;
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    CloseButton,
    OutsideClick,
    Escape,
}

fn shell(options: DialogOptions) -> Dialog<'static> {
    Dialog::new("Edit profile")
        .open(true)
        .body("Name, email and avatar fields")
        .options(options)
}

fn save_cancel() -> Actions {
    Actions::new()
        .primary(ActionButton::new("Save"))
        .secondary(ActionButton::new("Cancel"))
}

/// Dismissal happens iff the dialog is interactive and the gesture's gate is open.
#[rstest]
fn dismissal_respects_gates_and_blocking(
    #[values(false, true)] disabled: bool,
    #[values(false, true)] loading: bool,
    #[values(false, true)] gate: bool,
    #[values(Gesture::CloseButton, Gesture::OutsideClick, Gesture::Escape)] gesture: Gesture,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = DialogOptions {
        disabled,
        loading,
        show_close_button: gate || gesture != Gesture::CloseButton,
        close_on_outside_click: gate || gesture != Gesture::OutsideClick,
        close_on_escape: gate || gesture != Gesture::Escape,
        ..DialogOptions::default()
    };
    let dialog = shell(options);
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();

    // Where the close button would be, even when hidden.
    let close_rect = shell(DialogOptions {
        show_close_button: true,
        ..options
    })
    .layout(AREA, &state)
    .close_button
    .ok_or("default header should place a close button")?;

    let event = match gesture {
        Gesture::CloseButton => click_in(close_rect),
        Gesture::OutsideClick => click(0, 0),
        Gesture::Escape => key(KeyCode::Esc),
    };
    let status = dialog.handle_event(&event, AREA, &mut state, &mut recorder);

    let expected_reason = match gesture {
        Gesture::CloseButton => DismissReason::CloseButton,
        Gesture::OutsideClick => DismissReason::OutsideClick,
        Gesture::Escape => DismissReason::Escape,
    };
    if !disabled && !loading && gate {
        assert_eq!(recorder.set_open_calls, vec![false]);
        assert_eq!(recorder.closes, vec![expected_reason]);
        assert!(!recorder.open);
    } else {
        assert!(recorder.set_open_calls.is_empty());
        assert!(recorder.closes.is_empty());
        assert!(recorder.open);
    }
    // Swallowed dismissals never fall through to the page.
    assert_eq!(status, EventStatus::Consumed);
    Ok(())
}

#[test]
fn loading_primary_never_fires() -> Result<(), Box<dyn std::error::Error>> {
    let dialog = AdvancedDialog::new("Edit")
        .shell(|d| d.open(true))
        .animation(Animation::None)
        .actions(
            Actions::new()
                .primary(ActionButton::new("Save").loading(true))
                .secondary(ActionButton::new("Cancel")),
        );
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();
    let layout = dialog.layout(AREA, &state);

    let primary = layout.primary.ok_or("primary button should be laid out")?;
    let status = dialog.handle_event(&click_in(primary), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Consumed);
    assert!(recorder.actions.is_empty());

    // Keyboard cannot reach it either.
    for _ in 0..4 {
        assert_eq!(
            dialog.handle_event(&key(KeyCode::Tab), AREA, &mut state, &mut recorder),
            EventStatus::Consumed
        );
        assert_ne!(state.focus(), Some(FocusTarget::Action(ActionSlot::Primary)));
    }

    let secondary = layout.secondary.ok_or("secondary button should be laid out")?;
    assert_eq!(
        dialog.handle_event(&click_in(secondary), AREA, &mut state, &mut recorder),
        EventStatus::Consumed
    );
    assert_eq!(recorder.actions, vec![ActionSlot::Secondary]);
    Ok(())
}

#[rstest]
#[case::disabled_button(ActionButton::new("Save").disabled(true), DialogOptions::default())]
#[case::disabled_dialog(ActionButton::new("Save"), DialogOptions { disabled: true, ..DialogOptions::default() })]
fn blocked_actions_do_not_fire(
    #[case] primary: ActionButton,
    #[case] options: DialogOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let dialog = Dialog::new("Edit")
        .open(true)
        .options(options)
        .advanced()
        .animation(Animation::None)
        .actions(Actions::new().primary(primary));
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();

    let rect = dialog
        .layout(AREA, &state)
        .primary
        .ok_or("primary button should be laid out")?;
    let status = dialog.handle_event(&click_in(rect), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Consumed);
    assert!(recorder.actions.is_empty());
    Ok(())
}

#[test]
fn custom_footer_replaces_actions() {
    let dialog = AdvancedDialog::new("Edit")
        .shell(|d| d.open(true).footer("plain footer").show_footer(true))
        .animation(Animation::None)
        .actions(save_cancel())
        .custom_footer("Custom footer here");
    let mut state = DialogState::new();
    let mut buf = Buffer::empty(AREA);
    (&dialog).render(AREA, &mut buf, &mut state);

    let text = buffer_text(&buf);
    assert!(text.contains("Custom footer here"));
    assert!(!text.contains("[ Save ]"));
    assert!(!text.contains("[ Cancel ]"));
    assert!(!text.contains("plain footer"));
}

#[test]
fn opening_moves_focus_inside_and_reopening_reapplies_it() {
    let actions = save_cancel();
    let build = |open: bool| {
        AdvancedDialog::new("Edit")
            .shell(|d| d.open(open).body_focusables(2))
            .actions(actions.clone())
    };
    let mut state = DialogState::new();
    let mut buf = Buffer::empty(AREA);

    (&build(false)).render(AREA, &mut buf, &mut state);
    assert_eq!(state.focus(), None);

    (&build(true)).render(AREA, &mut buf, &mut state);
    assert_eq!(state.focus(), Some(FocusTarget::CloseButton));

    let mut recorder = Recorder::opened();
    assert_eq!(
        build(true).handle_event(&key(KeyCode::Tab), AREA, &mut state, &mut recorder),
        EventStatus::Consumed
    );
    assert_eq!(
        build(true).handle_event(&key(KeyCode::Tab), AREA, &mut state, &mut recorder),
        EventStatus::Consumed
    );
    assert_eq!(state.focus(), Some(FocusTarget::Body(1)));

    (&build(false)).render(AREA, &mut buf, &mut state);
    assert_eq!(state.focus(), None);

    (&build(true)).render(AREA, &mut buf, &mut state);
    assert_eq!(state.focus(), Some(FocusTarget::CloseButton));
}

#[test]
fn focus_cycles_in_document_order() {
    let dialog = AdvancedDialog::new("Edit")
        .shell(|d| d.open(true).body_focusables(1))
        .actions(save_cancel());
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();

    let mut seen = Vec::new();
    for _ in 0..5 {
        assert_eq!(
            dialog.handle_event(&key(KeyCode::Tab), AREA, &mut state, &mut recorder),
            EventStatus::Consumed
        );
        seen.push(state.focus());
    }
    assert_eq!(
        seen,
        vec![
            Some(FocusTarget::Body(0)),
            Some(FocusTarget::Action(ActionSlot::Secondary)),
            Some(FocusTarget::Action(ActionSlot::Primary)),
            Some(FocusTarget::CloseButton),
            Some(FocusTarget::Body(0)),
        ]
    );

    assert_eq!(
        dialog.handle_event(&shift_key(KeyCode::BackTab), AREA, &mut state, &mut recorder),
        EventStatus::Consumed
    );
    assert_eq!(state.focus(), Some(FocusTarget::CloseButton));
}

#[test]
fn outside_click_with_gate_closed_keeps_dialog_open() {
    let dialog = Dialog::new("Confirm")
        .open(true)
        .size(Size::Md)
        .show_close_button(true)
        .close_on_outside_click(false);
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();

    let status = dialog.handle_event(&click(0, 0), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Consumed);
    assert!(recorder.set_open_calls.is_empty());
    assert!(recorder.open);
}

#[rstest]
fn fullscreen_overrides_size(#[values(Size::Sm, Size::Md, Size::Lg, Size::Xl)] size: Size) {
    let dialog = Dialog::new("Report")
        .open(true)
        .size(size)
        .advanced()
        .fullscreen(true);
    let mut state = DialogState::new();
    assert_eq!(dialog.layout(AREA, &state).surface, AREA);

    let mut buf = Buffer::empty(AREA);
    (&dialog).render(AREA, &mut buf, &mut state);
    assert_eq!(buf[(0, 0)].symbol(), "┌");
    assert_eq!(buf[(AREA.width - 1, AREA.height - 1)].symbol(), "┘");
}

#[test]
fn loading_replaces_body_with_placeholder() {
    let dialog = Dialog::new("Edit")
        .open(true)
        .body("Secret body content")
        .body_focusables(2)
        .loading(true);
    let mut state = DialogState::new();
    let mut buf = Buffer::empty(AREA);
    (&dialog).render(AREA, &mut buf, &mut state);

    let text = buffer_text(&buf);
    assert!(text.contains("Loading..."));
    assert!(!text.contains("Secret body content"));
    assert_eq!(state.focus(), Some(FocusTarget::Surface));
}

#[test]
fn closed_dialog_renders_nothing_and_ignores_events() {
    let dialog = Dialog::new("Edit").body("hidden");
    let mut state = DialogState::new();
    let mut buf = Buffer::empty(AREA);
    (&dialog).render(AREA, &mut buf, &mut state);
    assert_eq!(buf, Buffer::empty(AREA));

    let mut recorder = Recorder::opened();
    for event in [key(KeyCode::Esc), click(0, 0), key(KeyCode::Tab)] {
        let status = dialog.handle_event(&event, AREA, &mut state, &mut recorder);
        assert_eq!(status, EventStatus::Ignored);
    }
    assert!(recorder.set_open_calls.is_empty());
}

#[test]
fn body_owns_keys_and_clicks_while_focused() {
    let dialog = Dialog::new("Edit")
        .open(true)
        .body("field one\nfield two")
        .body_focusables(2)
        .show_close_button(false);
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();

    // Opening focuses the first field.
    let status = dialog.handle_event(&key(KeyCode::Char('a')), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Ignored);
    assert_eq!(state.body_focus(), Some(0));

    let status = dialog.handle_event(&key(KeyCode::Enter), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Ignored);

    let body = dialog.layout(AREA, &state).body;
    let status = dialog.handle_event(&click_in(body), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Ignored);

    // Escape still dismisses.
    let status = dialog.handle_event(&key(KeyCode::Esc), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Consumed);
    assert_eq!(recorder.closes, vec![DismissReason::Escape]);
}

#[test]
fn key_release_is_ignored() {
    let dialog = Dialog::new("Edit").open(true);
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Esc,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));

    let status = dialog.handle_event(&release, AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Ignored);
    assert!(recorder.open);
}

#[test]
fn custom_keybindings_are_honoured() {
    let mut keys = KeyBindings::default();
    assert_eq!(keys.unbind("Esc"), Some(DialogCommand::Dismiss));
    keys.set("q", DialogCommand::Dismiss);
    let dialog = Dialog::new("Edit").open(true).keys(&keys);
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();

    let status = dialog.handle_event(&key(KeyCode::Esc), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Ignored);
    assert!(recorder.open);

    assert_eq!(
        dialog.handle_event(&key(KeyCode::Char('q')), AREA, &mut state, &mut recorder),
        EventStatus::Consumed
    );
    assert!(!recorder.open);
}

#[test]
fn long_body_scrolls_and_clamps() {
    let body = (0..60)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let dialog = Dialog::new("Log").open(true).body(body);
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();
    let mut buf = Buffer::empty(AREA);

    (&dialog).render(AREA, &mut buf, &mut state);
    assert!(buffer_text(&buf).contains("line 0"));

    assert_eq!(
        dialog.handle_event(&key(KeyCode::Down), AREA, &mut state, &mut recorder),
        EventStatus::Consumed
    );
    assert_eq!(state.scroll(), 1);

    for _ in 0..10 {
        assert_eq!(
            dialog.handle_event(&key(KeyCode::PageDown), AREA, &mut state, &mut recorder),
            EventStatus::Consumed
        );
    }
    let clamped = state.scroll();
    assert_eq!(
        dialog.handle_event(&key(KeyCode::Down), AREA, &mut state, &mut recorder),
        EventStatus::Consumed
    );
    assert_eq!(state.scroll(), clamped);

    (&dialog).render(AREA, &mut buf, &mut state);
    let text = buffer_text(&buf);
    assert!(text.contains("line 59"));
    assert!(!text.contains("line 0 "));

    for _ in 0..10 {
        assert_eq!(
            dialog.handle_event(&key(KeyCode::PageUp), AREA, &mut state, &mut recorder),
            EventStatus::Consumed
        );
    }
    assert_eq!(state.scroll(), 0);
}

/// Clicks land on what was drawn, even mid-animation.
#[rstest]
fn animated_action_click_hits_drawn_button(
    #[values(Animation::Slide, Animation::Zoom)] animation: Animation,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = (0..10).map(|i| format!("field {i}")).collect::<Vec<_>>().join("\n");
    let dialog = AdvancedDialog::new("New transaction")
        .shell(|d| d.open(true).body(body.clone()))
        .animation(animation)
        .actions(save_cancel());
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();
    let mut buf = Buffer::empty(AREA);
    // Stop on the last frame that is still in motion.
    for _ in 0..animation.frames() {
        buf.reset();
        (&dialog).render(AREA, &mut buf, &mut state);
    }

    let drawn = dialog.layout(AREA, &state);
    let settled = AdvancedDialog::new("New transaction")
        .shell(|d| d.open(true).body(body.clone()))
        .animation(Animation::None)
        .actions(save_cancel())
        .layout(AREA, &DialogState::new());
    assert_ne!(drawn.surface, settled.surface);

    let primary = drawn.primary.ok_or("primary button should be drawn")?;
    let label: String = (primary.left()..primary.right())
        .map(|x| buf[(x, primary.y)].symbol().to_string())
        .collect();
    assert_eq!(label, "[ Save ]");

    let status = dialog.handle_event(&click_in(primary), AREA, &mut state, &mut recorder);
    assert_eq!(status, EventStatus::Consumed);
    assert_eq!(recorder.actions, vec![ActionSlot::Primary]);
    assert!(recorder.open);
    assert!(recorder.closes.is_empty());
    Ok(())
}

#[test]
fn actions_without_room_are_not_reachable_by_keyboard() {
    let short = ratatui::layout::Rect::new(0, 0, 60, 4);
    let dialog = AdvancedDialog::new("Edit")
        .shell(|d| d.open(true).show_close_button(false))
        .animation(Animation::None)
        .actions(Actions::new().primary(ActionButton::new("Save")));
    let mut state = DialogState::new();
    let mut recorder = Recorder::opened();
    let mut buf = Buffer::empty(short);
    (&dialog).render(short, &mut buf, &mut state);

    let layout = dialog.layout(short, &state);
    assert_eq!(layout.footer, None);
    assert_eq!(layout.primary, None);
    assert_eq!(state.focus(), Some(FocusTarget::Surface));

    assert_eq!(
        dialog.handle_event(&key(KeyCode::Tab), short, &mut state, &mut recorder),
        EventStatus::Consumed
    );
    assert_eq!(
        dialog.handle_event(&key(KeyCode::Enter), short, &mut state, &mut recorder),
        EventStatus::Ignored
    );
    assert_ne!(state.focus(), Some(FocusTarget::Action(ActionSlot::Primary)));
    assert!(recorder.actions.is_empty());
    assert!(!buffer_text(&buf).contains("[ Save ]"));
}

proptest! {
    #[test]
    fn clicks_dismiss_only_through_open_gates(
        disabled in any::<bool>(),
        loading in any::<bool>(),
        show_close_button in any::<bool>(),
        close_on_outside_click in any::<bool>(),
        column in 0..AREA.width,
        row in 0..AREA.height,
    ) {
        let options = DialogOptions {
            disabled,
            loading,
            show_close_button,
            close_on_outside_click,
            ..DialogOptions::default()
        };
        let dialog = shell(options);
        let mut state = DialogState::new();
        let mut recorder = Recorder::opened();
        let layout = dialog.layout(AREA, &state);

        let status = dialog.handle_event(&click(column, row), AREA, &mut state, &mut recorder);

        let inside = |rect: ratatui::layout::Rect| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        };
        let interactive = !disabled && !loading;
        let outside = !inside(layout.surface);
        let on_close = layout.close_button.is_some_and(inside);
        let expect_close = interactive
            && ((outside && close_on_outside_click) || (on_close && show_close_button));

        prop_assert_eq!(!recorder.open, expect_close);
        prop_assert!(recorder.actions.is_empty());
        if outside || on_close {
            prop_assert_eq!(status, EventStatus::Consumed);
        }
    }
}
