//! Dialog props for the transactions page
//!
//! Both builders are called every frame, for rendering and for event routing,
//! so the two always see identical props.

use dialog_shell::config::DialogDefaults;
use dialog_shell::{
    ActionButton, Actions, AdvancedDialog, Animation, Dialog, DialogCommand, KeyBindings, Size,
};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::colors;
use super::page::{FIELD_LABELS, Page};

/// Size of the "New transaction" dialog while not fullscreen.
pub const NEW_TRANSACTION_SIZE: Size = Size::Md;

/// "New transaction": slide-in form with Save/Cancel actions.
pub fn new_transaction<'k>(
    keys: &'k KeyBindings,
    defaults: DialogDefaults,
    page: &Page,
) -> AdvancedDialog<'k> {
    let flow = &page.new_tx;
    let saving = flow.is_saving();
    let focused = page.new_state.body_focus();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Date         ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                page.today.format("%Y-%m-%d").to_string(),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
        ]),
        Line::from(""),
    ];
    for (index, label) in FIELD_LABELS.iter().enumerate() {
        lines.push(field_line(
            label,
            &flow.form.fields[index],
            focused == Some(index),
        ));
    }
    lines.push(Line::from(""));
    match &flow.error {
        Some(error) => lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors::ACCENT_NEGATIVE),
        ))),
        None => lines.push(Line::from(Span::styled(
            keys.hints(&[DialogCommand::FocusNext, DialogCommand::Dismiss]),
            Style::default().fg(colors::TEXT_MUTED),
        ))),
    }

    let actions = Actions::new()
        .primary(ActionButton::new("Save").loading(saving))
        .secondary(ActionButton::new("Cancel").disabled(saving));

    Dialog::new("New transaction")
        .options(defaults.options)
        .open(flow.open)
        .size(NEW_TRANSACTION_SIZE)
        .body(Text::from(lines))
        .body_focusables(FIELD_LABELS.len())
        .loading(saving)
        .keys(keys)
        .advanced()
        .presentation(defaults.presentation)
        .animation(Animation::Slide)
        .fullscreen(page.fullscreen)
        .actions(actions)
}

/// "Delete transaction": confirmation that cannot be dismissed by clicking
/// outside, answered with `y`/`n` from the footer.
pub fn delete_transaction<'k>(
    keys: &'k KeyBindings,
    defaults: DialogDefaults,
    page: &Page,
) -> Dialog<'k> {
    let body = page.selected_transaction().map_or_else(
        || Text::from("No transaction selected."),
        |tx| {
            Text::from(vec![
                Line::from(vec![
                    Span::raw("Delete "),
                    Span::styled(
                        format!("\"{}\"", tx.description),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" ({}) from {}?", tx.amount_label(), tx.date)),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "This cannot be undone.",
                    Style::default().fg(colors::TEXT_DIM),
                )),
            ])
        },
    );

    let footer = Line::from(vec![
        Span::styled(
            "[y]",
            Style::default()
                .fg(colors::ACCENT_NEGATIVE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Delete  "),
        Span::styled(
            "[n]",
            Style::default()
                .fg(colors::ACCENT_POSITIVE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Keep  "),
        Span::styled(
            keys.hints(&[DialogCommand::Dismiss]),
            Style::default().fg(colors::TEXT_MUTED),
        ),
    ]);

    Dialog::new("Delete transaction")
        .options(defaults.options)
        .open(page.delete.open)
        .size(Size::Sm)
        .body(body)
        .close_on_outside_click(false)
        .footer(footer)
        .show_footer(true)
        .keys(keys)
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let (marker, style) = if focused {
        (
            "▸ ",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::REVERSED),
        )
    } else {
        ("  ", Style::default().fg(colors::TEXT_PRIMARY))
    };
    let cursor = if focused { "_" } else { " " };

    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{label:<11}"), Style::default().fg(colors::TEXT_DIM)),
        Span::styled(format!("[ {value}{cursor} ]"), style),
    ])
}
