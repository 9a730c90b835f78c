//! Dialog rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};

use super::action::{ActionButton, ActionSlot};
use super::chrome::{Chrome, FooterSlot, HeaderSlot};
use super::colors;
use super::layout::DialogLayout;
use super::state::{DialogState, FocusTarget};
use super::wrap;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DRAG_GRIP: &str = "⠿ ";
const RESIZE_HANDLE: &str = "◢";
const CLOSE_LABEL: &str = "[x]";

/// Render the dialog into `buf`, syncing `state` with the open flag first.
///
/// Nothing is drawn while the dialog is closed.
pub(crate) fn render(chrome: &Chrome<'_, '_>, area: Rect, buf: &mut Buffer, state: &mut DialogState) {
    let area = area.intersection(buf.area);
    let ring = chrome.focus_ring(area);
    state.sync(chrome.is_open, &ring);

    if !chrome.is_open || area.is_empty() {
        return;
    }

    state.begin_frame();
    let layout = chrome.layout(area, state);

    if let Some(style) = chrome.presentation.backdrop.style() {
        buf.set_style(area, style);
    }
    Clear.render(layout.surface, buf);

    render_frame(chrome, &layout, state, buf);
    render_body(chrome, &layout, state, buf);
    render_footer(chrome, &layout, state, buf);

    if let Some(close) = layout.close_button {
        buf.set_string(close.x, close.y, CLOSE_LABEL, close_style(chrome, state));
    }
    if let Some(handle) = layout.resize_handle {
        buf.set_string(
            handle.x,
            handle.y,
            RESIZE_HANDLE,
            Style::default().fg(colors::MODAL_BORDER),
        );
    }
    if layout.dimmed {
        buf.set_style(layout.surface, Style::default().add_modifier(Modifier::DIM));
    }
}

fn render_frame(
    chrome: &Chrome<'_, '_>,
    layout: &DialogLayout,
    state: &DialogState,
    buf: &mut Buffer,
) {
    let border = if chrome.options.disabled {
        colors::TEXT_MUTED
    } else if state.focus() == Some(FocusTarget::Surface) {
        colors::MODAL_BORDER_FOCUSED
    } else {
        colors::MODAL_BORDER
    };

    let title = match chrome.header {
        HeaderSlot::Custom(line) => line.clone(),
        HeaderSlot::Default { .. } => {
            let grip = if chrome.presentation.draggable {
                DRAG_GRIP
            } else {
                ""
            };
            Line::from(Span::styled(
                format!(" {grip}{} ", chrome.title),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors::MODAL_BG))
        .render(layout.surface, buf);
}

fn render_body(
    chrome: &Chrome<'_, '_>,
    layout: &DialogLayout,
    state: &mut DialogState,
    buf: &mut Buffer,
) {
    let body = layout.body;
    if body.is_empty() {
        state.set_max_scroll(0);
        return;
    }

    if chrome.options.loading {
        state.set_max_scroll(0);
        let spinner = SPINNER_FRAMES[usize::from(state.frame()) % SPINNER_FRAMES.len()];
        let placeholder = Line::from(vec![
            Span::styled(spinner, Style::default().fg(colors::SPINNER)),
            Span::styled(" Loading...", Style::default().fg(colors::TEXT_DIM)),
        ])
        .centered();
        let row = Rect {
            y: body.y + body.height / 2,
            height: 1,
            ..body
        };
        Paragraph::new(placeholder).render(row, buf);
        return;
    }

    let visible = usize::from(body.height);
    let mut lines = wrap::wrap_lines(chrome.body, body.width);
    let mut text_area = body;
    if lines.len() > visible && body.width > 1 {
        text_area.width = body.width - 1;
        lines = wrap::wrap_lines(chrome.body, text_area.width);
    }

    let total = lines.len();
    let max_scroll = u16::try_from(total.saturating_sub(visible)).unwrap_or(u16::MAX);
    state.set_max_scroll(max_scroll);

    Paragraph::new(lines)
        .style(chrome.body.style)
        .scroll((state.scroll(), 0))
        .render(text_area, buf);

    if max_scroll > 0 && text_area.width < body.width {
        let scrollbar_area = Rect {
            x: text_area.right(),
            width: 1,
            ..body
        };
        let mut scrollbar_state = ScrollbarState::new(usize::from(max_scroll).saturating_add(1))
            .position(usize::from(state.scroll()))
            .viewport_content_length(visible);
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some("░"))
            .track_style(Style::default().fg(colors::TEXT_MUTED))
            .thumb_style(Style::default().fg(colors::TEXT_PRIMARY))
            .render(scrollbar_area, buf, &mut scrollbar_state);
    }
}

fn render_footer(
    chrome: &Chrome<'_, '_>,
    layout: &DialogLayout,
    state: &DialogState,
    buf: &mut Buffer,
) {
    let (Some(row), Some(separator)) = (layout.footer, layout.footer_separator()) else {
        return;
    };

    let rule = Rect {
        x: separator.x.saturating_sub(1),
        width: separator.width.saturating_add(2),
        ..separator
    };
    let mut line = String::with_capacity(usize::from(rule.width) * 3);
    line.push('├');
    for _ in 0..separator.width {
        line.push('─');
    }
    line.push('┤');
    buf.set_string(rule.x, rule.y, line, Style::default().fg(colors::MODAL_BORDER));

    match chrome.footer {
        FooterSlot::Custom(content) | FooterSlot::Plain(content) => {
            Paragraph::new(content.clone()).render(row, buf);
        }
        FooterSlot::Actions(actions) => {
            for (slot, button) in actions.iter() {
                let rect = match slot {
                    ActionSlot::Primary => layout.primary,
                    ActionSlot::Secondary => layout.secondary,
                };
                if let Some(rect) = rect {
                    let style = button_style(chrome, state, slot, button);
                    buf.set_string(rect.x, rect.y, button_label(button, state), style);
                }
            }
        }
        FooterSlot::None => {}
    }
}

fn button_label(button: &ActionButton, state: &DialogState) -> String {
    if button.loading {
        let spinner = SPINNER_FRAMES[usize::from(state.frame()) % SPINNER_FRAMES.len()];
        format!("[ {spinner} {} ]", button.label)
    } else {
        format!("[ {} ]", button.label)
    }
}

fn button_style(
    chrome: &Chrome<'_, '_>,
    state: &DialogState,
    slot: ActionSlot,
    button: &ActionButton,
) -> Style {
    if chrome.options.blocks_interaction() || button.disabled {
        return Style::default().fg(colors::TEXT_MUTED);
    }

    let base = match slot {
        ActionSlot::Primary => Style::default()
            .fg(colors::BUTTON_PRIMARY)
            .add_modifier(Modifier::BOLD),
        ActionSlot::Secondary => Style::default().fg(colors::BUTTON_SECONDARY),
    };

    if state.focus() == Some(FocusTarget::Action(slot)) {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn close_style(chrome: &Chrome<'_, '_>, state: &DialogState) -> Style {
    if chrome.options.blocks_interaction() {
        return Style::default().fg(colors::TEXT_MUTED);
    }

    let base = Style::default()
        .fg(colors::BUTTON_CLOSE)
        .add_modifier(Modifier::BOLD);
    if state.focus() == Some(FocusTarget::CloseButton) {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

