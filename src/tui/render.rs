//! Demo rendering: the transactions page with its dialogs on top

use dialog_shell::Size;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::App;
use super::colors;
use super::dialogs;
use super::page::Page;

/// Render the full demo UI
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, &app.page, chunks[0]);
    render_table(frame, &app.page, chunks[1]);
    render_status_bar(frame, &app.page, chunks[2]);

    // Closed dialogs draw nothing but still observe the open→closed edge.
    let keys = &app.config.keys;
    let defaults = app.config.dialog;
    let page = &mut app.page;

    let delete = dialogs::delete_transaction(keys, defaults, page);
    frame.render_stateful_widget(&delete, area, &mut page.delete_state);

    let new_tx = dialogs::new_transaction(keys, defaults, page);
    frame.render_stateful_widget(&new_tx, area, &mut page.new_state);
}

fn render_title(frame: &mut Frame<'_>, page: &Page, area: Rect) {
    let balance: i64 = page.transactions.iter().map(|tx| tx.amount_cents).sum();
    let sign = if balance < 0 { "-" } else { "" };
    let abs = balance.unsigned_abs();

    let line = Line::from(vec![
        Span::styled(
            " Transactions ",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} entries  balance {sign}{}.{:02}",
                page.transactions.len(),
                abs / 100,
                abs % 100
            ),
            Style::default().fg(colors::TEXT_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table(frame: &mut Frame<'_>, page: &Page, area: Rect) {
    let rows: Vec<Row<'_>> = page
        .transactions
        .iter()
        .map(|tx| {
            let amount_color = if tx.amount_cents < 0 {
                colors::ACCENT_NEGATIVE
            } else {
                colors::ACCENT_POSITIVE
            };
            Row::new(vec![
                Cell::from(tx.date.format("%b %d, %Y").to_string())
                    .style(Style::default().fg(colors::TEXT_DIM)),
                Cell::from(tx.description.as_str())
                    .style(Style::default().fg(colors::TEXT_PRIMARY)),
                Cell::from(Line::from(tx.amount_label()).right_aligned())
                    .style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Date", "Description", "Amount"])
            .style(Style::default().fg(colors::TEXT_MUTED)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    )
    .row_highlight_style(
        Style::default()
            .bg(colors::SURFACE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );

    let mut table_state = TableState::default().with_selected(Some(page.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_status_bar(frame: &mut Frame<'_>, page: &Page, area: Rect) {
    let size = if page.fullscreen {
        Size::Full
    } else {
        dialogs::NEW_TRANSACTION_SIZE
    };
    let mut spans = vec![Span::styled(
        format!(
            " [n] New  [d] Delete  [f] Fullscreen ({})  [j/k] Select  [q] Quit ",
            size.label()
        ),
        Style::default().fg(colors::TEXT_MUTED),
    )];
    if !page.status.is_empty() {
        spans.push(Span::styled(
            page.status.as_str(),
            Style::default().fg(colors::TEXT_PRIMARY),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
