//! Common test utilities shared across integration tests

use dialog_shell::{ActionSlot, DialogHandler, DismissReason};
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Frame used by most tests.
pub const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 40,
};

/// Caller-side handler that owns the open flag and records every callback.
#[derive(Debug)]
pub struct Recorder {
    pub open: bool,
    pub set_open_calls: Vec<bool>,
    pub closes: Vec<DismissReason>,
    pub actions: Vec<ActionSlot>,
}

impl Recorder {
    pub const fn opened() -> Self {
        Self {
            open: true,
            set_open_calls: Vec::new(),
            closes: Vec::new(),
            actions: Vec::new(),
        }
    }
}

impl DialogHandler for Recorder {
    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.set_open_calls.push(open);
    }

    fn on_close(&mut self, reason: DismissReason) {
        self.closes.push(reason);
    }

    fn on_action(&mut self, slot: ActionSlot) {
        self.actions.push(slot);
    }
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn shift_key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::SHIFT))
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn click_in(rect: Rect) -> Event {
    click(rect.x, rect.y)
}

/// Buffer contents as one string per row, joined with newlines.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
