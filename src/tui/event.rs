//! Terminal event polling for the demo

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent};
use std::time::Duration;

/// Demo loop events
#[derive(Debug, Clone)]
pub enum Event {
    /// No input arrived within the tick rate
    Tick,
    /// Keyboard or mouse input, forwarded as-is to dialogs
    Input(CrosstermEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Polls for terminal events with a fixed tick rate
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    tick_rate: Duration,
}

impl Handler {
    /// Create a new event handler with the given tick rate
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                input @ (CrosstermEvent::Key(_) | CrosstermEvent::Mouse(_)) => {
                    Ok(Event::Input(input))
                }
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }

    /// Get the tick rate
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(50)
    }
}
