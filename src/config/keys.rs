//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Commands a dialog responds to from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogCommand {
    /// Dismiss the dialog (subject to `close_on_escape`)
    Dismiss,
    /// Move focus to the next focusable element
    FocusNext,
    /// Move focus to the previous focusable element
    FocusPrev,
    /// Activate the focused button
    Activate,
    /// Scroll the body up one row
    ScrollUp,
    /// Scroll the body down one row
    ScrollDown,
    /// Scroll the body up one page
    PageUp,
    /// Scroll the body down one page
    PageDown,
}

impl DialogCommand {
    /// All commands, in help display order
    pub const ALL: &'static [Self] = &[
        Self::Dismiss,
        Self::FocusNext,
        Self::FocusPrev,
        Self::Activate,
        Self::ScrollUp,
        Self::ScrollDown,
        Self::PageUp,
        Self::PageDown,
    ];

    /// Get the display description for this command
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dismiss => "Close dialog",
            Self::FocusNext => "Next field",
            Self::FocusPrev => "Previous field",
            Self::Activate => "Press button",
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::PageUp => "Page up",
            Self::PageDown => "Page down",
        }
    }
}

static DEFAULT_BINDINGS: LazyLock<KeyBindings> = LazyLock::new(KeyBindings::default);

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to commands (for serialization)
    bindings: HashMap<String, DialogCommand>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Esc".to_string(), DialogCommand::Dismiss);
        bindings.insert("Tab".to_string(), DialogCommand::FocusNext);
        bindings.insert("BackTab".to_string(), DialogCommand::FocusPrev);
        bindings.insert("Shift+BackTab".to_string(), DialogCommand::FocusPrev);
        bindings.insert("Enter".to_string(), DialogCommand::Activate);
        bindings.insert(" ".to_string(), DialogCommand::Activate);
        bindings.insert("Up".to_string(), DialogCommand::ScrollUp);
        bindings.insert("Down".to_string(), DialogCommand::ScrollDown);
        bindings.insert("PageUp".to_string(), DialogCommand::PageUp);
        bindings.insert("PageDown".to_string(), DialogCommand::PageDown);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Bindings shared by every dialog that was not given its own
    #[must_use]
    pub fn shared_default() -> &'static Self {
        &DEFAULT_BINDINGS
    }

    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, command) in defaults.bindings {
            self.bindings.entry(key).or_insert(command);
        }
    }

    /// Get the command for a key event
    #[must_use]
    pub fn command_for(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<DialogCommand> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, command: DialogCommand) {
        self.bindings.insert(key.to_string(), command);
    }

    /// Remove a keybinding, returning the command it was bound to
    pub fn unbind(&mut self, key: &str) -> Option<DialogCommand> {
        self.bindings.remove(key)
    }

    /// Get all bindings for a command
    #[must_use]
    pub fn keys_for_command(&self, command: DialogCommand) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == command { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for a command for display (e.g., "Enter/Space")
    #[must_use]
    pub fn format_keys(&self, command: DialogCommand) -> String {
        let mut keys = self.keys_for_command(command);
        // Prefer single chars over multi-char keys, then alphabetical
        keys.sort_by(|a, b| {
            let a_simple = a.len() == 1;
            let b_simple = b.len() == 1;
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.cmp(b),
            }
        });
        keys.iter()
            .map(|k| {
                if k == " " {
                    "Space".to_string()
                } else {
                    k.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Generate hint text for a dialog footer
    #[must_use]
    pub fn hints(&self, commands: &[DialogCommand]) -> String {
        commands
            .iter()
            .filter_map(|&command| {
                let keys = self.format_keys(command);
                (!keys.is_empty()).then(|| format!("[{keys}] {}", command.description()))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
