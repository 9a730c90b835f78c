//! Footer action descriptors for the advanced dialog.

/// Which footer button an action occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSlot {
    /// Confirming action, rendered rightmost.
    Primary,
    /// Cancelling or auxiliary action, rendered left of the primary.
    Secondary,
}

impl ActionSlot {
    /// Slots in left-to-right display order.
    pub const DISPLAY_ORDER: [Self; 2] = [Self::Secondary, Self::Primary];
}

/// A footer button: label plus independent `disabled`/`loading` flags.
///
/// The click handler is the caller's [`DialogHandler::on_action`](super::DialogHandler::on_action),
/// keyed by [`ActionSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    /// Button text.
    pub label: String,
    /// The button is shown but cannot be clicked or focused.
    pub disabled: bool,
    /// The button shows a spinner and cannot be clicked or focused.
    pub loading: bool,
}

impl ActionButton {
    /// Create an enabled button.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            loading: false,
        }
    }

    /// Set the `disabled` flag.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the `loading` flag.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Whether a click on this button may reach the handler.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Rendered width in columns: `[ label ]`, plus the spinner while loading.
    #[must_use]
    pub fn width(&self) -> u16 {
        let label = u16::try_from(self.label.chars().count()).unwrap_or(u16::MAX);
        let spinner = if self.loading { 2 } else { 0 };
        label.saturating_add(4).saturating_add(spinner)
    }
}

/// The optional primary/secondary action pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actions {
    /// Confirming action.
    pub primary: Option<ActionButton>,
    /// Cancelling or auxiliary action.
    pub secondary: Option<ActionButton>,
}

impl Actions {
    /// Create an empty descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primary: None,
            secondary: None,
        }
    }

    /// Set the primary action.
    #[must_use]
    pub fn primary(mut self, button: ActionButton) -> Self {
        self.primary = Some(button);
        self
    }

    /// Set the secondary action.
    #[must_use]
    pub fn secondary(mut self, button: ActionButton) -> Self {
        self.secondary = Some(button);
        self
    }

    /// Button occupying `slot`, if any.
    #[must_use]
    pub const fn get(&self, slot: ActionSlot) -> Option<&ActionButton> {
        match slot {
            ActionSlot::Primary => self.primary.as_ref(),
            ActionSlot::Secondary => self.secondary.as_ref(),
        }
    }

    /// Whether neither slot holds a button.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Present buttons in left-to-right display order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionSlot, &ActionButton)> {
        ActionSlot::DISPLAY_ORDER
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|button| (slot, button)))
    }
}
