//! Component-local dialog state: focus, scroll and the open animation.
//!
//! Visibility is never stored here as a source of truth. The state only
//! remembers the last open flag it observed so it can detect the
//! closed→open edge and move focus into the dialog.

use tracing::debug;

use super::action::ActionSlot;

/// Something inside the dialog that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The surface itself; used when nothing else is focusable.
    Surface,
    /// The header close button.
    CloseButton,
    /// The n-th interactive element of the caller's body content.
    Body(usize),
    /// A footer action button.
    Action(ActionSlot),
}

/// Local state carried between frames by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    was_open: bool,
    focus: Option<FocusTarget>,
    scroll: u16,
    max_scroll: u16,
    frame: u16,
    drawn: bool,
}

impl DialogState {
    /// Create state for a dialog that has not been seen open yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            was_open: false,
            focus: None,
            scroll: 0,
            max_scroll: 0,
            frame: 0,
            drawn: false,
        }
    }

    /// Currently focused element; `None` while closed.
    #[must_use]
    pub const fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Index of the focused body element, if body content has focus.
    #[must_use]
    pub const fn body_focus(&self) -> Option<usize> {
        match self.focus {
            Some(FocusTarget::Body(index)) => Some(index),
            _ => None,
        }
    }

    /// Current body scroll offset in rows.
    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Animation frame most recently drawn since the dialog last opened.
    ///
    /// Hit testing between two renders uses this same frame, so clicks land
    /// on what is on screen.
    #[must_use]
    pub const fn frame(&self) -> u16 {
        self.frame
    }

    /// Whether the last observed open flag was `true`.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.was_open
    }

    /// Reconcile with the caller's open flag and the current focus ring.
    ///
    /// Returns `true` on a closed→open edge.
    pub(crate) fn sync(&mut self, is_open: bool, ring: &[FocusTarget]) -> bool {
        let opened = is_open && !self.was_open;
        let closed = !is_open && self.was_open;
        self.was_open = is_open;

        if opened {
            self.focus = Some(first_focus(ring));
            self.scroll = 0;
            self.max_scroll = 0;
            self.frame = 0;
            self.drawn = false;
            debug!(focus = ?self.focus, "Dialog opened");
            return true;
        }

        if closed {
            self.focus = None;
            debug!("Dialog closed");
            return false;
        }

        if is_open {
            let stale = self
                .focus
                .is_none_or(|target| !ring.is_empty() && !ring.contains(&target));
            let surface_fallback =
                matches!(self.focus, Some(FocusTarget::Surface)) && !ring.is_empty();
            if stale || surface_fallback {
                self.focus = Some(first_focus(ring));
            }
            if ring.is_empty() {
                self.focus = Some(FocusTarget::Surface);
            }
        }

        false
    }

    /// Move focus to the next ring entry, wrapping at the end.
    pub(crate) fn focus_next(&mut self, ring: &[FocusTarget]) {
        self.focus = Some(step(ring, self.focus, true));
    }

    /// Move focus to the previous ring entry, wrapping at the start.
    pub(crate) fn focus_prev(&mut self, ring: &[FocusTarget]) {
        self.focus = Some(step(ring, self.focus, false));
    }

    /// Scroll the body by `delta` rows, clamped to the last rendered overflow.
    pub(crate) fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.scroll).saturating_add(delta);
        let clamped = target.clamp(0, i32::from(self.max_scroll));
        self.scroll = u16::try_from(clamped).unwrap_or(self.max_scroll);
    }

    /// Record how far the body can scroll, clamping the current offset.
    pub(crate) fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }

    /// Step to the frame about to be drawn. The first render after opening
    /// draws frame 0.
    pub(crate) const fn begin_frame(&mut self) {
        if self.drawn {
            self.frame = self.frame.saturating_add(1);
        } else {
            self.drawn = true;
        }
    }
}

fn first_focus(ring: &[FocusTarget]) -> FocusTarget {
    ring.first().copied().unwrap_or(FocusTarget::Surface)
}

fn step(ring: &[FocusTarget], current: Option<FocusTarget>, forward: bool) -> FocusTarget {
    if ring.is_empty() {
        return FocusTarget::Surface;
    }

    let Some(index) = current.and_then(|target| ring.iter().position(|t| *t == target)) else {
        return first_focus(ring);
    };

    let len = ring.len();
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    ring[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RING: [FocusTarget; 3] = [
        FocusTarget::CloseButton,
        FocusTarget::Body(0),
        FocusTarget::Action(ActionSlot::Primary),
    ];

    #[test]
    fn test_open_edge_focuses_first_ring_entry() {
        let mut state = DialogState::new();
        assert!(state.sync(true, &RING));
        assert_eq!(state.focus(), Some(FocusTarget::CloseButton));
        assert!(!state.sync(true, &RING));
    }

    #[test]
    fn test_open_with_empty_ring_focuses_surface() {
        let mut state = DialogState::new();
        state.sync(true, &[]);
        assert_eq!(state.focus(), Some(FocusTarget::Surface));
    }

    #[test]
    fn test_reopen_reapplies_focus() {
        let mut state = DialogState::new();
        state.sync(true, &RING);
        state.focus_next(&RING);
        state.focus_next(&RING);
        assert_eq!(
            state.focus(),
            Some(FocusTarget::Action(ActionSlot::Primary))
        );

        state.sync(false, &RING);
        assert_eq!(state.focus(), None);

        assert!(state.sync(true, &RING));
        assert_eq!(state.focus(), Some(FocusTarget::CloseButton));
    }

    #[test]
    fn test_focus_cycles_both_directions() {
        let mut state = DialogState::new();
        state.sync(true, &RING);
        state.focus_prev(&RING);
        assert_eq!(
            state.focus(),
            Some(FocusTarget::Action(ActionSlot::Primary))
        );
        state.focus_next(&RING);
        assert_eq!(state.focus(), Some(FocusTarget::CloseButton));
        state.focus_next(&RING);
        assert_eq!(state.body_focus(), Some(0));
    }

    #[test]
    fn test_focus_leaving_ring_falls_back_to_head() {
        let mut state = DialogState::new();
        state.sync(true, &RING);
        state.focus_prev(&RING);

        let shrunk = [FocusTarget::CloseButton, FocusTarget::Body(0)];
        state.sync(true, &shrunk);
        assert_eq!(state.focus(), Some(FocusTarget::CloseButton));

        state.sync(true, &[]);
        assert_eq!(state.focus(), Some(FocusTarget::Surface));

        state.sync(true, &shrunk);
        assert_eq!(state.focus(), Some(FocusTarget::CloseButton));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = DialogState::new();
        state.sync(true, &RING);
        state.set_max_scroll(5);
        state.scroll_by(3);
        assert_eq!(state.scroll(), 3);
        state.scroll_by(10);
        assert_eq!(state.scroll(), 5);
        state.scroll_by(-20);
        assert_eq!(state.scroll(), 0);

        state.scroll_by(4);
        state.set_max_scroll(2);
        assert_eq!(state.scroll(), 2);
    }

    #[test]
    fn test_open_edge_resets_scroll_and_frame() {
        let mut state = DialogState::new();
        state.sync(true, &RING);
        state.set_max_scroll(4);
        state.scroll_by(4);
        state.begin_frame();
        state.begin_frame();
        assert_eq!(state.frame(), 1);
        state.sync(false, &RING);
        state.sync(true, &RING);
        assert_eq!(state.scroll(), 0);
        assert_eq!(state.frame(), 0);
    }

    #[test]
    fn test_first_render_draws_frame_zero() {
        let mut state = DialogState::new();
        state.sync(true, &RING);
        state.begin_frame();
        assert_eq!(state.frame(), 0);
        state.begin_frame();
        assert_eq!(state.frame(), 1);
    }
}
