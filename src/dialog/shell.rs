//! The dialog shell: header, scrollable body and an optional plain footer.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::StatefulWidget;

use super::advanced::AdvancedDialog;
use super::chrome::{self, Chrome, FooterSlot, HeaderSlot};
use super::input;
use super::layout::DialogLayout;
use super::options::{DialogOptions, Presentation, Size};
use super::render;
use super::state::DialogState;
use super::{DialogHandler, EventStatus};
use crate::config::KeyBindings;

/// A controlled modal dialog.
///
/// Build one every frame from the caller's state, passing the caller-owned
/// open flag through [`open`](Self::open):
///
/// ```
/// use dialog_shell::{Dialog, DialogState};
/// use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
///
/// let mut state = DialogState::new();
/// let area = Rect::new(0, 0, 60, 20);
/// let mut buf = Buffer::empty(area);
///
/// let dialog = Dialog::new("Confirm").open(true).body("Delete this entry?");
/// (&dialog).render(area, &mut buf, &mut state);
/// assert!(state.is_open());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dialog<'a> {
    title: String,
    is_open: bool,
    body: Text<'a>,
    body_focusables: usize,
    options: DialogOptions,
    footer: Option<Line<'a>>,
    keys: Option<&'a KeyBindings>,
}

impl<'a> Dialog<'a> {
    /// Create a closed dialog with the given title and default options.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the caller-owned open flag for this frame.
    #[must_use]
    pub const fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Set the body content.
    #[must_use]
    pub fn body(mut self, body: impl Into<Text<'a>>) -> Self {
        self.body = body.into();
        self
    }

    /// Number of interactive elements the caller renders inside the body.
    ///
    /// They take part in focus cycling as [`FocusTarget::Body`](super::FocusTarget::Body).
    #[must_use]
    pub const fn body_focusables(mut self, count: usize) -> Self {
        self.body_focusables = count;
        self
    }

    /// Replace every option at once.
    #[must_use]
    pub const fn options(mut self, options: DialogOptions) -> Self {
        self.options = options;
        self
    }

    /// Maximum surface size.
    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.options.size = size;
        self
    }

    /// Show or hide the header close button.
    #[must_use]
    pub const fn show_close_button(mut self, show: bool) -> Self {
        self.options.show_close_button = show;
        self
    }

    /// Whether a click outside the surface dismisses the dialog.
    #[must_use]
    pub const fn close_on_outside_click(mut self, close: bool) -> Self {
        self.options.close_on_outside_click = close;
        self
    }

    /// Whether the dismiss key dismisses the dialog.
    #[must_use]
    pub const fn close_on_escape(mut self, close: bool) -> Self {
        self.options.close_on_escape = close;
        self
    }

    /// Replace the body with a loading placeholder and block interaction.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.options.loading = loading;
        self
    }

    /// Block interaction while keeping the body visible.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.options.disabled = disabled;
        self
    }

    /// Plain footer line, shown only with [`show_footer`](Self::show_footer).
    #[must_use]
    pub fn footer(mut self, footer: impl Into<Line<'a>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Show the plain footer.
    #[must_use]
    pub const fn show_footer(mut self, show: bool) -> Self {
        self.options.show_footer = show;
        self
    }

    /// Use these keybindings instead of the defaults.
    #[must_use]
    pub const fn keys(mut self, keys: &'a KeyBindings) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Upgrade to the advanced variant.
    #[must_use]
    pub fn advanced(self) -> AdvancedDialog<'a> {
        AdvancedDialog::from(self)
    }

    /// The caller-owned open flag this dialog was built with.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current options.
    #[must_use]
    pub const fn dialog_options(&self) -> DialogOptions {
        self.options
    }

    /// Rectangles this dialog occupies inside `area` on the current frame.
    #[must_use]
    pub fn layout(&self, area: Rect, state: &DialogState) -> DialogLayout {
        self.chrome(Presentation::SHELL, None, None).layout(area, state)
    }

    /// Route a terminal event through the dialog.
    ///
    /// Returns [`EventStatus::Consumed`] for everything the dialog handled or
    /// deliberately swallowed. Callers forward `Ignored` events to the body
    /// content or the page underneath.
    pub fn handle_event(
        &self,
        event: &Event,
        area: Rect,
        state: &mut DialogState,
        handler: &mut impl DialogHandler,
    ) -> EventStatus {
        let chrome = self.chrome(Presentation::SHELL, None, None);
        input::handle_event(&chrome, event, area, state, handler)
    }

    /// Lower these props into the shared render/event core.
    pub(crate) fn chrome<'d>(
        &'d self,
        presentation: Presentation,
        header: Option<HeaderSlot<'d, 'a>>,
        footer: Option<FooterSlot<'d, 'a>>,
    ) -> Chrome<'d, 'a> {
        let header = header
            .unwrap_or_else(|| chrome::resolve_header(None, self.options.show_close_button));
        let footer = footer.unwrap_or_else(|| {
            chrome::resolve_footer(None, None, self.footer.as_ref(), self.options.show_footer)
        });

        Chrome {
            title: &self.title,
            is_open: self.is_open,
            options: self.options,
            presentation,
            header,
            footer,
            body: &self.body,
            body_focusables: self.body_focusables,
            keys: self.keys.unwrap_or(KeyBindings::shared_default()),
        }
    }

    /// Plain footer line, if one was supplied.
    pub(crate) const fn plain_footer(&self) -> Option<&Line<'a>> {
        self.footer.as_ref()
    }
}

impl StatefulWidget for &Dialog<'_> {
    type State = DialogState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let chrome = self.chrome(Presentation::SHELL, None, None);
        render::render(&chrome, area, buf, state);
    }
}
