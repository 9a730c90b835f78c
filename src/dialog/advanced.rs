//! The advanced dialog: presentation options, action footer and custom
//! header/footer slots on top of the shell contract.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::StatefulWidget;

use super::action::Actions;
use super::chrome::{self, Chrome};
use super::input;
use super::layout::DialogLayout;
use super::options::{Animation, Backdrop, Position, Presentation};
use super::render;
use super::shell::Dialog;
use super::state::DialogState;
use super::{DialogHandler, EventStatus};

/// A [`Dialog`] with animation, backdrop, placement and a primary/secondary
/// action footer.
///
/// Footer precedence is custom footer, then actions, then the shell's plain
/// footer. A custom header replaces the title and the close button.
#[derive(Debug, Clone)]
pub struct AdvancedDialog<'a> {
    shell: Dialog<'a>,
    presentation: Presentation,
    actions: Option<Actions>,
    custom_header: Option<Line<'a>>,
    custom_footer: Option<Line<'a>>,
}

impl<'a> From<Dialog<'a>> for AdvancedDialog<'a> {
    fn from(shell: Dialog<'a>) -> Self {
        Self {
            shell,
            presentation: Presentation::default(),
            actions: None,
            custom_header: None,
            custom_footer: None,
        }
    }
}

impl<'a> AdvancedDialog<'a> {
    /// Create a closed advanced dialog with default options.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::from(Dialog::new(title))
    }

    /// Adjust the wrapped shell props (open flag, body, options).
    #[must_use]
    pub fn shell(mut self, f: impl FnOnce(Dialog<'a>) -> Dialog<'a>) -> Self {
        self.shell = f(self.shell);
        self
    }

    /// Replace every presentation option at once.
    #[must_use]
    pub const fn presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Open transition.
    #[must_use]
    pub const fn animation(mut self, animation: Animation) -> Self {
        self.presentation.animation = animation;
        self
    }

    /// Overlay treatment.
    #[must_use]
    pub const fn backdrop(mut self, backdrop: Backdrop) -> Self {
        self.presentation.backdrop = backdrop;
        self
    }

    /// Vertical placement.
    #[must_use]
    pub const fn position(mut self, position: Position) -> Self {
        self.presentation.position = position;
        self
    }

    /// Fill the whole frame regardless of the configured size.
    #[must_use]
    pub const fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.presentation.fullscreen = fullscreen;
        self
    }

    /// Show a drag grip in the header.
    #[must_use]
    pub const fn draggable(mut self, draggable: bool) -> Self {
        self.presentation.draggable = draggable;
        self
    }

    /// Show a resize handle in the bottom-right corner.
    #[must_use]
    pub const fn resizable(mut self, resizable: bool) -> Self {
        self.presentation.resizable = resizable;
        self
    }

    /// Footer actions. Empty actions fall through to the plain footer.
    #[must_use]
    pub fn actions(mut self, actions: Actions) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Header line replacing the title and close button.
    #[must_use]
    pub fn custom_header(mut self, header: impl Into<Line<'a>>) -> Self {
        self.custom_header = Some(header.into());
        self
    }

    /// Footer line taking precedence over actions and the plain footer.
    #[must_use]
    pub fn custom_footer(mut self, footer: impl Into<Line<'a>>) -> Self {
        self.custom_footer = Some(footer.into());
        self
    }

    /// Current presentation options.
    #[must_use]
    pub const fn presentation_options(&self) -> Presentation {
        self.presentation
    }

    /// The caller-owned open flag this dialog was built with.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.shell.is_open()
    }

    /// Rectangles this dialog occupies inside `area` on the current frame.
    #[must_use]
    pub fn layout(&self, area: Rect, state: &DialogState) -> DialogLayout {
        self.chrome().layout(area, state)
    }

    /// Route a terminal event through the dialog.
    ///
    /// Behaves like [`Dialog::handle_event`], and additionally calls
    /// [`DialogHandler::on_action`] when an enabled action is clicked or
    /// activated while the dialog is neither loading nor disabled.
    pub fn handle_event(
        &self,
        event: &Event,
        area: Rect,
        state: &mut DialogState,
        handler: &mut impl DialogHandler,
    ) -> EventStatus {
        input::handle_event(&self.chrome(), event, area, state, handler)
    }

    fn chrome(&self) -> Chrome<'_, 'a> {
        let options = self.shell.dialog_options();
        let header = chrome::resolve_header(self.custom_header.as_ref(), options.show_close_button);
        let footer = chrome::resolve_footer(
            self.custom_footer.as_ref(),
            self.actions.as_ref(),
            self.shell.plain_footer(),
            options.show_footer,
        );
        self.shell
            .chrome(self.presentation, Some(header), Some(footer))
    }
}

impl StatefulWidget for &AdvancedDialog<'_> {
    type State = DialogState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render::render(&self.chrome(), area, buf, state);
    }
}
