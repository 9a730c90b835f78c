//! Closed option sets for dialog sizing and presentation.
//!
//! Every option is a small `Copy` enum mapped to its presentation through an
//! exhaustive `match`, so adding a variant fails to compile until each table
//! handles it.

use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

use super::colors;

/// Maximum surface size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Narrow confirmation-sized surface.
    Sm,
    /// Default form-sized surface.
    #[default]
    Md,
    /// Wide surface for tables and multi-column forms.
    Lg,
    /// Nearly full-width surface.
    Xl,
    /// The whole frame.
    Full,
}

/// Bounds a [`Size`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// Width as a percentage of the frame.
    pub width_percent: u16,
    /// Absolute cap on the width, in columns.
    pub max_width: u16,
    /// Maximum height as a percentage of the frame.
    pub height_percent: u16,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Full];

    /// Lowercase token used in configuration files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }

    /// Width/height bounds for this size.
    #[must_use]
    pub const fn spec(self) -> SizeSpec {
        match self {
            Self::Sm => SizeSpec {
                width_percent: 40,
                max_width: 48,
                height_percent: 50,
            },
            Self::Md => SizeSpec {
                width_percent: 55,
                max_width: 72,
                height_percent: 65,
            },
            Self::Lg => SizeSpec {
                width_percent: 70,
                max_width: 100,
                height_percent: 75,
            },
            Self::Xl => SizeSpec {
                width_percent: 85,
                max_width: 140,
                height_percent: 85,
            },
            Self::Full => SizeSpec {
                width_percent: 100,
                max_width: u16::MAX,
                height_percent: 100,
            },
        }
    }
}

/// Open transition played when the dialog appears.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    /// Surface starts dimmed and brightens.
    #[default]
    Fade,
    /// Surface slides in toward its resting row.
    Slide,
    /// Surface grows from its centre.
    Zoom,
    /// Surface appears at rest immediately.
    None,
}

impl Animation {
    /// Number of rendered frames before the surface is at rest.
    #[must_use]
    pub const fn frames(self) -> u16 {
        match self {
            Self::Fade => 3,
            Self::Slide => 4,
            Self::Zoom => 4,
            Self::None => 0,
        }
    }
}

/// Overlay treatment for everything behind the surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backdrop {
    /// Page stays visible but dimmed and muted.
    Blur,
    /// Page is painted over with a dark background.
    #[default]
    Dark,
    /// Page is left untouched.
    Transparent,
}

impl Backdrop {
    /// Style patched onto every backdrop cell, or `None` to leave the page as is.
    #[must_use]
    pub fn style(self) -> Option<Style> {
        match self {
            Self::Blur => Some(
                Style::default()
                    .fg(colors::TEXT_MUTED)
                    .add_modifier(Modifier::DIM),
            ),
            Self::Dark => Some(
                Style::default()
                    .fg(colors::TEXT_MUTED)
                    .bg(colors::BACKDROP_DARK),
            ),
            Self::Transparent => None,
        }
    }
}

/// Vertical placement of the surface within the frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Vertically centred.
    #[default]
    Center,
    /// Anchored near the top edge.
    Top,
    /// Anchored near the bottom edge.
    Bottom,
}

/// Configuration shared by every dialog variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOptions {
    /// Maximum surface size.
    pub size: Size,
    /// Render a close button in the default header.
    pub show_close_button: bool,
    /// Clicking outside the surface dismisses the dialog.
    pub close_on_outside_click: bool,
    /// The dismiss key (Escape by default) dismisses the dialog.
    pub close_on_escape: bool,
    /// Replace the body with a placeholder and block all interaction.
    pub loading: bool,
    /// Block all interaction but keep rendering the body.
    pub disabled: bool,
    /// Render the plain footer when one is supplied.
    pub show_footer: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            size: Size::default(),
            show_close_button: true,
            close_on_outside_click: true,
            close_on_escape: true,
            loading: false,
            disabled: false,
            show_footer: false,
        }
    }
}

impl DialogOptions {
    /// Whether dismissal gestures and action clicks are suppressed.
    #[must_use]
    pub const fn blocks_interaction(&self) -> bool {
        self.loading || self.disabled
    }
}

/// Presentation options only the advanced variant exposes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presentation {
    /// Open transition.
    pub animation: Animation,
    /// Overlay treatment.
    pub backdrop: Backdrop,
    /// Vertical placement.
    pub position: Position,
    /// Force [`Size::Full`] regardless of the configured size.
    pub fullscreen: bool,
    /// Show a drag grip in the header. Purely decorative.
    pub draggable: bool,
    /// Show a resize handle in the corner. Purely decorative.
    pub resizable: bool,
}

impl Presentation {
    /// Presentation used by the plain dialog shell.
    pub const SHELL: Self = Self {
        animation: Animation::None,
        backdrop: Backdrop::Dark,
        position: Position::Center,
        fullscreen: false,
        draggable: false,
        resizable: false,
    };

    /// The size actually rendered; `fullscreen` overrides `size`.
    #[must_use]
    pub const fn resolve_size(&self, size: Size) -> Size {
        if self.fullscreen { Size::Full } else { size }
    }
}
