//! Color palette for dialog chrome
//!
//! Muted palette shared by the shell and the advanced variant.

use ratatui::style::Color;

// Surface
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
pub const MODAL_BORDER: Color = Color::Rgb(100, 110, 130);
pub const MODAL_BORDER_FOCUSED: Color = Color::Rgb(100, 180, 220);
pub const BACKDROP_DARK: Color = Color::Rgb(12, 13, 18);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Buttons
pub const BUTTON_PRIMARY: Color = Color::Rgb(120, 180, 120);
pub const BUTTON_SECONDARY: Color = Color::Rgb(130, 135, 150);
pub const BUTTON_CLOSE: Color = Color::Rgb(200, 100, 100);
pub const SPINNER: Color = Color::Rgb(200, 180, 100);
