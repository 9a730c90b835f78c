//! Dialog geometry.
//!
//! One pure function computes every rectangle the dialog draws into, so
//! rendering and mouse hit testing always agree without storing layout
//! state between frames.

use ratatui::layout::{Margin, Rect};

use super::action::ActionSlot;
use super::options::{Animation, Position, Size};

/// Narrowest surface drawn when the frame allows it.
const MIN_WIDTH: u16 = 24;
/// Shortest surface drawn when the frame allows it: borders, one body row, slack.
const MIN_HEIGHT: u16 = 5;
/// Rows consumed by the footer: separator plus content.
const FOOTER_ROWS: u16 = 2;
/// Rows a slide animation travels per remaining frame.
const SLIDE_STEP: u16 = 2;

/// Footer shape, as far as geometry is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FooterShape {
    None,
    Line,
    Buttons {
        primary: Option<u16>,
        secondary: Option<u16>,
    },
}

/// Everything the geometry depends on besides the frame area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub size: Size,
    pub position: Position,
    pub animation: Animation,
    pub close_button: bool,
    pub footer: FooterShape,
    pub resize_handle: bool,
}

/// Rectangles of a rendered dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogLayout {
    /// Bordered surface, including the header row.
    pub surface: Rect,
    /// Header row (the surface's top border).
    pub header: Rect,
    /// Close button inside the header row.
    pub close_button: Option<Rect>,
    /// Scrollable content region.
    pub body: Rect,
    /// Footer content row, below its separator.
    pub footer: Option<Rect>,
    /// Primary action button.
    pub primary: Option<Rect>,
    /// Secondary action button.
    pub secondary: Option<Rect>,
    /// Decorative resize handle in the bottom-right corner.
    pub resize_handle: Option<Rect>,
    /// The fade transition is still in progress.
    pub dimmed: bool,
}

impl DialogLayout {
    /// Button rectangle for `slot`, when the footer had room for it.
    #[must_use]
    pub const fn action(&self, slot: ActionSlot) -> Option<Rect> {
        match slot {
            ActionSlot::Primary => self.primary,
            ActionSlot::Secondary => self.secondary,
        }
    }

    /// Row holding the separator between body and footer.
    #[must_use]
    pub fn footer_separator(&self) -> Option<Rect> {
        self.footer.map(|footer| Rect {
            y: footer.y.saturating_sub(1),
            ..footer
        })
    }
}

/// Compute the dialog layout for `frame` frames after opening.
///
/// `body_rows` maps an inner width to the number of rows the body needs.
pub(crate) fn compute(
    area: Rect,
    geometry: &Geometry,
    frame: u16,
    body_rows: impl Fn(u16) -> u16,
) -> DialogLayout {
    let settled = settled_surface(area, geometry, body_rows);
    let (surface, dimmed) = animate(settled, area, geometry, frame);
    split(surface, geometry, dimmed)
}

fn settled_surface(area: Rect, geometry: &Geometry, body_rows: impl Fn(u16) -> u16) -> Rect {
    if geometry.size == Size::Full {
        return area;
    }

    let spec = geometry.size.spec();
    let width = percent_of(area.width, spec.width_percent)
        .min(spec.max_width)
        .max(MIN_WIDTH.min(area.width));
    let max_height = percent_of(area.height, spec.height_percent).max(MIN_HEIGHT.min(area.height));

    let footer_rows = if geometry.footer == FooterShape::None {
        0
    } else {
        FOOTER_ROWS
    };
    let desired = body_rows(width.saturating_sub(2))
        .max(1)
        .saturating_add(2)
        .saturating_add(footer_rows);
    let height = desired.min(max_height);

    let x = area.x + area.width.saturating_sub(width) / 2;
    let slack = area.height.saturating_sub(height);
    let gap = slack.min(1);
    let y = match geometry.position {
        Position::Center => area.y + slack / 2,
        Position::Top => area.y + gap,
        Position::Bottom => area.y + slack - gap,
    };

    Rect::new(x, y, width, height)
}

fn animate(settled: Rect, area: Rect, geometry: &Geometry, frame: u16) -> (Rect, bool) {
    let total = geometry.animation.frames();
    if frame >= total {
        return (settled, false);
    }
    let remaining = total - frame;

    match geometry.animation {
        Animation::Fade => (settled, true),
        Animation::Slide => {
            let offset = remaining.saturating_mul(SLIDE_STEP);
            let y = match geometry.position {
                Position::Top => settled.y.saturating_sub(offset).max(area.y),
                Position::Center | Position::Bottom => settled
                    .y
                    .saturating_add(offset)
                    .min(area.bottom().saturating_sub(settled.height)),
            };
            (Rect { y, ..settled }, false)
        }
        Animation::Zoom => {
            let scale_num = u32::from(frame) + 1;
            let scale_den = u32::from(total) + 1;
            let width = scale(settled.width, scale_num, scale_den).max(8.min(settled.width));
            let height = scale(settled.height, scale_num, scale_den).max(3.min(settled.height));
            let x = settled.x + (settled.width - width) / 2;
            let y = settled.y + (settled.height - height) / 2;
            (Rect::new(x, y, width, height), false)
        }
        Animation::None => (settled, false),
    }
}

fn split(surface: Rect, geometry: &Geometry, dimmed: bool) -> DialogLayout {
    let header = Rect {
        height: surface.height.min(1),
        ..surface
    };
    let inner = surface.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });

    let close_button = (geometry.close_button && surface.width >= 8)
        .then(|| Rect::new(surface.right() - 5, surface.y, 3, 1));

    let (body, footer) = if geometry.footer != FooterShape::None && inner.height > FOOTER_ROWS {
        let body = Rect {
            height: inner.height - FOOTER_ROWS,
            ..inner
        };
        let footer = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };
        (body, Some(footer))
    } else {
        (inner, None)
    };

    let (primary, secondary) = match (geometry.footer, footer) {
        (FooterShape::Buttons { primary, secondary }, Some(row)) => place_buttons(row, primary, secondary),
        _ => (None, None),
    };

    let resize_handle = (geometry.resize_handle && surface.width > 0 && surface.height > 0)
        .then(|| Rect::new(surface.right() - 1, surface.bottom() - 1, 1, 1));

    DialogLayout {
        surface,
        header,
        close_button,
        body,
        footer,
        primary,
        secondary,
        resize_handle,
        dimmed,
    }
}

/// Right-align the primary button, with the secondary one column to its left.
fn place_buttons(
    row: Rect,
    primary: Option<u16>,
    secondary: Option<u16>,
) -> (Option<Rect>, Option<Rect>) {
    let mut cursor = row.right();
    let mut place = |width: Option<u16>| -> Option<Rect> {
        let width = width?;
        let x = cursor.checked_sub(width).filter(|x| *x >= row.x)?;
        cursor = x.saturating_sub(1);
        Some(Rect::new(x, row.y, width, 1))
    };

    let primary = place(primary);
    let secondary = place(secondary);
    (primary, secondary)
}

fn percent_of(value: u16, percent: u16) -> u16 {
    let scaled = u32::from(value) * u32::from(percent) / 100;
    u16::try_from(scaled).unwrap_or(value)
}

fn scale(value: u16, num: u32, den: u32) -> u16 {
    let scaled = u32::from(value) * num / den.max(1);
    u16::try_from(scaled).unwrap_or(value)
}

/// Whether the cell at (`x`, `y`) lies inside `rect`.
pub(crate) const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    let within_x = x >= rect.x && x < rect.x.saturating_add(rect.width);
    let within_y = y >= rect.y && y < rect.y.saturating_add(rect.height);
    within_x && within_y
}
