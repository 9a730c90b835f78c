//! Hard wrapping for body text.
//!
//! The body is pre-wrapped so its row count is known before rendering;
//! layout sizing and scroll clamping both depend on it. Widths are display
//! columns, so double-width glyphs take two cells.

use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthChar;

/// Wrap every line of `text` to at most `width` columns, keeping span styles.
///
/// A glyph wider than `width` still gets a row of its own.
pub(crate) fn wrap_lines<'a>(text: &Text<'a>, width: u16) -> Vec<Line<'a>> {
    if width == 0 {
        return Vec::new();
    }

    let width = usize::from(width);
    let mut wrapped = Vec::with_capacity(text.lines.len());

    for line in &text.lines {
        if line.width() <= width {
            wrapped.push(line.clone());
            continue;
        }

        let mut current: Vec<Span<'a>> = Vec::new();
        let mut used = 0usize;
        for span in &line.spans {
            let mut chunk = String::new();
            for ch in span.content.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if used > 0 && used + ch_width > width {
                    if !chunk.is_empty() {
                        current.push(Span::styled(std::mem::take(&mut chunk), span.style));
                    }
                    wrapped.push(Line::from(std::mem::take(&mut current)).style(line.style));
                    used = 0;
                }
                chunk.push(ch);
                used += ch_width;
            }
            if !chunk.is_empty() {
                current.push(Span::styled(chunk, span.style));
            }
        }
        if !current.is_empty() {
            wrapped.push(Line::from(current).style(line.style));
        }
    }

    wrapped
}

/// Rows `text` occupies when wrapped to `width`.
pub(crate) fn wrapped_height(text: &Text<'_>, width: u16) -> u16 {
    u16::try_from(wrap_lines(text, width).len()).unwrap_or(u16::MAX)
}
