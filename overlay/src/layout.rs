//! Overlay layout engine
//!
//! Places a [`DisplaySpec`] on screen for one of the eight anchors.
//!
//! Each anchor is a pair of edge offsets given as fractions of the screen
//! size, so the same setting works at any resolution. Text is measured with
//! a fixed glyph width and line height (no font metrics). The background box
//! is only ever translated to stay on screen, except when it is larger than
//! the screen itself; then it is pinned to the origin and clipped.

use onair_core::DisplaySpec;
use onair_core::context::{OverlayAnchor, OverlayConfig, Resolution, overlay_colors};

use crate::colors;
use crate::plan::{BackgroundRect, DrawItem, DrawPlan, TextRole};

/// Estimated average glyph width in pixels
pub const GLYPH_WIDTH: i32 = 8;
/// Vertical advance per line in pixels
pub const LINE_HEIGHT: i32 = 20;
/// Space between text and background edge
pub const PADDING: i32 = 10;

/// Offset from the left/right edge, as a fraction of the width
const EDGE_OFFSET_X: f64 = 0.025;
/// Offset from the top/bottom edge, as a fraction of the height
const EDGE_OFFSET_Y: f64 = 0.05;

const BORDER_CHAR: char = '=';
const SEPARATOR_CHAR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// How the stack grows from the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalGrowth {
    /// Downward from the anchor
    Down,
    /// Centred on the anchor
    Centered,
    /// Upward from the anchor, last line nearest to it
    Up,
}

/// Alignment and growth direction for an anchor
pub fn placement(anchor: OverlayAnchor) -> (HorizontalAlign, VerticalGrowth) {
    use HorizontalAlign::*;
    use VerticalGrowth::*;
    match anchor {
        OverlayAnchor::TopLeft => (Left, Down),
        OverlayAnchor::TopMiddle => (Center, Down),
        OverlayAnchor::TopRight => (Right, Down),
        OverlayAnchor::MiddleLeft => (Left, Centered),
        OverlayAnchor::MiddleRight => (Right, Centered),
        OverlayAnchor::BottomLeft => (Left, Up),
        OverlayAnchor::BottomMiddle => (Center, Up),
        OverlayAnchor::BottomRight => (Right, Up),
    }
}

/// Anchor point in pixels, measured from the edges the anchor names
pub fn anchor_point(anchor: OverlayAnchor, resolution: Resolution) -> (i32, i32) {
    let (horizontal, vertical) = placement(anchor);
    let (width, height) = (resolution.width, resolution.height);

    let x = match horizontal {
        HorizontalAlign::Left => scaled(EDGE_OFFSET_X, width),
        HorizontalAlign::Center => scaled(0.5, width),
        HorizontalAlign::Right => width - scaled(EDGE_OFFSET_X, width),
    };
    let y = match vertical {
        VerticalGrowth::Down => scaled(EDGE_OFFSET_Y, height),
        VerticalGrowth::Centered => scaled(0.5, height),
        VerticalGrowth::Up => height - scaled(EDGE_OFFSET_Y, height),
    };
    (x, y)
}

#[inline]
fn scaled(fraction: f64, dimension: i32) -> i32 {
    (fraction * f64::from(dimension)).round() as i32
}

/// Lines in stacking order: border, title, separator, time, presenter,
/// separator + description (when present), border.
pub fn stack_lines(display: &DisplaySpec) -> Vec<(TextRole, String)> {
    let width = display.max_line_chars().max(1);
    let border: String = std::iter::repeat_n(BORDER_CHAR, width).collect();
    let separator: String = std::iter::repeat_n(SEPARATOR_CHAR, width).collect();

    let mut lines = Vec::with_capacity(
        display.title_lines.len()
            + display.presenter_lines.len()
            + display.description_lines.len()
            + 5,
    );
    lines.push((TextRole::Border, border.clone()));
    lines.extend(display.title_lines.iter().map(|l| (TextRole::Title, l.clone())));
    lines.push((TextRole::Separator, separator.clone()));
    lines.push((TextRole::Time, display.time_range.clone()));
    lines.extend(
        display
            .presenter_lines
            .iter()
            .map(|l| (TextRole::Presenter, l.clone())),
    );
    if !display.description_lines.is_empty() {
        lines.push((TextRole::Separator, separator));
        lines.extend(
            display
                .description_lines
                .iter()
                .map(|l| (TextRole::Description, l.clone())),
        );
    }
    lines.push((TextRole::Border, border));
    lines
}

/// Shift a span `[start, start + len)` into `[0, limit)`; returns the new
/// start, the (possibly clipped) length and the applied shift.
fn fit_span(start: i32, len: i32, limit: i32) -> (i32, i32, i32) {
    let len = len.min(limit);
    let fitted = start.clamp(0, limit - len);
    (fitted, len, fitted - start)
}

/// Compute the draw plan for `display` under `config`.
pub fn layout(display: &DisplaySpec, config: &OverlayConfig) -> DrawPlan {
    if !config.enabled() {
        return DrawPlan::empty();
    }

    let resolution = config.resolution();
    let (screen_w, screen_h) = (resolution.width, resolution.height);
    let (horizontal, growth) = placement(config.anchor());
    let (anchor_x, anchor_y) = anchor_point(config.anchor(), resolution);

    let lines = stack_lines(display);
    let block_w = display.max_line_chars().max(1) as i32 * GLYPH_WIDTH;
    let block_h = lines.len() as i32 * LINE_HEIGHT;

    let text_left = match horizontal {
        HorizontalAlign::Left => anchor_x,
        HorizontalAlign::Center => anchor_x - block_w / 2,
        HorizontalAlign::Right => anchor_x - block_w,
    };
    let text_top = match growth {
        VerticalGrowth::Down => anchor_y,
        VerticalGrowth::Centered => anchor_y - block_h / 2,
        VerticalGrowth::Up => anchor_y - block_h,
    };

    let (box_x, box_w, shift_x) =
        fit_span(text_left - PADDING, block_w + 2 * PADDING, screen_w);
    let (box_y, box_h, shift_y) =
        fit_span(text_top - PADDING, block_h + 2 * PADDING, screen_h);

    let text_left = text_left + shift_x;
    let text_top = text_top + shift_y;

    let items = lines
        .into_iter()
        .enumerate()
        .map(|(row, (role, text))| {
            let line_w = text.chars().count() as i32 * GLYPH_WIDTH;
            let x = match horizontal {
                HorizontalAlign::Left => text_left,
                HorizontalAlign::Center => text_left + (block_w - line_w) / 2,
                HorizontalAlign::Right => text_left + block_w - line_w,
            };
            let y = text_top + row as i32 * LINE_HEIGHT;
            DrawItem {
                color: colors::for_role(role),
                layer: role.layer(),
                size: role.size(),
                x: x.clamp(0, screen_w - 1),
                y: y.clamp(0, screen_h - 1),
                role,
                text,
            }
        })
        .collect();

    tracing::debug!(
        anchor = %config.anchor(),
        resolution = %resolution,
        box_x,
        box_y,
        box_w,
        box_h,
        "overlay laid out"
    );

    DrawPlan {
        items,
        background: Some(BackgroundRect {
            x: box_x,
            y: box_y,
            width: box_w,
            height: box_h,
            color: colors::background(),
            opacity: overlay_colors::BACKGROUND_OPACITY,
        }),
    }
}
