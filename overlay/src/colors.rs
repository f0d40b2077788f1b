//! Static colors per overlay text role

use onair_core::context::{Color, overlay_colors};

use crate::plan::TextRole;

#[inline]
pub fn title() -> Color {
    overlay_colors::TITLE
}

#[inline]
pub fn time() -> Color {
    overlay_colors::TIME
}

#[inline]
pub fn presenter() -> Color {
    overlay_colors::PRESENTER
}

#[inline]
pub fn description() -> Color {
    overlay_colors::DESCRIPTION
}

/// Border and separator lines
#[inline]
pub fn border() -> Color {
    overlay_colors::BORDER
}

#[inline]
pub fn background() -> Color {
    overlay_colors::BACKGROUND
}

/// Color for a role; never depends on the text itself
pub fn for_role(role: TextRole) -> Color {
    match role {
        TextRole::Title => title(),
        TextRole::Time => time(),
        TextRole::Presenter => presenter(),
        TextRole::Description => description(),
        TextRole::Border | TextRole::Separator => border(),
    }
}

/// `#rrggbb` form used by message-based overlay services
pub fn to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}
