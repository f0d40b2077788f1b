//! Draw plan: positioned text and one background rectangle
//!
//! The render sink only draws what is here; it does no positioning.

use onair_core::context::Color;

/// Layer of the background rectangle
pub const LAYER_BACKGROUND: u8 = 0;
/// Layer of border and separator lines
pub const LAYER_RULES: u8 = 1;
/// Layer of program text
pub const LAYER_TEXT: u8 = 2;

/// What a text line shows; decides its color and layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Border,
    Title,
    Separator,
    Time,
    Presenter,
    Description,
}

impl TextRole {
    pub fn layer(&self) -> u8 {
        match self {
            Self::Border | Self::Separator => LAYER_RULES,
            _ => LAYER_TEXT,
        }
    }

    pub fn size(&self) -> TextSize {
        match self {
            Self::Title => TextSize::Large,
            _ => TextSize::Normal,
        }
    }
}

/// Size hint for sinks that support more than one font size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

/// One line of text at an absolute position (top-left of the line)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawItem {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub layer: u8,
    pub role: TextRole,
    pub size: TextSize,
}

/// Backdrop behind all text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
    /// 0 (transparent) to 255 (opaque)
    pub opacity: u8,
}

impl BackgroundRect {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Ordered drawing instructions for one refresh
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawPlan {
    pub items: Vec<DrawItem>,
    pub background: Option<BackgroundRect>,
}

impl DrawPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.background.is_none()
    }

    /// Items of one role, in drawing order
    pub fn items_with_role(&self, role: TextRole) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.role == role)
    }
}
