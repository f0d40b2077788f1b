//! Text sink that prints draw calls, one per line

use std::io::Write;

use onair_overlay::colors::to_hex;
use onair_overlay::sink::OverlaySink;
use onair_overlay::{BackgroundRect, DrawItem};

/// Writes each draw call as a readable line. Stands in for an in-game
/// overlay when running from a terminal.
pub struct TextSink<W: Write> {
    out: W,
}

pub type StdoutSink = TextSink<std::io::Stdout>;

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(error) = writeln!(self.out, "{line}") {
            tracing::warn!(%error, "could not write draw output");
        }
    }
}

impl<W: Write> OverlaySink for TextSink<W> {
    fn draw_text(&mut self, id: &str, item: &DrawItem) {
        self.emit(format_args!(
            "draw {id} ({}, {}) {} layer={} {:?}",
            item.x,
            item.y,
            to_hex(item.color),
            item.layer,
            item.text
        ));
    }

    fn draw_rect(&mut self, id: &str, rect: &BackgroundRect) {
        self.emit(format_args!(
            "rect {id} ({}, {}) {}x{} {} opacity={}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            to_hex(rect.color),
            rect.opacity
        ));
    }

    fn clear(&mut self, id: &str) {
        self.emit(format_args!("clear {id}"));
    }
}
