//! Render sink seam
//!
//! An [`OverlaySink`] is the external drawing service (an in-game overlay,
//! a preview window, stdout). [`PlanPresenter`] feeds it draw plans in
//! request order and clears whatever a previous, larger plan left behind.

use crate::plan::{BackgroundRect, DrawItem, DrawPlan};

/// Id of the background rectangle
pub const BACKGROUND_ID: &str = "onair_bg";

/// Id of the `index`-th text item
pub fn item_id(index: usize) -> String {
    format!("onair_{index}")
}

/// A drawing service addressed by item ids. Drawing an id replaces what
/// was previously drawn under it.
pub trait OverlaySink {
    fn draw_text(&mut self, id: &str, item: &DrawItem);
    fn draw_rect(&mut self, id: &str, rect: &BackgroundRect);
    fn clear(&mut self, id: &str);
}

/// Applies draw plans to a sink, newest request wins.
pub struct PlanPresenter<S: OverlaySink> {
    sink: S,
    last_sequence: Option<u64>,
    drawn_items: usize,
    background_drawn: bool,
}

impl<S: OverlaySink> PlanPresenter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            last_sequence: None,
            drawn_items: 0,
            background_drawn: false,
        }
    }

    /// Present `plan`, produced for request `sequence`.
    ///
    /// Returns `false` (and draws nothing) when a plan from a later request
    /// has already been presented.
    pub fn present(&mut self, sequence: u64, plan: &DrawPlan) -> bool {
        if self.last_sequence.is_some_and(|last| sequence <= last) {
            tracing::debug!(sequence, last = ?self.last_sequence, "dropping stale draw plan");
            return false;
        }
        self.last_sequence = Some(sequence);

        match &plan.background {
            Some(rect) => {
                self.sink.draw_rect(BACKGROUND_ID, rect);
                self.background_drawn = true;
            }
            None if self.background_drawn => {
                self.sink.clear(BACKGROUND_ID);
                self.background_drawn = false;
            }
            None => {}
        }

        for (index, item) in plan.items.iter().enumerate() {
            self.sink.draw_text(&item_id(index), item);
        }
        for index in plan.items.len()..self.drawn_items {
            self.sink.clear(&item_id(index));
        }
        self.drawn_items = plan.items.len();
        true
    }

    /// Remove everything this presenter has drawn
    pub fn clear(&mut self) {
        if self.background_drawn {
            self.sink.clear(BACKGROUND_ID);
            self.background_drawn = false;
        }
        for index in 0..self.drawn_items {
            self.sink.clear(&item_id(index));
        }
        self.drawn_items = 0;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{TextRole, TextSize};

    #[derive(Debug, Default)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl OverlaySink for RecordingSink {
        fn draw_text(&mut self, id: &str, item: &DrawItem) {
            self.calls.push(format!("text {id} {}", item.text));
        }
        fn draw_rect(&mut self, id: &str, rect: &BackgroundRect) {
            self.calls.push(format!("rect {id} {}x{}", rect.width, rect.height));
        }
        fn clear(&mut self, id: &str) {
            self.calls.push(format!("clear {id}"));
        }
    }

    fn plan(texts: &[&str]) -> DrawPlan {
        DrawPlan {
            items: texts
                .iter()
                .enumerate()
                .map(|(i, text)| DrawItem {
                    text: text.to_string(),
                    x: 10,
                    y: 10 + 20 * i as i32,
                    color: [255, 255, 255, 255],
                    layer: 2,
                    role: TextRole::Title,
                    size: TextSize::Normal,
                })
                .collect(),
            background: Some(BackgroundRect {
                x: 0,
                y: 0,
                width: 100,
                height: 50,
                color: [0, 0, 0, 255],
                opacity: 128,
            }),
        }
    }

    #[test]
    fn test_present_draws_background_then_items() {
        let mut presenter = PlanPresenter::new(RecordingSink::default());
        assert!(presenter.present(1, &plan(&["a", "b"])));
        assert_eq!(
            presenter.sink().calls,
            ["rect onair_bg 100x50", "text onair_0 a", "text onair_1 b"]
        );
    }

    #[test]
    fn test_smaller_plan_clears_leftovers() {
        let mut presenter = PlanPresenter::new(RecordingSink::default());
        presenter.present(1, &plan(&["a", "b", "c"]));
        presenter.sink_mut().calls.clear();

        presenter.present(2, &plan(&["x"]));
        assert_eq!(
            presenter.sink().calls,
            [
                "rect onair_bg 100x50",
                "text onair_0 x",
                "clear onair_1",
                "clear onair_2"
            ]
        );
    }

    #[test]
    fn test_stale_sequence_is_ignored() {
        let mut presenter = PlanPresenter::new(RecordingSink::default());
        assert!(presenter.present(5, &plan(&["new"])));
        assert!(!presenter.present(4, &plan(&["old"])));
        assert!(!presenter.present(5, &plan(&["dup"])));
        assert_eq!(presenter.sink().calls.len(), 2);
    }

    #[test]
    fn test_empty_plan_clears_everything() {
        let mut presenter = PlanPresenter::new(RecordingSink::default());
        presenter.present(1, &plan(&["a"]));
        presenter.sink_mut().calls.clear();

        presenter.present(2, &DrawPlan::empty());
        assert_eq!(presenter.sink().calls, ["clear onair_bg", "clear onair_0"]);

        presenter.sink_mut().calls.clear();
        presenter.clear();
        assert!(presenter.sink().calls.is_empty());
    }
}
