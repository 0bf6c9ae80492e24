use crate::labels::{LabelSet, next_label, prev_label};
use crate::model::Theme;
use crate::timeline::{Timeline, TimelineItem};

/// Zero-argument signal fired when navigation is attempted past either end
/// of the timeline.
pub type BoundaryHook = Box<dyn FnMut() + 'static>;

/// Outcome of one transition. Drivers use this to trigger presentation side
/// effects (e.g. reset scroll position after `Advanced`/`Retreated`);
/// the core itself performs none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved forward one item.
    Advanced,
    /// Moved back one item.
    Retreated,
    /// Already at the last item; the completion hook fired (if set).
    Completed,
    /// Already at the first item; the exit hook fired (if set).
    Exited,
    /// No defined current item (out-of-range index); nothing happened.
    Stalled,
}

/// What the presentation renders for the current position: the selected
/// item, the adjacent-item labels, and the passed-through theme flag.
#[derive(Debug)]
pub struct SlideView<'a> {
    pub item: &'a TimelineItem,
    pub next_label: String,
    pub prev_label: String,
    pub is_dark: bool,
}

/// Navigation state machine over a built [`Timeline`].
///
/// Holds the single mutable `current_index`; all transitions happen
/// synchronously from the one event-handling context, so there is nothing
/// to lock. Boundary hooks fire on every boundary call, not once.
pub struct Navigator {
    timeline: Timeline,
    index: usize,
    theme: Theme,
    on_complete: Option<BoundaryHook>,
    on_exit: Option<BoundaryHook>,
}

impl Navigator {
    /// Start at index 0 (always valid: a timeline has at least `Summary`).
    pub fn new(timeline: Timeline, theme: Theme) -> Self {
        Self {
            timeline,
            index: 0,
            theme,
            on_complete: None,
            on_exit: None,
        }
    }

    /// Externally supplied starting position. An out-of-range index is kept
    /// as-is: `current()` reports no item and transitions stall, which
    /// consumers treat as a loading/empty state.
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Hook fired by `advance()` at the last item.
    pub fn on_complete(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Hook fired by `retreat()` at the first item.
    pub fn on_exit(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn current(&self) -> Option<&TimelineItem> {
        self.timeline.get(self.index)
    }

    /// Step forward. At the last item the completion hook fires (every
    /// call) and the index does not change.
    pub fn advance(&mut self) -> Step {
        if self.current().is_none() {
            return Step::Stalled;
        }
        if self.index < self.timeline.last_index() {
            self.index += 1;
            tracing::debug!(index = self.index, "advance");
            Step::Advanced
        } else {
            if let Some(hook) = self.on_complete.as_mut() {
                hook();
            }
            Step::Completed
        }
    }

    /// Step backward. At the first item the exit hook fires (every call)
    /// and the index does not change.
    pub fn retreat(&mut self) -> Step {
        if self.current().is_none() {
            return Step::Stalled;
        }
        if self.index > 0 {
            self.index -= 1;
            tracing::debug!(index = self.index, "retreat");
            Step::Retreated
        } else {
            if let Some(hook) = self.on_exit.as_mut() {
                hook();
            }
            Step::Exited
        }
    }

    /// Selection consumed by the slide renderers, or `None` while the index
    /// is out of range.
    pub fn view(&self, set: &LabelSet) -> Option<SlideView<'_>> {
        let item = self.current()?;
        Some(SlideView {
            item,
            next_label: next_label(&self.timeline, self.index, set),
            prev_label: prev_label(&self.timeline, self.index, set),
            is_dark: self.theme.is_dark(),
        })
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("index", &self.index)
            .field("len", &self.timeline.len())
            .field("theme", &self.theme)
            .field("on_complete", &self.on_complete.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::model::{ContentModel, Layer, Shift};

    fn timeline() -> Timeline {
        // [Layer 1, Shift 1, Shift 2, Summary]
        Timeline::build(&ContentModel {
            layers: vec![Layer {
                id: "1".to_string(),
                title: "Foundations".to_string(),
                body: vec![],
            }],
            shifts: vec![
                Shift {
                    id: "1".to_string(),
                    layer_id: "1".to_string(),
                    title: "Remote first".to_string(),
                    body: vec![],
                },
                Shift {
                    id: "2".to_string(),
                    layer_id: "1".to_string(),
                    title: "Four day week".to_string(),
                    body: vec![],
                },
            ],
        })
    }

    #[test]
    fn advance_and_retreat_walk_the_sequence() {
        let mut nav = Navigator::new(timeline(), Theme::Light);
        assert_eq!(nav.advance(), Step::Advanced);
        assert_eq!(nav.advance(), Step::Advanced);
        assert_eq!(nav.current_index(), 2);
        assert_eq!(nav.retreat(), Step::Retreated);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn round_trip_restores_index_away_from_boundaries() {
        let mut nav = Navigator::new(timeline(), Theme::Light).with_initial_index(1);
        nav.advance();
        nav.retreat();
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn completion_hook_fires_on_every_call_at_the_end() {
        let hits = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&hits);
        let mut nav = Navigator::new(timeline(), Theme::Light)
            .with_initial_index(3)
            .on_complete(move || seen.set(seen.get() + 1));

        assert_eq!(nav.advance(), Step::Completed);
        assert_eq!(nav.advance(), Step::Completed);
        assert_eq!(nav.current_index(), 3);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn exit_hook_fires_at_the_start_without_moving() {
        let hits = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&hits);
        let mut nav =
            Navigator::new(timeline(), Theme::Light).on_exit(move || seen.set(seen.get() + 1));

        assert_eq!(nav.retreat(), Step::Exited);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn missing_hooks_make_boundaries_a_no_op() {
        let mut nav = Navigator::new(timeline(), Theme::Light);
        assert_eq!(nav.retreat(), Step::Exited);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn out_of_range_index_stalls_and_fires_nothing() {
        let hits = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&hits);
        let mut nav = Navigator::new(timeline(), Theme::Light)
            .with_initial_index(99)
            .on_complete(move || seen.set(seen.get() + 1));

        assert!(nav.current().is_none());
        assert_eq!(nav.advance(), Step::Stalled);
        assert_eq!(nav.retreat(), Step::Stalled);
        assert_eq!(nav.current_index(), 99);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn view_selects_item_labels_and_theme() {
        let nav = Navigator::new(timeline(), Theme::Dark).with_initial_index(1);
        let view = nav.view(&LabelSet::default()).unwrap();
        assert!(matches!(view.item, TimelineItem::Shift(s) if s.id == "1"));
        assert_eq!(view.next_label, "Shift 2: Four day week");
        assert_eq!(view.prev_label, "Layer 1 Intro");
        assert!(view.is_dark);
    }
}
