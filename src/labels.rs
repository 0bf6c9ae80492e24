use crate::timeline::{Timeline, TimelineItem};

/// Fixed words used when deriving navigation labels. The defaults are
/// English; a translated table can deserialize over them (missing keys keep
/// the default).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LabelSet {
    pub start: String,
    pub finish: String,
    pub summary: String,
    pub layer: String,
    pub shift: String,
    pub intro: String,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            start: "Back to start".to_string(),
            finish: "Finish the report".to_string(),
            summary: "Summary".to_string(),
            layer: "Layer".to_string(),
            shift: "Shift".to_string(),
            intro: "Intro".to_string(),
        }
    }
}

/// Label for the item after `index`, used as the "continue to" prompt.
pub fn next_label(timeline: &Timeline, index: usize, set: &LabelSet) -> String {
    match index.checked_add(1).and_then(|i| timeline.get(i)) {
        None => set.finish.clone(),
        Some(TimelineItem::Layer(l)) => format!("{} {}: {}", set.layer, l.id, l.title),
        Some(TimelineItem::Shift(s)) => format!("{} {}: {}", set.shift, s.id, s.title),
        Some(TimelineItem::Summary) => set.summary.clone(),
    }
}

/// Label for the item before `index`, used as the "back to" prompt.
pub fn prev_label(timeline: &Timeline, index: usize, set: &LabelSet) -> String {
    match index.checked_sub(1).and_then(|i| timeline.get(i)) {
        None => set.start.clone(),
        Some(TimelineItem::Layer(l)) => format!("{} {} {}", set.layer, l.id, set.intro),
        Some(TimelineItem::Shift(s)) => format!("{} {}", set.shift, s.id),
        Some(TimelineItem::Summary) => set.summary.clone(),
    }
}
