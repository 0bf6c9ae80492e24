use std::cmp::Ordering;

use crate::model::{ContentModel, Layer, Shift};

/// One navigable slide in the flattened report sequence.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum TimelineItem {
    Layer(Layer),
    Shift(Shift),
    Summary,
}

impl TimelineItem {
    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary)
    }
}

/// Flattened, ordered report sequence: each layer in input order, followed
/// by its shifts in id order, terminated by exactly one `Summary`.
///
/// Built once from a [`ContentModel`] and read-only afterwards; the
/// navigator owns the built value for the lifetime of the presentation.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Timeline {
    items: Vec<TimelineItem>,
}

impl Timeline {
    /// Flatten `model` into the navigable sequence.
    ///
    /// Shifts whose `layer_id` matches no layer are dropped (and warned
    /// about); every kept shift appears under its layer. Deterministic for
    /// a given model.
    #[tracing::instrument(skip(model))]
    pub fn build(model: &ContentModel) -> Self {
        let orphans = model.orphan_shifts();
        if !orphans.is_empty() {
            tracing::warn!(
                count = orphans.len(),
                ids = ?orphans.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
                "dropping shifts with no matching layer"
            );
        }

        let mut sorted: Vec<&Shift> = model.shifts.iter().collect();
        sorted.sort_by(|a, b| shift_order(a, b));

        let mut items = Vec::with_capacity(model.layers.len() + model.shifts.len() + 1);
        for layer in &model.layers {
            items.push(TimelineItem::Layer(layer.clone()));
            for shift in sorted.iter().filter(|s| s.layer_id == layer.id) {
                items.push(TimelineItem::Shift((*shift).clone()));
            }
        }
        items.push(TimelineItem::Summary);

        Self { items }
    }

    /// Total item count. Always >= 1 (the terminal `Summary`).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&TimelineItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineItem> {
        self.items.iter()
    }
}

/// Ordering for shifts within a layer: ids that parse as `u64` sort
/// ascending by value; ids that do not parse sort after all numeric ids;
/// remaining ties order lexicographically by the raw id, so the ordering
/// is total and deterministic.
fn shift_order(a: &Shift, b: &Shift) -> Ordering {
    id_rank(&a.id)
        .cmp(&id_rank(&b.id))
        .then_with(|| a.id.cmp(&b.id))
}

fn id_rank(id: &str) -> (bool, u64) {
    match id.trim().parse::<u64>() {
        Ok(n) => (false, n),
        Err(_) => (true, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(id: &str, layer_id: &str, title: &str) -> Shift {
        Shift {
            id: id.to_string(),
            layer_id: layer_id.to_string(),
            title: title.to_string(),
            body: vec![],
        }
    }

    fn layer(id: &str, title: &str) -> Layer {
        Layer {
            id: id.to_string(),
            title: title.to_string(),
            body: vec![],
        }
    }

    #[test]
    fn numeric_ids_sort_by_value_not_text() {
        let a = shift("10", "1", "a");
        let b = shift("9", "1", "b");
        assert_eq!(shift_order(&a, &b), Ordering::Greater);
    }

    #[test]
    fn non_numeric_ids_sort_last_lexicographically() {
        let n = shift("3", "1", "n");
        let x = shift("beta", "1", "x");
        let y = shift("alpha", "1", "y");
        assert_eq!(shift_order(&n, &x), Ordering::Less);
        assert_eq!(shift_order(&y, &x), Ordering::Less);
    }

    #[test]
    fn build_appends_single_trailing_summary() {
        let model = ContentModel {
            layers: vec![layer("1", "Intro")],
            shifts: vec![],
        };
        let tl = Timeline::build(&model);
        assert_eq!(tl.len(), 2);
        assert!(tl.get(tl.last_index()).unwrap().is_summary());
        assert_eq!(tl.iter().filter(|i| i.is_summary()).count(), 1);
    }

    #[test]
    fn empty_model_builds_summary_only() {
        let model = ContentModel {
            layers: vec![],
            shifts: vec![],
        };
        let tl = Timeline::build(&model);
        assert_eq!(tl.len(), 1);
        assert!(tl.get(0).unwrap().is_summary());
    }

    #[test]
    fn shifts_group_under_their_layer_in_id_order() {
        let model = ContentModel {
            layers: vec![layer("1", "One"), layer("2", "Two")],
            shifts: vec![
                shift("4", "2", "d"),
                shift("2", "1", "b"),
                shift("3", "2", "c"),
                shift("1", "1", "a"),
            ],
        };
        let tl = Timeline::build(&model);
        let ids: Vec<String> = tl
            .iter()
            .map(|item| match item {
                TimelineItem::Layer(l) => format!("L{}", l.id),
                TimelineItem::Shift(s) => format!("S{}", s.id),
                TimelineItem::Summary => "sum".to_string(),
            })
            .collect();
        assert_eq!(ids, vec!["L1", "S1", "S2", "L2", "S3", "S4", "sum"]);
    }
}
