//! Relato is the slide-timeline core of a scroll-driven report presentation.
//!
//! The pipeline is deliberately small and staged:
//!
//! 1. **Load**: [`ContentModel`] (layers + shifts) from JSON, validated once
//! 2. **Flatten**: [`Timeline::build`] produces the ordered slide sequence
//!    (each layer, its shifts in id order, one terminal [`TimelineItem::Summary`])
//! 3. **Navigate**: [`Navigator`] steps a single index through the sequence,
//!    firing completion/exit hooks at the boundaries
//! 4. **Render** (external): consumers take [`Navigator::view`] — the current
//!    item, next/prev labels, and the theme flag — and draw it
//!
//! Flattening and label derivation are pure; the only mutable state is the
//! navigator's index. Translation tables ([`Translations`]) and the dev-only
//! lead-capture log ([`JsonlLeadLog`]) sit at the boundary and never block
//! or affect navigation.

#![forbid(unsafe_code)]

pub mod capture;
pub mod error;
pub mod i18n;
pub mod labels;
pub mod model;
pub mod nav;
pub mod timeline;

pub use capture::{JsonlLeadLog, LeadRecorder, LeadSubmission, RecordedLead};
pub use error::{RelatoError, RelatoResult};
pub use i18n::{StringTable, StringValue, Translations};
pub use labels::{LabelSet, next_label, prev_label};
pub use model::{ContentModel, Layer, Shift, Theme};
pub use nav::{BoundaryHook, Navigator, SlideView, Step};
pub use timeline::{Timeline, TimelineItem};
