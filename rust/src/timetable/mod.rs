//! Slot assignment and rendering of the weekly timetable.
//!
//! Color classes from the coloring step are laid onto a fixed grid of slots
//! per section. The grid is rendered as one row per day.

mod assigner;
mod render;
mod schedule;

pub use assigner::{SlotAssigner, SlotError};
pub use render::Timetable;
pub use schedule::{SectionSchedule, Slot, FREE_LABEL};
