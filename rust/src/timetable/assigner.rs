//! Mapping color classes onto section slots with a shared cursor.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::coloring::Coloring;
use crate::config::TimetableConfig;
use crate::{log_debug, log_decisions, log_summary};

use super::render::Timetable;
use super::schedule::SectionSchedule;

/// Errors that can occur while laying nodes onto slots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Section {section} needs more than {capacity} slots")]
    CapacityExceeded { section: String, capacity: usize },
    #[error("Section not in section list: {0}")]
    UnknownSection(String),
    #[error("Section listed twice: {0}")]
    DuplicateSection(String),
}

/// Lays color classes onto per-section slot grids.
///
/// A single cursor is shared by every color and every section for the whole
/// run; it wraps modulo `total_slots` and is never reset. `assign` consumes
/// the assigner so each run starts from cursor 0.
pub struct SlotAssigner<'a> {
    config: &'a TimetableConfig,
    cursor: usize,
}

impl<'a> SlotAssigner<'a> {
    pub fn new(config: &'a TimetableConfig) -> Self {
        Self { config, cursor: 0 }
    }

    /// Current cursor position (0-based).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.config.total_slots;
    }

    /// Place `subject` in the first free slot of `schedule` at or after the
    /// cursor, wrapping around. Probing is bounded by the slot count.
    fn place(&mut self, schedule: &mut SectionSchedule, subject: &str) -> Result<usize, SlotError> {
        let verbosity = self.config.verbosity;
        for _ in 0..self.config.total_slots {
            if schedule.is_free(self.cursor) {
                let index = self.cursor;
                schedule.occupy(index, subject);
                self.advance();
                return Ok(index);
            }
            log_debug!(
                verbosity,
                "[slots] {} slot {} taken, probing on",
                schedule.section,
                self.cursor + 1
            );
            self.advance();
        }
        Err(SlotError::CapacityExceeded {
            section: schedule.section.clone(),
            capacity: self.config.total_slots,
        })
    }

    /// Assign every colored node to a slot of its section.
    ///
    /// Colors are visited in ascending order and nodes within a color in the
    /// order they were colored. `sections` fixes the report order; every node's
    /// section must appear in it. Sections with no nodes stay all free.
    pub fn assign(mut self, coloring: &Coloring, sections: &[String]) -> Result<Timetable, SlotError> {
        let total_slots = self.config.total_slots;
        let verbosity = self.config.verbosity;

        let mut schedules: FxHashMap<String, SectionSchedule> =
            FxHashMap::with_capacity_and_hasher(sections.len(), Default::default());
        for section in sections {
            if schedules
                .insert(section.clone(), SectionSchedule::new(section.clone(), total_slots))
                .is_some()
            {
                return Err(SlotError::DuplicateSection(section.clone()));
            }
        }

        for (color, nodes) in coloring.classes() {
            for node in nodes {
                let schedule = schedules
                    .get_mut(&node.section)
                    .ok_or_else(|| SlotError::UnknownSection(node.section.clone()))?;
                let index = self.place(schedule, &node.subject)?;
                log_decisions!(
                    verbosity,
                    "[slots] color {}: {} -> slot {}",
                    color,
                    node,
                    index + 1
                );
            }
        }

        log_summary!(
            verbosity,
            "[slots] filled {} sections, {} nodes placed",
            sections.len(),
            coloring.node_count()
        );

        Ok(Timetable::new(
            sections.to_vec(),
            schedules,
            self.config.day_names.clone(),
            self.config.slots_per_day(),
        ))
    }
}
