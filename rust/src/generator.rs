//! End-to-end generation: roster -> conflict graph -> coloring -> timetable.

use thiserror::Error;

use crate::coloring::{color_graph, Coloring};
use crate::config::{ConfigError, TimetableConfig};
use crate::graph::ConflictGraph;
use crate::log_summary;
use crate::roster::{Roster, RosterError};
use crate::timetable::{SlotAssigner, SlotError, Timetable};

/// Errors that can occur during timetable generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    #[error("{0}")]
    MalformedRosterEntry(RosterError),
    #[error("Slot capacity exceeded: section {section} has more than {capacity} subjects")]
    SlotCapacityExceeded { section: String, capacity: usize },
    #[error("Unknown section: {0}")]
    UnknownSection(String),
    #[error("Duplicate section: {0}")]
    DuplicateSection(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl From<RosterError> for TimetableError {
    fn from(err: RosterError) -> Self {
        TimetableError::MalformedRosterEntry(err)
    }
}

impl From<SlotError> for TimetableError {
    fn from(err: SlotError) -> Self {
        match err {
            SlotError::CapacityExceeded { section, capacity } => {
                TimetableError::SlotCapacityExceeded { section, capacity }
            }
            SlotError::UnknownSection(s) => TimetableError::UnknownSection(s),
            SlotError::DuplicateSection(s) => TimetableError::DuplicateSection(s),
        }
    }
}

/// Everything produced by one generation run.
#[derive(Debug, Clone)]
pub struct Generation {
    pub graph: ConflictGraph,
    pub coloring: Coloring,
    pub timetable: Timetable,
}

/// Runs the full pipeline. All state is rebuilt on every call.
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    config: TimetableConfig,
}

impl TimetableGenerator {
    pub fn new(config: TimetableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Build the conflict graph, color it, and lay the colors onto slots.
    ///
    /// `sections` fixes report order; pass `roster.sections()` to report
    /// sections in order of first appearance.
    pub fn generate(&self, roster: &Roster, sections: &[String]) -> Result<Generation, TimetableError> {
        self.config.validate()?;
        let verbosity = self.config.verbosity;

        log_summary!(
            verbosity,
            "[generate] {} teachers, {} sections, {} slots/section",
            roster.teacher_count(),
            sections.len(),
            self.config.total_slots
        );

        let graph = ConflictGraph::from_roster(roster, verbosity);
        let coloring = color_graph(&graph, verbosity);
        let timetable = SlotAssigner::new(&self.config).assign(&coloring, sections)?;

        Ok(Generation {
            graph,
            coloring,
            timetable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;
    use crate::timetable::Slot;

    fn roster(rows: &[(u32, &[(&str, &str)])]) -> Roster {
        Roster::from_pairs(rows.iter().map(|(teacher, pairs)| {
            (
                *teacher,
                pairs
                    .iter()
                    .map(|(sec, sub)| (sec.to_string(), sub.to_string()))
                    .collect::<Vec<_>>(),
            )
        }))
        .unwrap()
    }

    #[test]
    fn test_end_to_end_two_teachers() {
        let roster = roster(&[
            (1, &[("SecA", "Math"), ("SecB", "Math")]),
            (2, &[("SecA", "English")]),
        ]);
        let generation = TimetableGenerator::default()
            .generate(&roster, &roster.sections())
            .unwrap();

        let sec_a_math = Node::new("SecA", "Math");
        let sec_b_math = Node::new("SecB", "Math");
        let sec_a_english = Node::new("SecA", "English");

        assert!(generation.graph.are_adjacent(&sec_a_math, &sec_b_math));
        assert!(!generation.graph.are_adjacent(&sec_a_math, &sec_a_english));

        assert_eq!(generation.coloring.color(&sec_a_math), Some(1));
        assert_eq!(generation.coloring.color(&sec_b_math), Some(2));
        assert_eq!(generation.coloring.color(&sec_a_english), Some(1));

        let sec_a = generation.timetable.schedule("SecA").unwrap();
        assert_eq!(sec_a.slot(1), Some(&Slot::Occupied("Math".to_string())));
        assert_eq!(sec_a.slot(2), Some(&Slot::Occupied("English".to_string())));
        assert!((3..=15).all(|p| sec_a.slot(p) == Some(&Slot::Free)));

        let grid = generation.timetable.grid("SecA").unwrap();
        assert_eq!(grid[1], vec!["Monday", "Math", "English", "Free"]);
    }

    #[test]
    fn test_empty_roster_succeeds() {
        let generation = TimetableGenerator::default()
            .generate(&Roster::new(), &["SecA".to_string()])
            .unwrap();

        assert!(generation.graph.is_empty());
        assert_eq!(generation.coloring.color_count(), 0);
        assert_eq!(
            generation.timetable.schedule("SecA").unwrap().free_count(),
            15
        );
    }

    #[test]
    fn test_capacity_error_is_typed() {
        let subjects: Vec<String> = (1..=16).map(|i| format!("Subject{}", i)).collect();
        let pairs: Vec<(&str, &str)> = subjects.iter().map(|s| ("SecA", s.as_str())).collect();
        let roster = roster(&[(1, &pairs)]);

        let err = TimetableGenerator::default()
            .generate(&roster, &roster.sections())
            .unwrap_err();
        assert_eq!(
            err,
            TimetableError::SlotCapacityExceeded {
                section: "SecA".to_string(),
                capacity: 15
            }
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let generator = TimetableGenerator::new(TimetableConfig {
            total_slots: 3,
            ..TimetableConfig::default()
        });
        let err = generator.generate(&Roster::new(), &[]).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidConfig(_)));
    }

    #[test]
    fn test_roster_error_converts() {
        let mut roster = Roster::new();
        let err: TimetableError = roster.add_entry(4, "NoSubject").unwrap_err().into();
        assert!(matches!(err, TimetableError::MalformedRosterEntry(_)));
        assert!(err.to_string().contains("teacher 4"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let roster = roster(&[
            (1, &[("A", "Math"), ("B", "Math"), ("C", "Math")]),
            (2, &[("A", "English"), ("C", "English")]),
            (3, &[("B", "History"), ("A", "History")]),
        ]);
        let generator = TimetableGenerator::default();
        let first = generator.generate(&roster, &roster.sections()).unwrap();
        let second = generator.generate(&roster, &roster.sections()).unwrap();

        assert_eq!(first.coloring, second.coloring);
        assert_eq!(first.timetable, second.timetable);
        assert!(first.coloring.is_proper(&first.graph));
    }
}
