//! Teacher roster: which `(section, subject)` pairs each teacher teaches.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use crate::models::{Node, TeacherId};

/// Error types for roster ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// An entry could not be split into a section and a subject.
    MalformedEntry {
        teacher: TeacherId,
        entry: String,
        reason: &'static str,
    },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::MalformedEntry {
                teacher,
                entry,
                reason,
            } => write!(
                f,
                "Malformed roster entry {:?} for teacher {}: {}",
                entry, teacher, reason
            ),
        }
    }
}

impl std::error::Error for RosterError {}

/// Assignments per teacher, iterated in ascending teacher id.
///
/// Each teacher keeps its entries in insertion order. Duplicate entries are
/// kept as given; the graph builder ignores them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    assignments: BTreeMap<TeacherId, Vec<Node>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from `(teacher, [(section, subject)])` rows.
    ///
    /// Stops at the first malformed entry.
    pub fn from_pairs<I, P>(rows: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (TeacherId, P)>,
        P: IntoIterator<Item = (String, String)>,
    {
        let mut roster = Self::new();
        for (teacher, pairs) in rows {
            for (section, subject) in pairs {
                roster.add_assignment(teacher, &section, &subject)?;
            }
        }
        Ok(roster)
    }

    /// Record that `teacher` teaches `subject` to `section`.
    ///
    /// Returns `Ok(false)` when the subject is empty, meaning the teacher does
    /// not teach this section. A section must be a single non-empty token so
    /// that the `"<section> <subject>"` label splits back on its first space.
    pub fn add_assignment(
        &mut self,
        teacher: TeacherId,
        section: &str,
        subject: &str,
    ) -> Result<bool, RosterError> {
        let section = section.trim();
        let subject = subject.trim();

        if subject.is_empty() {
            return Ok(false);
        }
        if section.is_empty() {
            return Err(RosterError::MalformedEntry {
                teacher,
                entry: format!("{} {}", section, subject),
                reason: "missing section",
            });
        }
        if section.chars().any(char::is_whitespace) {
            return Err(RosterError::MalformedEntry {
                teacher,
                entry: format!("{} {}", section, subject),
                reason: "section contains whitespace",
            });
        }

        self.assignments
            .entry(teacher)
            .or_default()
            .push(Node::new(section, subject));
        Ok(true)
    }

    /// Record an assignment given as a `"<section> <subject>"` label.
    pub fn add_entry(&mut self, teacher: TeacherId, entry: &str) -> Result<(), RosterError> {
        let malformed = |reason: &'static str| RosterError::MalformedEntry {
            teacher,
            entry: entry.to_string(),
            reason,
        };

        let (section, subject) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| malformed("expected \"<section> <subject>\""))?;
        if subject.trim().is_empty() {
            return Err(malformed("missing subject"));
        }

        self.add_assignment(teacher, section, subject).map(|_| ())
    }

    /// Assignments of one teacher, in insertion order.
    pub fn assignments(&self, teacher: TeacherId) -> &[Node] {
        self.assignments
            .get(&teacher)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All teachers with their assignments, ascending by teacher id.
    pub fn teachers(&self) -> impl Iterator<Item = (TeacherId, &[Node])> {
        self.assignments.iter().map(|(&t, nodes)| (t, nodes.as_slice()))
    }

    /// Distinct sections in order of first appearance.
    pub fn sections(&self) -> Vec<String> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut sections = Vec::new();
        for nodes in self.assignments.values() {
            for node in nodes {
                if seen.insert(node.section.as_str()) {
                    sections.push(node.section.clone());
                }
            }
        }
        sections
    }

    pub fn teacher_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
