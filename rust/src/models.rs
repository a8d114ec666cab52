//! Core data types for the timetable generator.

use pyo3::prelude::*;
use std::collections::HashMap;
use std::fmt;

// Note: We use std HashMap for the PyO3-facing result types

/// Teacher identifier as it appears in the roster.
pub type TeacherId = u32;

/// A `(section, subject)` assignment; one vertex of the conflict graph.
///
/// Ordering is lexicographic on section, then subject. That order breaks
/// ties wherever the generator needs a deterministic sequence of nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    pub section: String,
    pub subject: String,
}

impl Node {
    pub fn new(section: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            subject: subject.into(),
        }
    }

    /// Label used in reports: `"<section> <subject>"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.section, self.subject)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.section, self.subject)
    }
}

/// Per-color diagnostics of a coloring run.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorReport {
    /// color -> node labels sharing that color, in coloring order
    #[pyo3(get)]
    pub color_nodes: HashMap<u32, Vec<String>>,
    /// color -> number of nodes using it
    #[pyo3(get)]
    pub color_usage: HashMap<u32, usize>,
}

impl ColorReport {
    /// Text rendering: one `Color k: ...` line per color, then usage lines.
    pub fn render(&self) -> String {
        let mut colors: Vec<u32> = self.color_nodes.keys().copied().collect();
        colors.sort_unstable();

        let mut out = String::from("Color Node Map:\n");
        for color in &colors {
            out.push_str(&format!(
                "Color {}: {}\n",
                color,
                self.color_nodes[color].join(" ")
            ));
        }
        out.push_str("\nColor Usage:\n");
        for color in &colors {
            let usage = self.color_usage.get(color).copied().unwrap_or(0);
            out.push_str(&format!("Color {} used {} times\n", color, usage));
        }
        out
    }
}

#[pymethods]
impl ColorReport {
    /// Number of distinct colors used.
    fn color_count(&self) -> usize {
        self.color_nodes.len()
    }

    fn __str__(&self) -> String {
        self.render()
    }

    fn __repr__(&self) -> String {
        format!(
            "ColorReport(colors={}, nodes={})",
            self.color_nodes.len(),
            self.color_usage.values().sum::<usize>()
        )
    }
}

/// Result of a full generation run, as handed to Python.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct TimetableResult {
    /// Sections in report order
    #[pyo3(get)]
    pub sections: Vec<String>,
    /// section -> slot labels (subject or "Free"), slot 1 first
    #[pyo3(get)]
    pub schedules: HashMap<String, Vec<String>>,
    /// section -> day grid including the header row
    #[pyo3(get)]
    pub grids: HashMap<String, Vec<Vec<String>>>,
    /// section -> CSV text of the day grid
    #[pyo3(get)]
    pub csv: HashMap<String, String>,
    #[pyo3(get)]
    pub report: ColorReport,
}

#[pymethods]
impl TimetableResult {
    fn __repr__(&self) -> String {
        format!(
            "TimetableResult(sections={}, colors={})",
            self.sections.len(),
            self.report.color_nodes.len()
        )
    }
}
