//! Rust implementation of the conflict-graph timetable generator.
//!
//! Each teacher's `(section, subject)` assignments form a clique in a conflict
//! graph. The graph is colored greedily and colors are laid onto a fixed weekly
//! slot grid per section.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use std::collections::HashMap;

pub mod coloring;
mod config;
pub mod generator;
pub mod graph;
mod interner;
pub mod logging;
mod models;
pub mod roster;
pub mod timetable;

pub use coloring::{color_graph, degree_order, Color, Coloring};
pub use config::{ConfigError, TimetableConfig, DEFAULT_DAY_NAMES, DEFAULT_TOTAL_SLOTS};
pub use generator::{Generation, TimetableError, TimetableGenerator};
pub use graph::ConflictGraph;
pub use interner::{NodeId, NodeInterner};
pub use models::{ColorReport, Node, TeacherId, TimetableResult};
pub use roster::{Roster, RosterError};
pub use timetable::{SectionSchedule, Slot, SlotAssigner, SlotError, Timetable, FREE_LABEL};

fn to_py_err(err: TimetableError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

fn roster_from_py(roster: HashMap<TeacherId, Vec<(String, String)>>) -> PyResult<Roster> {
    Roster::from_pairs(roster).map_err(|e| to_py_err(e.into()))
}

/// Generate a timetable from a roster.
///
/// # Arguments
/// * `roster` - Dict mapping teacher id to a list of (section, subject) pairs.
///   Pairs with an empty subject are skipped.
/// * `sections` - Report order of sections (default: order of first appearance)
/// * `config` - Grid shape and verbosity (default: 15 slots over Monday..Friday)
///
/// # Returns
/// * TimetableResult with per-section slots, day grids, CSV text and the color report
///
/// # Raises
/// * ValueError on a malformed roster entry, an invalid config, an unknown or
///   duplicate section, or a section with more subjects than slots
#[pyfunction]
#[pyo3(signature = (roster, sections=None, config=None))]
fn generate_timetable(
    roster: HashMap<TeacherId, Vec<(String, String)>>,
    sections: Option<Vec<String>>,
    config: Option<TimetableConfig>,
) -> PyResult<TimetableResult> {
    let roster = roster_from_py(roster)?;
    let sections = sections.unwrap_or_else(|| roster.sections());
    let generator = TimetableGenerator::new(config.unwrap_or_default());

    let generation = generator.generate(&roster, &sections).map_err(to_py_err)?;
    let timetable = &generation.timetable;

    let mut result = TimetableResult {
        sections: timetable.sections().to_vec(),
        report: generation.coloring.report(),
        ..TimetableResult::default()
    };
    for schedule in timetable.schedules() {
        let section = &schedule.section;
        result.schedules.insert(section.clone(), schedule.labels());
        if let Some(grid) = timetable.grid(section) {
            result.grids.insert(section.clone(), grid);
        }
        if let Some(csv) = timetable.to_csv(section) {
            result.csv.insert(section.clone(), csv);
        }
    }
    Ok(result)
}

/// Build and color the conflict graph without assigning slots.
///
/// # Raises
/// * ValueError on a malformed roster entry
#[pyfunction]
#[pyo3(signature = (roster, verbosity=0))]
fn color_conflict_graph(
    roster: HashMap<TeacherId, Vec<(String, String)>>,
    verbosity: u8,
) -> PyResult<ColorReport> {
    let roster = roster_from_py(roster)?;
    let graph = ConflictGraph::from_roster(&roster, verbosity);
    Ok(color_graph(&graph, verbosity).report())
}

/// The timetable.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<TimetableConfig>()?;
    m.add_class::<ColorReport>()?;
    m.add_class::<TimetableResult>()?;

    m.add_function(wrap_pyfunction!(generate_timetable, m)?)?;
    m.add_function(wrap_pyfunction!(color_conflict_graph, m)?)?;

    Ok(())
}
