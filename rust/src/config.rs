//! Configuration types for timetable generation.

use pyo3::prelude::*;
use thiserror::Error;

/// Default number of bookable slots per section per week.
pub const DEFAULT_TOTAL_SLOTS: usize = 15;

/// Default day names, in display order.
pub const DEFAULT_DAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Errors for a grid configuration that cannot hold a timetable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("total_slots must be at least 1")]
    NoSlots,
    #[error("day_names must not be empty")]
    NoDays,
    #[error("{total_slots} slots cannot be split across {days} days")]
    FewerSlotsThanDays { total_slots: usize, days: usize },
}

/// Weekly grid shape and logging level for a generation run.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableConfig {
    /// Slots per section per week
    #[pyo3(get, set)]
    pub total_slots: usize,
    /// Day labels; the grid has one row per day
    #[pyo3(get, set)]
    pub day_names: Vec<String>,
    /// Verbosity level: 0=silent, 1=summary, 2=decisions, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            total_slots: DEFAULT_TOTAL_SLOTS,
            day_names: DEFAULT_DAY_NAMES.iter().map(|d| d.to_string()).collect(),
            verbosity: 0,
        }
    }
}

impl TimetableConfig {
    /// Slots shown per day row. Any remainder of the integer division is not rendered.
    pub fn slots_per_day(&self) -> usize {
        if self.day_names.is_empty() {
            return 0;
        }
        self.total_slots / self.day_names.len()
    }

    /// Check that the grid has at least one slot per day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_slots == 0 {
            return Err(ConfigError::NoSlots);
        }
        if self.day_names.is_empty() {
            return Err(ConfigError::NoDays);
        }
        if self.slots_per_day() == 0 {
            return Err(ConfigError::FewerSlotsThanDays {
                total_slots: self.total_slots,
                days: self.day_names.len(),
            });
        }
        Ok(())
    }
}

#[pymethods]
impl TimetableConfig {
    #[new]
    #[pyo3(signature = (total_slots=None, day_names=None, verbosity=None))]
    fn new(total_slots: Option<usize>, day_names: Option<Vec<String>>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            total_slots: total_slots.unwrap_or(defaults.total_slots),
            day_names: day_names.unwrap_or(defaults.day_names),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "TimetableConfig(total_slots={}, days={}, verbosity={})",
            self.total_slots,
            self.day_names.len(),
            self.verbosity
        )
    }
}
