//! Completed timetable and its day-grid / CSV rendering.

use rustc_hash::FxHashMap;

use super::schedule::{SectionSchedule, FREE_LABEL};

/// Schedules of all sections, kept in report order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timetable {
    sections: Vec<String>,
    schedules: FxHashMap<String, SectionSchedule>,
    day_names: Vec<String>,
    slots_per_day: usize,
}

impl Timetable {
    pub(crate) fn new(
        sections: Vec<String>,
        schedules: FxHashMap<String, SectionSchedule>,
        day_names: Vec<String>,
        slots_per_day: usize,
    ) -> Self {
        Self {
            sections,
            schedules,
            day_names,
            slots_per_day,
        }
    }

    /// Sections in report order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn schedule(&self, section: &str) -> Option<&SectionSchedule> {
        self.schedules.get(section)
    }

    /// Schedules in report order.
    pub fn schedules(&self) -> impl Iterator<Item = &SectionSchedule> {
        self.sections.iter().filter_map(|s| self.schedules.get(s))
    }

    /// Header row: `Day, Slot 1 .. Slot k`.
    pub fn header(&self) -> Vec<String> {
        std::iter::once("Day".to_string())
            .chain((1..=self.slots_per_day).map(|i| format!("Slot {}", i)))
            .collect()
    }

    /// Header plus one row per day. Slots are taken in order, `slots_per_day`
    /// per row; slots past `days * slots_per_day` are not shown.
    pub fn grid(&self, section: &str) -> Option<Vec<Vec<String>>> {
        let schedule = self.schedules.get(section)?;
        let slots = schedule.slots();

        let mut rows = Vec::with_capacity(self.day_names.len() + 1);
        rows.push(self.header());
        for (day_index, day) in self.day_names.iter().enumerate() {
            let mut row = Vec::with_capacity(self.slots_per_day + 1);
            row.push(day.clone());
            for offset in 0..self.slots_per_day {
                let label = slots
                    .get(day_index * self.slots_per_day + offset)
                    .map(|s| s.label())
                    .unwrap_or(FREE_LABEL);
                row.push(label.to_string());
            }
            rows.push(row);
        }
        Some(rows)
    }

    /// The day grid as CSV text, one line per row.
    pub fn to_csv(&self, section: &str) -> Option<String> {
        let grid = self.grid(section)?;
        let mut out = String::new();
        for row in grid {
            let line: Vec<String> = row.iter().map(|cell| csv_field(cell)).collect();
            out.push_str(&line.join(","));
            out.push_str("\r\n");
        }
        Some(out)
    }

    /// One `Section <name>: 1-Math 2-Free ...` line per section.
    pub fn summary(&self) -> String {
        self.schedules()
            .map(|s| format!("Section {}: {}\n", s.section, s))
            .collect()
    }
}

/// Quote a field when it holds a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
