//! Per-section slot storage.

use std::fmt;

/// Label rendered for a slot nobody occupies.
pub const FREE_LABEL: &str = "Free";

/// One bookable unit of time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Free,
    Occupied(String),
}

impl Slot {
    pub fn is_free(&self) -> bool {
        matches!(self, Slot::Free)
    }

    /// Subject label, or `"Free"`.
    pub fn label(&self) -> &str {
        match self {
            Slot::Free => FREE_LABEL,
            Slot::Occupied(subject) => subject,
        }
    }
}

/// Fixed-size weekly schedule of one section.
///
/// Invariant: a slot goes from `Free` to `Occupied` at most once and never
/// reverts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionSchedule {
    pub section: String,
    slots: Vec<Slot>,
}

impl SectionSchedule {
    /// All `total_slots` slots start free.
    pub fn new(section: impl Into<String>, total_slots: usize) -> Self {
        Self {
            section: section.into(),
            slots: vec![Slot::Free; total_slots],
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot by 1-based position, as shown to users.
    pub fn slot(&self, position: usize) -> Option<&Slot> {
        position.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    /// Whether the 0-based slot `index` is free.
    pub fn is_free(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Slot::is_free)
    }

    /// Occupy the 0-based slot `index`. Returns false if it was already taken.
    pub(crate) fn occupy(&mut self, index: usize, subject: &str) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_free() => {
                *slot = Slot::Occupied(subject.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_free()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.len() - self.free_count()
    }

    /// Slot labels in slot order.
    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.label().to_string()).collect()
    }
}

/// `1-Math 2-Free 3-English ...`
impl fmt::Display for SectionSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}-{}", i + 1, slot.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_schedule_is_all_free() {
        let schedule = SectionSchedule::new("SecA", 15);
        assert_eq!(schedule.slots().len(), 15);
        assert_eq!(schedule.free_count(), 15);
        assert_eq!(schedule.occupied_count(), 0);
        assert!(schedule.labels().iter().all(|l| l == FREE_LABEL));
    }

    #[test]
    fn test_occupy_once() {
        let mut schedule = SectionSchedule::new("SecA", 3);
        assert!(schedule.occupy(1, "Math"));
        assert!(!schedule.occupy(1, "English"));
        assert!(!schedule.occupy(3, "English"));

        assert_eq!(schedule.slot(2), Some(&Slot::Occupied("Math".to_string())));
        assert_eq!(schedule.slot(0), None);
        assert_eq!(schedule.slot(4), None);
        assert!(schedule.is_free(0));
        assert!(!schedule.is_free(1));
        assert!(!schedule.is_free(3));
        assert_eq!(schedule.occupied_count(), 1);
    }

    #[test]
    fn test_display() {
        let mut schedule = SectionSchedule::new("SecA", 3);
        schedule.occupy(0, "Math");
        schedule.occupy(2, "Computer Science");
        assert_eq!(schedule.to_string(), "1-Math 2-Free 3-Computer Science");
    }
}
