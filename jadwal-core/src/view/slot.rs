use indexmap::IndexMap;

use crate::dataset::period_number;
use crate::Timetable;

/// All classes sharing one (period, time) slot of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
  pub period: String,
  pub time: String,
  pub classes: Vec<SlotEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
  pub class_name: String,
  pub subject: String,
  pub teacher: String,
}

impl Timetable {
  /// Groups a whole day by its (period, time) pairs, ascending by period
  /// number. The pair is compared as text, so two entries only share a slot
  /// if both fields match verbatim.
  pub fn slots(&self, day_id: &str) -> Vec<TimeSlot> {
    let day = match self.dataset.day_schedule(day_id) {
      Some(day) => day,
      None => return Vec::new(),
    };

    let mut groups: IndexMap<(&str, &str), Vec<SlotEntry>> = IndexMap::new();

    for (class_name, entries) in day {
      for entry in entries {
        groups
          .entry((entry.period.as_str(), entry.time.as_str()))
          .or_default()
          .push(SlotEntry {
            class_name: class_name.clone(),
            subject: entry.subject.clone(),
            teacher: entry.teacher.clone(),
          });
      }
    }

    let mut slots = groups
      .into_iter()
      .map(|((period, time), classes)| TimeSlot {
        period: period.to_string(),
        time: time.to_string(),
        classes,
      })
      .collect::<Vec<TimeSlot>>();

    slots.sort_by_key(|slot| period_number(&slot.period));
    slots
  }
}
