use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::dataset::{period_number, SubjectInfo};
use crate::teacher::split_teachers;
use crate::Timetable;

/// One period covered by a teacher, with co-taught classes merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherSlot {
  pub period: u8,
  pub time: String,
  pub class_names: Vec<String>,
  pub subject: SubjectInfo,
}

impl Timetable {
  /// The periods one teacher covers on one day. Classes taught jointly in
  /// the same period collapse into a single slot listing all class names.
  pub fn teacher_schedule(&self, day_id: &str, teacher_name: &str) -> Vec<TeacherSlot> {
    if teacher_name.is_empty() {
      return Vec::new();
    }

    let day = match self.dataset.day_schedule(day_id) {
      Some(day) => day,
      None => return Vec::new(),
    };

    let mut slots: IndexMap<&str, TeacherSlot> = IndexMap::new();

    for (class_name, entries) in day {
      for entry in entries {
        if !split_teachers(&entry.teacher).contains(&teacher_name) {
          continue;
        }

        match slots.entry(entry.period.as_str()) {
          Entry::Occupied(mut slot) => {
            if !slot.get().class_names.contains(class_name) {
              slot.get_mut().class_names.push(class_name.clone());
            }
          }
          Entry::Vacant(slot) => {
            slot.insert(TeacherSlot {
              period: period_number(&entry.period),
              time: entry.time.clone(),
              class_names: vec![class_name.clone()],
              subject: self.dataset.resolve_subject(&entry.subject),
            });
          }
        }
      }
    }

    let mut slots = slots.into_values().collect::<Vec<TeacherSlot>>();
    slots.sort_by_key(|slot| slot.period);
    slots
  }
}
