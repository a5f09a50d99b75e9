use crate::dataset::FREE_PERIOD;
use crate::Timetable;

/// Splits a raw teacher field into the individual co-teacher names, in order
/// of appearance.
pub fn split_teachers(raw: &str) -> Vec<&str> {
  if raw.is_empty() || raw == FREE_PERIOD {
    return Vec::new();
  }

  raw
    .split('/')
    .map(str::trim)
    .filter(|name| !name.is_empty())
    .collect()
}

impl Timetable {
  /// Every individual teacher appearing anywhere in the week, sorted.
  pub fn teachers(&self) -> &[String] {
    self.teachers.get_or_init(|| {
      let mut teachers: Vec<String> = Vec::new();

      for day in self.dataset.raw_data.values() {
        for entries in day.values() {
          for entry in entries {
            for name in split_teachers(&entry.teacher) {
              if !teachers.iter().any(|known| known == name) {
                teachers.push(name.to_string());
              }
            }
          }
        }
      }

      teachers.sort();
      teachers
    })
  }
}
