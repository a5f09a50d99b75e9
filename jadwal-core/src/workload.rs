use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::teacher::split_teachers;
use crate::Timetable;

/// Distinct weekly sessions of one teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherLoad {
  pub teacher: String,
  pub sessions: u32,
}

impl Timetable {
  /// Weekly session counts per teacher, busiest first. A session is one
  /// (day, period, teacher) slot; a teacher listed by several classes for
  /// the same slot is counted once. Teachers with equal counts keep the
  /// order they were first seen in.
  pub fn workload(&self) -> &[TeacherLoad] {
    self.workload.get_or_init(|| {
      let mut sessions: IndexSet<(&str, &str, &str)> = IndexSet::new();

      for (day_name, day) in &self.dataset.raw_data {
        for entries in day.values() {
          for entry in entries {
            for name in split_teachers(&entry.teacher) {
              sessions.insert((day_name.as_str(), entry.period.as_str(), name));
            }
          }
        }
      }

      let mut counts: IndexMap<&str, u32> = IndexMap::new();
      for &(_, _, name) in &sessions {
        *counts.entry(name).or_insert(0) += 1;
      }

      let mut loads = counts
        .into_iter()
        .map(|(teacher, sessions)| TeacherLoad {
          teacher: teacher.to_string(),
          sessions,
        })
        .collect::<Vec<TeacherLoad>>();

      loads.sort_by(|a, b| b.sessions.cmp(&a.sessions));

      debug!("aggregated weekly load of {} teachers", loads.len());
      loads
    })
  }
}
