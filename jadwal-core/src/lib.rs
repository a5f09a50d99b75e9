use once_cell::sync::OnceCell;

use crate::dataset::{Dataset, Day, SubjectInfo, FREE_PERIOD};
use crate::workload::TeacherLoad;

pub mod clock;
pub mod dataset;
mod subject;
pub mod teacher;
pub mod view;
pub mod workload;

/// Read-only handle over one school's weekly timetable, answering the
/// by-class, by-slot and by-teacher questions the dataset supports. The
/// projections are pure; the two week-wide aggregates are computed once.
pub struct Timetable {
  dataset: Dataset,
  teachers: OnceCell<Vec<String>>,
  workload: OnceCell<Vec<TeacherLoad>>,
}

impl Timetable {
  pub fn new(dataset: Dataset) -> Self {
    Self {
      dataset,
      teachers: OnceCell::new(),
      workload: OnceCell::new(),
    }
  }

  pub fn from_json(json: &str) -> anyhow::Result<Self> {
    let dataset = Dataset::from_json(json)?;
    dataset.validate()?;

    Ok(Self::new(dataset))
  }

  pub fn dataset(&self) -> &Dataset {
    &self.dataset
  }

  pub fn days(&self) -> &[Day] {
    &self.dataset.days
  }

  pub fn day(&self, id: &str) -> Option<&Day> {
    self.dataset.day(id)
  }

  /// Class names scheduled on a day, sorted for display.
  pub fn classes(&self, day_id: &str) -> Vec<String> {
    let mut classes = match self.dataset.day_schedule(day_id) {
      Some(day) => day.keys().cloned().collect::<Vec<String>>(),
      None => return Vec::new(),
    };

    classes.sort();
    classes
  }

  /// Legend of real subjects, skipping the free-period placeholder record.
  pub fn subjects(&self) -> Vec<&SubjectInfo> {
    self
      .dataset
      .subjects
      .values()
      .filter(|subject| subject.name != FREE_PERIOD)
      .collect()
  }

  /// Canonical number of periods in a school day.
  pub fn period_count(&self) -> usize {
    self.dataset.periods.len()
  }
}
