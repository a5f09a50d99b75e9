use crate::dataset::{period_number, SubjectInfo, FREE_PERIOD};
use crate::Timetable;

/// One period of a class day, resolved for display. `subject` is `None` only
/// for free periods; the teacher field keeps co-teachers joined as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPeriod {
  pub period: u8,
  pub time: String,
  pub subject: Option<SubjectInfo>,
  pub teacher: Option<String>,
}

impl Timetable {
  /// The ordered periods of one class on one day. Unknown selections produce
  /// an empty schedule, not an error.
  pub fn class_schedule(&self, day_id: &str, class_name: &str) -> Vec<ResolvedPeriod> {
    let entries = match self
      .dataset
      .day_schedule(day_id)
      .and_then(|day| day.get(class_name))
    {
      Some(entries) => entries,
      None => return Vec::new(),
    };

    entries
      .iter()
      .map(|entry| {
        let subject = if entry.subject == FREE_PERIOD {
          None
        } else {
          Some(self.dataset.resolve_subject(&entry.subject))
        };

        let teacher = if entry.teacher.is_empty() || entry.teacher == FREE_PERIOD {
          None
        } else {
          Some(entry.teacher.clone())
        };

        ResolvedPeriod {
          period: period_number(&entry.period),
          time: entry.time.clone(),
          subject,
          teacher,
        }
      })
      .collect()
  }
}
