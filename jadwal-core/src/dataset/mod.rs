use std::str::FromStr;

use anyhow::{bail, Context};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{info, warn};

pub mod alnoor;

/// Sentinel marking a period without a subject, also accepted in the teacher
/// field of such periods.
pub const FREE_PERIOD: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Day {
  pub id: String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectInfo {
  pub name: String,
  pub icon: String,
  pub color: String,
  pub text_color: String,
  pub border_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeriodLabel {
  pub number: u8,
  pub label: String,
  pub time: String,
}

/// One row of a class schedule, exactly as the school exports it. `period`
/// holds the period number as text and `time` a `HH:MM - HH:MM` range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeriodEntry {
  pub period: String,
  pub time: String,
  pub subject: String,
  pub teacher: String,
}

/// Class name to that class's ordered periods.
pub type DaySchedule = IndexMap<String, Vec<PeriodEntry>>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
  pub days: Vec<Day>,
  pub subjects: IndexMap<String, SubjectInfo>,
  pub periods: Vec<PeriodLabel>,
  pub raw_data: IndexMap<String, DaySchedule>,
}

impl Dataset {
  pub fn from_json(json: &str) -> anyhow::Result<Self> {
    let dataset: Dataset = serde_json::from_str(json).context("invalid timetable json")?;

    let classes: usize = dataset.raw_data.values().map(|day| day.len()).sum();
    info!(
      "loaded timetable with {} days, {} subjects and {} class schedules",
      dataset.days.len(),
      dataset.subjects.len(),
      classes
    );

    Ok(dataset)
  }

  /// Rejects defects the projections are not prepared to survive and warns
  /// about irregularities they degrade on.
  pub fn validate(&self) -> anyhow::Result<()> {
    for (index, day) in self.days.iter().enumerate() {
      if self.days[..index].iter().any(|other| other.id == day.id) {
        bail!("duplicate day id {}", day.id);
      }
    }

    let mut names: Vec<&str> = Vec::new();
    for subject in self.subjects.values() {
      if names.contains(&subject.name.as_str()) {
        warn!("subject name {} maps to more than one record, the first one wins", subject.name);
      } else {
        names.push(&subject.name);
      }
    }

    for (day_name, day) in &self.raw_data {
      if !self.days.iter().any(|day| &day.name == day_name) {
        warn!("schedule day {} is not listed under days", day_name);
      }

      for (class_name, entries) in day {
        for entry in entries {
          if u8::from_str(&entry.period).is_err() {
            bail!(
              "{} / {}: period {:?} is not a number",
              day_name,
              class_name,
              entry.period
            );
          }

          if !entry.time.contains(" - ") {
            warn!(
              "{} / {}: time {:?} has no start-end separator",
              day_name, class_name, entry.time
            );
          }
        }
      }
    }

    Ok(())
  }

  pub fn day(&self, id: &str) -> Option<&Day> {
    self.days.iter().find(|day| day.id == id)
  }

  pub(crate) fn day_schedule(&self, day_id: &str) -> Option<&DaySchedule> {
    self.raw_data.get(&self.day(day_id)?.name)
  }
}

/// Periods are validated as numeric on load, anything else is an input defect.
pub(crate) fn period_number(raw: &str) -> u8 {
  u8::from_str(raw).unwrap()
}
