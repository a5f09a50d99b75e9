use once_cell::sync::Lazy;

use crate::Timetable;

/// Master timetable of the Alnoor primary school, in the shape the school
/// exports it.
pub static ALNOOR: Lazy<Timetable> =
  Lazy::new(|| Timetable::from_json(include_str!("../../data/alnoor.json")).unwrap());
