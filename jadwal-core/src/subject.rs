use crate::dataset::{Dataset, SubjectInfo};

impl Dataset {
  /// Looks a display name up in the subject table. Unknown subjects get a
  /// neutral record so every period stays renderable; the fabricated record
  /// is never written back into the table.
  pub fn resolve_subject(&self, name: &str) -> SubjectInfo {
    match self.subjects.values().find(|subject| subject.name == name) {
      Some(subject) => subject.clone(),
      None => SubjectInfo {
        name: name.to_string(),
        icon: "📚".to_string(),
        color: "#f5f5f5".to_string(),
        text_color: "#333".to_string(),
        border_color: "#ddd".to_string(),
      },
    }
  }
}
