//! Field validation for constructed tips.
//!
//! Every rule runs; nothing short-circuits. The returned order is the rule
//! order below, which is also the order callers see in rejection messages.

use thiserror::Error;

use crate::tip::{Channel, TipDraft, Urgency};

/// Minimum description length, counted in characters after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// A single failed rule. `Display` is the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
  #[error("Description must be at least 10 characters")]
  DescriptionTooShort,
  #[error("Crime type is required")]
  MissingCrimeType,
  #[error("Location is required")]
  MissingLocation,
  #[error("Invalid urgency level")]
  InvalidUrgency,
  #[error("Invalid submission channel")]
  InvalidChannel,
}

impl serde::Serialize for Violation {
  fn serialize<S: serde::Serializer>(
    &self,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

/// Check `draft` against every rule. An empty list means valid.
pub fn validate(draft: &TipDraft) -> Vec<Violation> {
  let mut violations = Vec::new();

  if draft.description().trim().chars().count() < MIN_DESCRIPTION_CHARS {
    violations.push(Violation::DescriptionTooShort);
  }
  if draft.crime_type().is_empty() {
    violations.push(Violation::MissingCrimeType);
  }
  if draft.location().is_empty() {
    violations.push(Violation::MissingLocation);
  }
  if draft.urgency().parse::<Urgency>().is_err() {
    violations.push(Violation::InvalidUrgency);
  }
  if draft.submission_channel().parse::<Channel>().is_err() {
    violations.push(Violation::InvalidChannel);
  }

  violations
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tip::NewTip;

  fn draft(description: &str) -> TipDraft {
    TipDraft::new(NewTip {
      description: Some(description.into()),
      crime_type: Some("general".into()),
      location: Some("Somewhere".into()),
      submission_channel: Some("web".into()),
      ..NewTip::default()
    })
  }

  #[test]
  fn valid_draft_has_no_violations() {
    assert!(validate(&draft("A long enough description")).is_empty());
  }

  #[test]
  fn description_is_trimmed_before_counting() {
    assert_eq!(
      validate(&draft("   short    ")),
      vec![Violation::DescriptionTooShort]
    );
    assert!(validate(&draft("  exactly10!  ")).is_empty());
  }

  #[test]
  fn short_description_flagged_regardless_of_other_fields() {
    let bad = TipDraft::new(NewTip {
      description: Some("tiny".into()),
      urgency: Some("whenever".into()),
      ..NewTip::default()
    });
    let violations = validate(&bad);
    assert_eq!(violations[0], Violation::DescriptionTooShort);
    assert_eq!(violations, vec![
      Violation::DescriptionTooShort,
      Violation::MissingCrimeType,
      Violation::MissingLocation,
      Violation::InvalidUrgency,
      Violation::InvalidChannel,
    ]);
  }

  #[test]
  fn messages_match_rule_text() {
    assert_eq!(
      Violation::MissingLocation.to_string(),
      "Location is required"
    );
    assert_eq!(
      Violation::InvalidChannel.to_string(),
      "Invalid submission channel"
    );
  }
}
