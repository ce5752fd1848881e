//! Free-text SMS tip parser.
//!
//! Accepted shapes, all introduced by the `TIP` keyword (any case):
//!
//! ```text
//! TIP <description>
//! TIP <location> | <description>
//! TIP <location> : <description>
//! TIP URGENT <location> | <description>
//! ```
//!
//! Pipeline:
//!   raw &str
//!     └─ strip `TIP`                → content
//!          └─ take_urgency()        → (Urgency, rest)
//!               └─ segment()        → (location, description)
//!                    └─ classify()  → crime type

use serde::{Deserialize, Serialize};

use crate::tip::Urgency;

pub const TIP_KEYWORD: &str = "TIP";

/// Location used when the message has no delimiter.
pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

/// Crime type used when no keyword matches.
pub const GENERAL_CRIME_TYPE: &str = "general";

/// Leading urgency keywords, checked in this order; the first prefix match
/// wins.
const URGENCY_KEYWORDS: &[(&str, Urgency)] = &[
  ("URGENT", Urgency::Critical),
  ("HIGH", Urgency::High),
  ("EMERGENCY", Urgency::Critical),
  ("CRITICAL", Urgency::Critical),
];

/// Crime categories, checked in this order; the first category with any
/// keyword appearing as a substring of the description wins.
const CRIME_KEYWORDS: &[(&str, &[&str])] = &[
  ("theft", &["theft", "steal", "stolen", "robbed", "burglary"]),
  ("assault", &["assault", "fight", "attack", "violence"]),
  ("drugs", &["drug", "drugs", "narcotic", "substance"]),
  ("suspicious_activity", &["suspicious", "strange", "unusual"]),
  ("traffic", &["accident", "traffic", "speeding"]),
];

/// The partial field set recovered from one SMS body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsFragment {
  pub description: String,
  pub location:    String,
  pub urgency:     Urgency,
  pub crime_type:  String,
}

/// Parse `message` as a tip. Returns `None` when it does not start with
/// [`TIP_KEYWORD`]; the sender should get usage help instead.
pub fn parse_tip(message: &str) -> Option<SmsFragment> {
  let text = message.trim();
  if !starts_with_ignore_case(text, TIP_KEYWORD) {
    return None;
  }
  let content = text[TIP_KEYWORD.len()..].trim();

  let (urgency, content) = take_urgency(content);
  let (location, description) = segment(content);
  let crime_type = classify(&description);

  Some(SmsFragment {
    description,
    location,
    urgency,
    crime_type: crime_type.to_owned(),
  })
}

/// Strip a leading urgency keyword, if any.
fn take_urgency(content: &str) -> (Urgency, &str) {
  URGENCY_KEYWORDS
    .iter()
    .find(|(keyword, _)| starts_with_ignore_case(content, keyword))
    .map(|(keyword, urgency)| (*urgency, content[keyword.len()..].trim()))
    .unwrap_or((Urgency::default(), content))
}

/// Split into `(location, description)` on the first `|`, else the first `:`.
fn segment(content: &str) -> (String, String) {
  let split = content
    .split_once('|')
    .or_else(|| content.split_once(':'));

  match split {
    Some((location, description)) => {
      (location.trim().to_owned(), description.trim().to_owned())
    }
    None => (LOCATION_NOT_SPECIFIED.to_owned(), content.to_owned()),
  }
}

/// Keyword-based crime type for `description`.
pub fn classify(description: &str) -> &'static str {
  let lower = description.to_lowercase();
  CRIME_KEYWORDS
    .iter()
    .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
    .map(|(category, _)| *category)
    .unwrap_or(GENERAL_CRIME_TYPE)
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
  s.get(..prefix.len())
    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn location_and_description_on_pipe() {
    let f =
      parse_tip("TIP Bole Street | Suspicious activity near the bank").unwrap();
    assert_eq!(f.location, "Bole Street");
    assert_eq!(f.description, "Suspicious activity near the bank");
    assert_eq!(f.urgency, Urgency::Medium);
    assert_eq!(f.crime_type, "suspicious_activity");
  }

  #[test]
  fn urgency_keyword_is_stripped_before_segmentation() {
    let f = parse_tip("TIP URGENT Main St | theft happened").unwrap();
    assert_eq!(f.urgency, Urgency::Critical);
    assert_eq!(f.location, "Main St");
    assert_eq!(f.crime_type, "theft");
  }

  #[test]
  fn urgency_keywords_map_in_table_order() {
    assert_eq!(parse_tip("tip high x | y").unwrap().urgency, Urgency::High);
    assert_eq!(
      parse_tip("TIP emergency x | y").unwrap().urgency,
      Urgency::Critical
    );
    assert_eq!(
      parse_tip("TIP Critical x | y").unwrap().urgency,
      Urgency::Critical
    );
  }

  #[test]
  fn urgency_match_is_a_plain_prefix() {
    let f = parse_tip("TIP Highway 5 | car accident").unwrap();
    assert_eq!(f.urgency, Urgency::High);
    assert_eq!(f.location, "way 5");
    assert_eq!(f.crime_type, "traffic");
  }

  #[test]
  fn pipe_takes_priority_over_colon() {
    let f = parse_tip("TIP Market: north gate | fight at 10:30").unwrap();
    assert_eq!(f.location, "Market: north gate");
    assert_eq!(f.description, "fight at 10:30");
    assert_eq!(f.crime_type, "assault");
  }

  #[test]
  fn colon_splits_when_no_pipe() {
    let f = parse_tip("TIP Piazza: drugs being sold: again").unwrap();
    assert_eq!(f.location, "Piazza");
    assert_eq!(f.description, "drugs being sold: again");
    assert_eq!(f.crime_type, "drugs");
  }

  #[test]
  fn no_delimiter_uses_placeholder_location() {
    let f = parse_tip("  tip someone left a bag here  ").unwrap();
    assert_eq!(f.location, LOCATION_NOT_SPECIFIED);
    assert_eq!(f.description, "someone left a bag here");
    assert_eq!(f.crime_type, GENERAL_CRIME_TYPE);
  }

  #[test]
  fn bare_keyword_yields_empty_description() {
    let f = parse_tip("TIP").unwrap();
    assert_eq!(f.description, "");
    assert_eq!(f.location, LOCATION_NOT_SPECIFIED);
  }

  #[test]
  fn non_tip_messages_are_rejected() {
    assert!(parse_tip("Hello there").is_none());
    assert!(parse_tip("").is_none());
    assert!(parse_tip("TI").is_none());
    assert!(parse_tip("my TIP is this").is_none());
  }

  #[test]
  fn first_category_in_table_order_wins() {
    // "stolen" (theft) and "attack" (assault) both present.
    assert_eq!(classify("Attacked and phone stolen"), "theft");
  }

  #[test]
  fn classification_is_substring_based() {
    assert_eq!(classify("a non-traffic-related matter"), "traffic");
  }
}
