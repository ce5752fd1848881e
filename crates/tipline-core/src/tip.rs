//! The tip record — the canonical unit of the Tipline intake pipeline.
//!
//! Every channel adapter produces a [`NewTip`]. Construction turns it into a
//! [`TipDraft`], applying defaults and contact redaction in one step. A draft
//! that passes [`crate::validate::validate`] becomes an accepted [`Tip`].

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  lifecycle::TipStatus,
  validate::validate,
};

// ─── Urgency ─────────────────────────────────────────────────────────────────

/// How quickly a tip needs attention.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
  Low,
  #[default]
  Medium,
  High,
  Critical,
}

impl Urgency {
  pub const ALL: [Urgency; 4] =
    [Self::Low, Self::Medium, Self::High, Self::Critical];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
      Self::Critical => "critical",
    }
  }
}

impl FromStr for Urgency {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|u| u.as_str() == s)
      .ok_or_else(|| Error::UnknownUrgency(s.to_owned()))
  }
}

impl fmt::Display for Urgency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Channel ─────────────────────────────────────────────────────────────────

/// The pathway a tip arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
  App,
  Sms,
  Web,
  Phone,
}

impl Channel {
  pub const ALL: [Channel; 4] = [Self::App, Self::Sms, Self::Web, Self::Phone];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::App => "app",
      Self::Sms => "sms",
      Self::Web => "web",
      Self::Phone => "phone",
    }
  }
}

impl FromStr for Channel {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|c| c.as_str() == s)
      .ok_or_else(|| Error::UnknownChannel(s.to_owned()))
  }
}

impl fmt::Display for Channel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// Whatever subset of contact details the tipster chose to leave.
///
/// Only `name`, `phone` and `email` are kept; any other field in an incoming
/// contact object is ignored when deserialising.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
}

impl ContactInfo {
  pub fn phone(number: impl Into<String>) -> Self {
    Self {
      phone: Some(number.into()),
      ..Self::default()
    }
  }
}

// ─── NewTip ──────────────────────────────────────────────────────────────────

/// Raw field values handed over by a channel adapter.
///
/// Tag fields stay as strings here: a bad urgency or channel is a validation
/// violation, not a decoding failure.
#[derive(Debug, Clone, Default)]
pub struct NewTip {
  pub title:              Option<String>,
  pub description:        Option<String>,
  pub crime_type:         Option<String>,
  pub location:           Option<String>,
  /// `None` or empty means the channel omitted it; construction fills in
  /// `medium`.
  pub urgency:            Option<String>,
  pub is_anonymous:       bool,
  pub submission_channel: Option<String>,
  pub contact_info:       Option<ContactInfo>,
  pub attachments:        Vec<String>,
}

// ─── TipDraft ────────────────────────────────────────────────────────────────

/// A constructed but not yet validated tip.
///
/// Fields are private so that the anonymity flag and the redacted contact
/// cannot drift apart after construction.
#[derive(Debug, Clone)]
pub struct TipDraft {
  id:                 Uuid,
  title:              Option<String>,
  description:        String,
  crime_type:         String,
  location:           String,
  urgency:            String,
  is_anonymous:       bool,
  submission_channel: String,
  contact_info:       Option<ContactInfo>,
  attachments:        Vec<String>,
  submitted_at:       DateTime<Utc>,
}

impl TipDraft {
  /// Build a draft from adapter output, assigning an id and creation time.
  ///
  /// Contact details are dropped here, unconditionally, when the tip is
  /// anonymous.
  pub fn new(input: NewTip) -> Self {
    let contact_info = if input.is_anonymous {
      None
    } else {
      input.contact_info
    };

    Self {
      id: Uuid::new_v4(),
      title: input.title,
      description: input.description.unwrap_or_default(),
      crime_type: input.crime_type.unwrap_or_default(),
      location: input.location.unwrap_or_default(),
      urgency: input
        .urgency
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| Urgency::default().as_str().to_owned()),
      is_anonymous: input.is_anonymous,
      submission_channel: input.submission_channel.unwrap_or_default(),
      contact_info,
      attachments: input.attachments,
      submitted_at: Utc::now(),
    }
  }

  pub fn id(&self) -> Uuid { self.id }
  pub fn description(&self) -> &str { &self.description }
  pub fn crime_type(&self) -> &str { &self.crime_type }
  pub fn location(&self) -> &str { &self.location }
  pub fn urgency(&self) -> &str { &self.urgency }
  pub fn is_anonymous(&self) -> bool { self.is_anonymous }
  pub fn submission_channel(&self) -> &str { &self.submission_channel }
  pub fn contact_info(&self) -> Option<&ContactInfo> {
    self.contact_info.as_ref()
  }

  /// Run every validation rule and, if none fail, promote the draft to an
  /// accepted [`Tip`] in `pending` status.
  pub fn accept(self) -> Result<Tip> {
    let violations = validate(&self);
    let urgency = self.urgency.parse::<Urgency>();
    let channel = self.submission_channel.parse::<Channel>();

    match (urgency, channel) {
      (Ok(urgency), Ok(submission_channel)) if violations.is_empty() => {
        Ok(Tip {
          id: self.id,
          title: self.title,
          description: self.description,
          crime_type: self.crime_type,
          location: self.location,
          urgency,
          is_anonymous: self.is_anonymous,
          submission_channel,
          contact_info: self.contact_info,
          status: TipStatus::Pending,
          submitted_at: self.submitted_at,
          updated_at: None,
          attachments: self.attachments,
        })
      }
      _ => Err(Error::ValidationFailed(violations)),
    }
  }
}

// ─── Tip ─────────────────────────────────────────────────────────────────────

/// An accepted tip. Only its status (and `updated_at`) ever changes, and only
/// through [`Tip::transition`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
  id:                 Uuid,
  title:              Option<String>,
  description:        String,
  crime_type:         String,
  location:           String,
  urgency:            Urgency,
  is_anonymous:       bool,
  submission_channel: Channel,
  contact_info:       Option<ContactInfo>,
  status:             TipStatus,
  submitted_at:       DateTime<Utc>,
  #[serde(skip_serializing_if = "Option::is_none")]
  updated_at:         Option<DateTime<Utc>>,
  attachments:        Vec<String>,
}

impl Tip {
  pub fn id(&self) -> Uuid { self.id }
  pub fn title(&self) -> Option<&str> { self.title.as_deref() }
  pub fn description(&self) -> &str { &self.description }
  pub fn crime_type(&self) -> &str { &self.crime_type }
  pub fn location(&self) -> &str { &self.location }
  pub fn urgency(&self) -> Urgency { self.urgency }
  pub fn is_anonymous(&self) -> bool { self.is_anonymous }
  pub fn submission_channel(&self) -> Channel { self.submission_channel }
  pub fn contact_info(&self) -> Option<&ContactInfo> {
    self.contact_info.as_ref()
  }
  pub fn status(&self) -> TipStatus { self.status }
  pub fn submitted_at(&self) -> DateTime<Utc> { self.submitted_at }
  pub fn updated_at(&self) -> Option<DateTime<Utc>> { self.updated_at }
  pub fn attachments(&self) -> &[String] { &self.attachments }

  /// Move the tip to `status`, stamping `updated_at`. Any status may follow
  /// any other.
  pub fn transition(&mut self, status: TipStatus, at: DateTime<Utc>) {
    self.status = status;
    self.updated_at = Some(at);
  }
}

/// Shorthand for constructing and accepting in one go.
pub fn construct(input: NewTip) -> Result<Tip> {
  TipDraft::new(input).accept()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid_input() -> NewTip {
    NewTip {
      title: Some("Test Tip".into()),
      description: Some("This is a test tip with sufficient description".into()),
      crime_type: Some("theft".into()),
      location: Some("Addis Ababa".into()),
      urgency: Some("medium".into()),
      is_anonymous: true,
      submission_channel: Some("app".into()),
      ..NewTip::default()
    }
  }

  #[test]
  fn accepted_tip_starts_pending() {
    let tip = construct(valid_input()).unwrap();
    assert_eq!(tip.status(), TipStatus::Pending);
    assert_eq!(tip.title(), Some("Test Tip"));
    assert!(tip.is_anonymous());
    assert!(tip.updated_at().is_none());
  }

  #[test]
  fn missing_urgency_defaults_to_medium() {
    let tip = construct(NewTip {
      urgency: None,
      ..valid_input()
    })
    .unwrap();
    assert_eq!(tip.urgency(), Urgency::Medium);
  }

  #[test]
  fn empty_urgency_defaults_to_medium() {
    let tip = construct(NewTip {
      urgency: Some(String::new()),
      ..valid_input()
    })
    .unwrap();
    assert_eq!(tip.urgency(), Urgency::Medium);
  }

  #[test]
  fn anonymous_draft_drops_contact_info() {
    let draft = TipDraft::new(NewTip {
      contact_info: Some(ContactInfo {
        name:  Some("Should not be stored".into()),
        phone: Some("123456".into()),
        email: None,
      }),
      ..valid_input()
    });
    assert!(draft.contact_info().is_none());

    let tip = draft.accept().unwrap();
    assert!(tip.contact_info().is_none());
  }

  #[test]
  fn named_tip_keeps_contact_info_exactly() {
    let contact = ContactInfo {
      name:  Some("John Doe".into()),
      phone: Some("+251911234567".into()),
      email: None,
    };
    let tip = construct(NewTip {
      is_anonymous: false,
      contact_info: Some(contact.clone()),
      ..valid_input()
    })
    .unwrap();
    assert_eq!(tip.contact_info(), Some(&contact));
  }

  #[test]
  fn invalid_draft_reports_every_violation() {
    let err = construct(NewTip {
      description: Some("Short".into()),
      crime_type: Some(String::new()),
      location: None,
      urgency: Some("invalid".into()),
      submission_channel: Some("invalid".into()),
      ..NewTip::default()
    })
    .unwrap_err();

    let Error::ValidationFailed(violations) = err else {
      panic!("expected ValidationFailed")
    };
    assert_eq!(violations.len(), 5);
  }

  #[test]
  fn transition_stamps_updated_at() {
    let mut tip = construct(valid_input()).unwrap();
    let at = Utc::now();
    tip.transition(TipStatus::Closed, at);
    assert_eq!(tip.status(), TipStatus::Closed);
    assert_eq!(tip.updated_at(), Some(at));
    assert!(tip.submitted_at() <= at);
  }

  #[test]
  fn serialises_camel_case_with_null_contact() {
    let tip = construct(valid_input()).unwrap();
    let json = serde_json::to_value(&tip).unwrap();
    assert_eq!(json["crimeType"], "theft");
    assert_eq!(json["submissionChannel"], "app");
    assert_eq!(json["status"], "pending");
    assert!(json["contactInfo"].is_null());
    assert!(json.get("updatedAt").is_none());
  }

  #[test]
  fn tags_parse_from_wire_names() {
    assert_eq!("critical".parse::<Urgency>().unwrap(), Urgency::Critical);
    assert_eq!("phone".parse::<Channel>().unwrap(), Channel::Phone);
    assert!("CRITICAL".parse::<Urgency>().is_err());
    assert!("fax".parse::<Channel>().is_err());
  }
}
