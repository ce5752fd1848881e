//! Channel adapters: map each channel's native input into a [`NewTip`].
//!
//! Adapters only shape fields. Defaults, redaction and validation happen in
//! [`crate::tip::TipDraft`] so every channel gets the same guarantees.

use serde::Deserialize;

use crate::{
  sms::SmsFragment,
  tip::{Channel, ContactInfo, NewTip},
};

pub const SMS_TITLE: &str = "SMS Tip";
pub const PHONE_TITLE: &str = "Phone Tip";

/// Stored location for an SMS whose location segment is empty.
pub const UNKNOWN_LOCATION: &str = "Unknown";

fn non_empty(s: Option<String>) -> Option<String> {
  s.filter(|s| !s.is_empty())
}

// ─── App / web ───────────────────────────────────────────────────────────────

/// A structured submission from the mobile app or the web form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSubmission {
  pub title:              Option<String>,
  pub description:        Option<String>,
  pub crime_type:         Option<String>,
  pub location:           Option<String>,
  pub urgency:            Option<String>,
  #[serde(default)]
  pub is_anonymous:       bool,
  /// Falls back to the entry point's channel when omitted.
  pub submission_channel: Option<String>,
  pub contact_info:       Option<ContactInfo>,
  #[serde(default)]
  pub attachments:        Vec<String>,
}

impl AppSubmission {
  /// Pass the payload through, tagging it with `default_channel` unless the
  /// payload names its own. An empty channel counts as omitted.
  pub fn into_new_tip(self, default_channel: Channel) -> NewTip {
    NewTip {
      title:              self.title,
      description:        self.description,
      crime_type:         self.crime_type,
      location:           self.location,
      urgency:            self.urgency,
      is_anonymous:       self.is_anonymous,
      submission_channel: Some(
        non_empty(self.submission_channel)
          .unwrap_or_else(|| default_channel.as_str().to_owned()),
      ),
      contact_info:       self.contact_info,
      attachments:        self.attachments,
    }
  }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// A call transcribed by an operator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneSubmission {
  pub title:        Option<String>,
  pub description:  Option<String>,
  /// Defaults to `general` when the operator leaves it out.
  pub crime_type:   Option<String>,
  pub location:     Option<String>,
  pub urgency:      Option<String>,
  #[serde(default)]
  pub is_anonymous: bool,
  /// Caller's number, used when no structured contact is given.
  pub phone:        Option<String>,
  pub contact_info: Option<ContactInfo>,
  #[serde(default)]
  pub attachments:  Vec<String>,
}

impl From<PhoneSubmission> for NewTip {
  fn from(p: PhoneSubmission) -> Self {
    let contact_info = if p.is_anonymous {
      None
    } else {
      p.contact_info.or_else(|| p.phone.map(ContactInfo::phone))
    };

    NewTip {
      title: Some(p.title.unwrap_or_else(|| PHONE_TITLE.to_owned())),
      description: p.description,
      crime_type: Some(
        non_empty(p.crime_type)
          .unwrap_or_else(|| crate::sms::GENERAL_CRIME_TYPE.to_owned()),
      ),
      location: p.location,
      urgency: p.urgency,
      is_anonymous: p.is_anonymous,
      submission_channel: Some(Channel::Phone.as_str().to_owned()),
      contact_info,
      attachments: p.attachments,
    }
  }
}

// ─── SMS ─────────────────────────────────────────────────────────────────────

/// The normalised inbound SMS every provider adapter must produce.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SmsMessage {
  /// Sender address (usually an E.164 number).
  pub from:    String,
  pub message: String,
}

/// Merge a parsed fragment with the sender into SMS tip input.
///
/// SMS tips are always anonymous, so the sender's number is supplied only to
/// be redacted during construction. An empty location segment (`TIP | ...`)
/// is stored as [`UNKNOWN_LOCATION`].
pub fn sms_new_tip(from: &str, fragment: SmsFragment) -> NewTip {
  let location = if fragment.location.is_empty() {
    UNKNOWN_LOCATION.to_owned()
  } else {
    fragment.location
  };

  NewTip {
    title:              Some(SMS_TITLE.to_owned()),
    description:        Some(fragment.description),
    crime_type:         Some(fragment.crime_type),
    location:           Some(location),
    urgency:            Some(fragment.urgency.as_str().to_owned()),
    is_anonymous:       true,
    submission_channel: Some(Channel::Sms.as_str().to_owned()),
    contact_info:       Some(ContactInfo::phone(from)),
    attachments:        Vec::new(),
  }
}
