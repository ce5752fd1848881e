//! Reply and alert texts.

use tipline_core::tip::Tip;
use uuid::Uuid;

/// Length of the short reference quoted back to tipsters and police.
const REFERENCE_LEN: usize = 8;

/// The short form of a tip id used in SMS bodies.
pub fn reference(id: Uuid) -> String {
  id.to_string().chars().take(REFERENCE_LEN).collect()
}

/// Sent when an inbound SMS is not in tip format.
pub fn help_text() -> String {
  "To submit a tip, send: TIP <location> | <description>. \
   Example: TIP Bole Street | Suspicious activity near bank"
    .to_owned()
}

/// Sent to the tipster once their SMS tip is stored.
pub fn confirmation_text(id: Uuid) -> String {
  format!(
    "Your crime tip has been received and is being reviewed. Reference ID: \
     {}. Thank you for helping keep our community safe.",
    reference(id)
  )
}

/// Sent to police numbers for a critical tip.
pub fn urgent_alert_text(tip: &Tip) -> String {
  format!(
    "URGENT TIP: {} reported at {}. Check dashboard for details. ID: {}",
    tip.crime_type().to_uppercase(),
    tip.location(),
    reference(tip.id())
  )
}
