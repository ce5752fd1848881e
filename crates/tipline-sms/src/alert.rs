//! [`PoliceAlert`] — the notifier wired into the intake service.

use std::sync::Arc;

use tipline_core::{
  notify::Notifier,
  tip::{Tip, Urgency},
};
use tracing::{info, warn};

use crate::{Error, SmsSender, text::urgent_alert_text};

/// Logs every accepted tip and texts each configured police number when the
/// tip is critical.
pub struct PoliceAlert<T> {
  sender:  Arc<T>,
  numbers: Vec<String>,
}

impl<T: SmsSender> PoliceAlert<T> {
  pub fn new(sender: Arc<T>, numbers: Vec<String>) -> Self {
    Self { sender, numbers }
  }

  /// Parse a comma-separated number list, skipping blanks.
  pub fn from_list(sender: Arc<T>, numbers: &str) -> Self {
    let numbers = numbers
      .split(',')
      .map(str::trim)
      .filter(|n| !n.is_empty())
      .map(str::to_owned)
      .collect();
    Self::new(sender, numbers)
  }

  pub fn numbers(&self) -> &[String] { &self.numbers }
}

impl<T: SmsSender> Notifier for PoliceAlert<T> {
  type Error = Error;

  /// Every number is attempted; the first failure is returned.
  async fn notify(&self, tip: Tip) -> Result<(), Error> {
    info!(id = %tip.id(), crime_type = tip.crime_type(), "notifying police about new tip");

    if tip.urgency() != Urgency::Critical {
      return Ok(());
    }
    if self.numbers.is_empty() {
      info!("no police numbers configured for sms alerts");
      return Ok(());
    }

    let body = urgent_alert_text(&tip);
    let mut first_err = None;
    for number in &self.numbers {
      if let Err(e) = self.sender.send(number, &body).await {
        warn!(%number, "police alert failed: {e}");
        first_err.get_or_insert(e);
      }
    }
    first_err.map_or(Ok(()), Err)
  }
}
