//! Aggregate counts over a set of tips.

use serde::Serialize;

use crate::{
  lifecycle::TipStatus,
  tip::{Channel, Tip, Urgency},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChannelCounts {
  pub app:   usize,
  pub sms:   usize,
  pub web:   usize,
  pub phone: usize,
}

impl ChannelCounts {
  pub fn total(&self) -> usize { self.app + self.sms + self.web + self.phone }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UrgencyCounts {
  pub low:      usize,
  pub medium:   usize,
  pub high:     usize,
  pub critical: usize,
}

/// Dashboard counters. Only `pending` and `resolved` get a per-status count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
  pub total:      usize,
  pub pending:    usize,
  pub resolved:   usize,
  pub by_channel: ChannelCounts,
  pub by_urgency: UrgencyCounts,
}

impl Statistics {
  /// Count `tips` from scratch.
  pub fn tally<'a>(tips: impl IntoIterator<Item = &'a Tip>) -> Self {
    tips.into_iter().fold(Self::default(), |mut stats, tip| {
      stats.total += 1;

      match tip.status() {
        TipStatus::Pending => stats.pending += 1,
        TipStatus::Resolved => stats.resolved += 1,
        _ => {}
      }

      let channel = &mut stats.by_channel;
      match tip.submission_channel() {
        Channel::App => channel.app += 1,
        Channel::Sms => channel.sms += 1,
        Channel::Web => channel.web += 1,
        Channel::Phone => channel.phone += 1,
      }

      let urgency = &mut stats.by_urgency;
      match tip.urgency() {
        Urgency::Low => urgency.low += 1,
        Urgency::Medium => urgency.medium += 1,
        Urgency::High => urgency.high += 1,
        Urgency::Critical => urgency.critical += 1,
      }

      stats
    })
  }
}
