//! The [`SmsSender`] seam and its tracing-backed implementation.

use std::{
  future::Future,
  sync::atomic::{AtomicU64, Ordering},
};

use tracing::info;

use crate::{Error, Result};

/// Acknowledgement from whatever delivered the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsReceipt {
  pub message_id: String,
}

/// Delivers a text message to one number.
pub trait SmsSender: Send + Sync + 'static {
  fn send<'a>(
    &'a self,
    to: &'a str,
    body: &'a str,
  ) -> impl Future<Output = Result<SmsReceipt>> + Send + 'a;
}

/// Records each message in the log instead of handing it to a provider.
#[derive(Debug)]
pub struct LogSender {
  sender_id: String,
  sent:      AtomicU64,
}

impl LogSender {
  pub fn new(sender_id: impl Into<String>) -> Self {
    Self {
      sender_id: sender_id.into(),
      sent:      AtomicU64::new(0),
    }
  }

  /// Messages "sent" so far.
  pub fn sent(&self) -> u64 { self.sent.load(Ordering::Relaxed) }
}

impl SmsSender for LogSender {
  async fn send(&self, to: &str, body: &str) -> Result<SmsReceipt> {
    if to.trim().is_empty() {
      return Err(Error::EmptyDestination);
    }
    let n = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
    info!(from = %self.sender_id, %to, "sending sms: {body}");
    Ok(SmsReceipt {
      message_id: format!("log-{n}"),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn log_sender_counts_messages() {
    let sender = LogSender::new("CrimeTips");
    let first = sender.send("+1555", "hello").await.unwrap();
    let second = sender.send("+1666", "again").await.unwrap();
    assert_eq!(first.message_id, "log-1");
    assert_eq!(second.message_id, "log-2");
    assert_eq!(sender.sent(), 2);
  }

  #[tokio::test]
  async fn blank_destination_is_rejected() {
    let sender = LogSender::new("CrimeTips");
    assert!(matches!(
      sender.send("  ", "hello").await,
      Err(Error::EmptyDestination)
    ));
    assert_eq!(sender.sent(), 0);
  }
}
