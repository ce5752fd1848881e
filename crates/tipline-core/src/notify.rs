//! The notification hook invoked once per accepted tip.

use std::future::Future;

use crate::tip::Tip;

/// Something that wants to hear about every accepted tip (a police desk, an
/// alerting pipeline).
///
/// The intake service runs `notify` on a detached task: its latency never
/// delays a submission and its error is only logged.
pub trait Notifier: Send + Sync + 'static {
  type Error: std::error::Error + Send + Sync + 'static;

  fn notify(
    &self,
    tip: Tip,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
