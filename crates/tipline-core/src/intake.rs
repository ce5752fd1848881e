//! [`IntakeService`] — adapter → validation → store → notification.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  channel::{AppSubmission, PhoneSubmission, SmsMessage, sms_new_tip},
  lifecycle::TipStatus,
  notify::Notifier,
  sms::parse_tip,
  stats::Statistics,
  store::{TipQuery, TipStore},
  tip::{Channel, NewTip, Tip, TipDraft},
};

/// Outcome of an SMS submission.
#[derive(Debug, Clone)]
pub enum SmsIntake {
  Accepted(Tip),
  /// The message did not start with the tip keyword. Nothing was stored; the
  /// sender should be told how to format a tip.
  UnrecognizedFormat,
}

/// The intake pipeline, bound to one store and one notifier.
///
/// Cloning is cheap — both handles are reference-counted.
pub struct IntakeService<S, N> {
  store:    Arc<S>,
  notifier: Arc<N>,
}

impl<S, N> Clone for IntakeService<S, N> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      notifier: Arc::clone(&self.notifier),
    }
  }
}

impl<S, N> IntakeService<S, N>
where
  S: TipStore,
  N: Notifier,
{
  pub fn new(store: Arc<S>, notifier: Arc<N>) -> Self {
    Self { store, notifier }
  }

  pub fn store(&self) -> &Arc<S> { &self.store }

  // ── Submission ────────────────────────────────────────────────────────────

  /// Construct, validate and store a tip from any adapter's output.
  pub async fn submit(&self, input: NewTip) -> Result<Tip> {
    let draft = TipDraft::new(input);
    let tip = match draft.accept() {
      Ok(tip) => tip,
      Err(e) => {
        debug!("rejected tip submission: {e}");
        return Err(e);
      }
    };

    let tip = self.store.append(tip).await.map_err(store_err)?;
    info!(
      id = %tip.id(),
      channel = %tip.submission_channel(),
      urgency = %tip.urgency(),
      "accepted tip"
    );

    self.dispatch(tip.clone());
    Ok(tip)
  }

  /// App or web submission; `channel` is the entry point's default tag.
  pub async fn submit_app(
    &self,
    submission: AppSubmission,
    channel: Channel,
  ) -> Result<Tip> {
    self.submit(submission.into_new_tip(channel)).await
  }

  pub async fn submit_phone(&self, submission: PhoneSubmission) -> Result<Tip> {
    self.submit(submission.into()).await
  }

  /// Parse and submit an inbound SMS.
  pub async fn submit_sms(&self, sms: &SmsMessage) -> Result<SmsIntake> {
    let Some(fragment) = parse_tip(&sms.message) else {
      debug!("sms is not in tip format");
      return Ok(SmsIntake::UnrecognizedFormat);
    };
    let tip = self.submit(sms_new_tip(&sms.from, fragment)).await?;
    Ok(SmsIntake::Accepted(tip))
  }

  /// Fire the notification hook without waiting on it.
  fn dispatch(&self, tip: Tip) {
    let notifier = Arc::clone(&self.notifier);
    tokio::spawn(async move {
      let id = tip.id();
      if let Err(e) = notifier.notify(tip).await {
        warn!(%id, "tip notification failed: {e}");
      }
    });
  }

  // ── Status ────────────────────────────────────────────────────────────────

  /// Move a tip to `status`. Unknown ids fail with [`Error::TipNotFound`]
  /// before the status itself is checked.
  pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Tip> {
    self.get(id).await?;
    let status = status.parse::<TipStatus>()?;

    let tip = self
      .store
      .set_status(id, status, Utc::now())
      .await
      .map_err(store_err)?
      .ok_or(Error::TipNotFound(id))?;
    info!(%id, %status, "tip status updated");
    Ok(tip)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  pub async fn get(&self, id: Uuid) -> Result<Tip> {
    self
      .store
      .get(id)
      .await
      .map_err(store_err)?
      .ok_or(Error::TipNotFound(id))
  }

  pub async fn list(&self, query: &TipQuery) -> Result<Vec<Tip>> {
    self.store.list(query).await.map_err(store_err)
  }

  pub async fn statistics(&self) -> Result<Statistics> {
    self.store.statistics().await.map_err(store_err)
  }
}

fn store_err<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::Store(Box::new(e))
}
