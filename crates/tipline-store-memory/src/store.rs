//! [`MemoryStore`] — the in-memory implementation of [`TipStore`].

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use tipline_core::{
  lifecycle::TipStatus,
  stats::Statistics,
  store::{TipQuery, TipStore},
  tip::Tip,
};

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Inner {
  /// Insertion order.
  tips:  Vec<Tip>,
  /// id → position in `tips`.
  index: HashMap<Uuid, usize>,
}

/// A tip store held entirely in process memory.
///
/// Cloning is cheap — clones share the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Number of stored tips.
  pub async fn len(&self) -> usize { self.inner.read().await.tips.len() }

  pub async fn is_empty(&self) -> bool { self.len().await == 0 }
}

// ─── TipStore impl ───────────────────────────────────────────────────────────

impl TipStore for MemoryStore {
  type Error = Error;

  async fn append(&self, tip: Tip) -> Result<Tip> {
    let mut inner = self.inner.write().await;
    let id = tip.id();
    if inner.index.contains_key(&id) {
      return Err(Error::DuplicateId(id));
    }

    let position = inner.tips.len();
    inner.tips.push(tip.clone());
    inner.index.insert(id, position);
    Ok(tip)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Tip>> {
    let inner = self.inner.read().await;
    Ok(inner.index.get(&id).map(|&i| inner.tips[i].clone()))
  }

  async fn set_status(
    &self,
    id: Uuid,
    status: TipStatus,
    at: DateTime<Utc>,
  ) -> Result<Option<Tip>> {
    let mut inner = self.inner.write().await;
    let Some(&position) = inner.index.get(&id) else {
      return Ok(None);
    };
    let tip = &mut inner.tips[position];
    tip.transition(status, at);
    Ok(Some(tip.clone()))
  }

  async fn list(&self, query: &TipQuery) -> Result<Vec<Tip>> {
    let inner = self.inner.read().await;
    Ok(
      inner
        .tips
        .iter()
        .filter(|tip| query.matches(tip))
        .cloned()
        .collect(),
    )
  }

  async fn statistics(&self) -> Result<Statistics> {
    let inner = self.inner.read().await;
    Ok(Statistics::tally(&inner.tips))
  }
}
