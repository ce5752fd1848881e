//! Review status of an accepted tip.
//!
//! The status graph is fully open: any of the five states may follow any
//! other, including reopening a closed tip. The only rule is that the target
//! must be one of the known states, which [`TipStatus::from_str`] enforces.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Where a tip sits in the review workflow. `Pending` is the only initial
/// state.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TipStatus {
  #[default]
  Pending,
  Reviewing,
  Investigating,
  Resolved,
  Closed,
}

impl TipStatus {
  pub const ALL: [TipStatus; 5] = [
    Self::Pending,
    Self::Reviewing,
    Self::Investigating,
    Self::Resolved,
    Self::Closed,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::Reviewing => "reviewing",
      Self::Investigating => "investigating",
      Self::Resolved => "resolved",
      Self::Closed => "closed",
    }
  }
}

impl FromStr for TipStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|st| st.as_str() == s)
      .ok_or_else(|| Error::InvalidStatus(s.to_owned()))
  }
}

impl fmt::Display for TipStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_known_status_parses() {
    for status in TipStatus::ALL {
      assert_eq!(status.as_str().parse::<TipStatus>().unwrap(), status);
    }
  }

  #[test]
  fn unknown_status_is_invalid() {
    let err = "archived".parse::<TipStatus>().unwrap_err();
    assert!(matches!(err, Error::InvalidStatus(s) if s == "archived"));
  }
}
