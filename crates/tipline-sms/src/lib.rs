//! Outbound SMS for Tipline.
//!
//! Holds the reply texts sent back to tipsters, the [`SmsSender`] seam that a
//! provider client plugs into, and [`PoliceAlert`], a
//! [`tipline_core::notify::Notifier`] that pages police numbers about
//! critical tips.
//!
//! # Quick start
//!
//! ```no_run
//! use tipline_sms::{LogSender, SmsSender, help_text};
//!
//! # async fn demo() {
//! let sender = LogSender::new("CrimeTips");
//! sender.send("+251911000000", &help_text()).await.unwrap();
//! # }
//! ```

pub mod error;
mod alert;
mod sender;
mod text;

pub use alert::PoliceAlert;
pub use error::{Error, Result};
pub use sender::{LogSender, SmsReceipt, SmsSender};
pub use text::{confirmation_text, help_text, reference, urgent_alert_text};
