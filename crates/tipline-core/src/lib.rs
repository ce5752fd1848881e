//! Core types and trait definitions for the Tipline intake pipeline.
//!
//! This crate is deliberately free of HTTP and storage dependencies. It holds
//! the canonical tip record, the validation rules, the SMS free-text parser,
//! the per-channel adapters, and the [`intake::IntakeService`] that ties them
//! to an abstract [`store::TipStore`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod channel;
pub mod error;
pub mod intake;
pub mod lifecycle;
pub mod notify;
pub mod sms;
pub mod stats;
pub mod store;
pub mod tip;
pub mod validate;

pub use error::{Error, Result};
