//! Observable state containers over the vizallas data model.
//!
//! Each store owns one slice of app state behind a lock, refreshes it from
//! a source trait, and bumps a [`signal::ChangeSignal`] revision after
//! every applied mutation. The presentation loop subscribes to the signal
//! and re-reads the store when it fires; no UI framework types appear at
//! this boundary.
//!
//! Refreshes follow last-write-wins: each call claims a ticket from a
//! [`refresh::RefreshSeq`], and only the newest ticket may apply its
//! outcome, so a slow stale response can never overwrite a newer one. A
//! failed refresh keeps the previous data and records a displayable error
//! message instead of clearing anything.

pub mod catalog;
pub mod descriptions;
pub mod favorites;
pub mod kv;
pub mod refresh;
pub mod series;
pub mod signal;
