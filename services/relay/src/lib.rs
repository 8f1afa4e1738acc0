//! Strillone relay library.
//!
//! This crate primarily ships the `strillone` binary, but we expose the
//! library surface to enable integration testing and reuse.

pub mod api;
pub mod cache;
pub mod config;
pub mod delivery;
pub mod dispatch;
pub mod message;
pub mod slack;
pub mod state;
