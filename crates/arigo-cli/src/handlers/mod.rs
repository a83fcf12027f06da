//! Command handlers.
//!
//! Handlers return the rendered output instead of printing it, so `main`
//! owns stdout and tests can inspect the result directly.

pub mod inspect;
