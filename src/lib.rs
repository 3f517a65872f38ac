//! UTC wire-time normalization and slug generation for the booking API.
//!
//! [`domain::time::wire`] owns the timestamp wire contract and
//! [`domain::slug`] turns display names into URL-safe identifiers. Both are
//! pure and safe to call from any thread.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
