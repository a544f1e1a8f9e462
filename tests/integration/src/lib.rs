//! Integration test utilities for the character-sheet bot
//!
//! This crate provides helpers for driving the interaction router end to end,
//! against the in-memory store or a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
