//! Domain types and rules shared by the persistence and HTTP layers.
//!
//! This crate performs no I/O. It owns the id/timestamp aliases, the
//! domain error type, and the validation rules for accounts, categories,
//! and notes.

pub mod accounts;
pub mod error;
pub mod notes;
pub mod types;
