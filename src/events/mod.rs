//! Event types and their observers.
//!
//! Submodules overview:
//! - [`modelload`] – model load completion event and logging observer

pub mod modelload;
