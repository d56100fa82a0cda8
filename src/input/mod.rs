//! Input adapters for the zoom animation.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into renderer calls.

#[cfg(feature = "gui")]
pub mod gui;
