//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and view-model builders live here so components stay thin and
//! the display rules can be unit tested without a browser.

pub mod dsm;
pub mod fields;
pub mod format;
pub mod requirements;
pub mod upload;
