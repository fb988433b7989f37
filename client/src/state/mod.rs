//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each struct is wrapped in an `RwSignal` by the root `App`. Mutations go
//! through plain methods so the rules stay testable off-browser.

pub mod auth;
pub mod chart;
pub mod design;
pub mod tradespace;
pub mod ui;
