//! Core logic of the Edutalks site: motion state machines, the API
//! boundary, admin session, form lifecycle and static content.
//!
//! Everything here is plain Rust and runs natively under test.

pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod form;
pub mod motion;
pub mod routes;
pub mod session;
pub mod widgets;
