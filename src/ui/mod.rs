//! Browser side of the site: components, pages and the glue that binds
//! the core state machines to signals and DOM events.

pub mod api;
pub mod common;
pub mod form;
pub mod icon;
pub mod layout;
pub mod motion;
pub mod pages;
pub mod platform;
pub mod sections;
pub mod session;
pub mod timer;

pub use icon::{Icon, icons};
