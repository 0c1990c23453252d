//! Reusable view components shared across pages.

pub mod guard;
pub mod nav_bar;
pub mod status_badge;
pub mod toast_host;
