//! Client-side helpers shared by pages and components.

pub mod auth;
pub mod format;
pub mod markdown;
pub mod session;
pub mod storage;
pub mod toast;
