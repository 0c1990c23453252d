//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `completion`, `toast`) so components
//! depend only on the small model they read. Page-local data (job lists,
//! form fields) stays in page signals and is never shared.

pub mod auth;
pub mod completion;
pub mod toast;
