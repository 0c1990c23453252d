//! Shared session, guard, and data model for the recruitment portal.
//!
//! This crate owns everything the `client` and `cli` front ends agree on:
//! the wire DTOs exchanged with the REST backend, the durable-storage seam,
//! the session store lifecycle, pure route-guard evaluation, and the
//! profile-completion gate. It has no UI or HTTP dependency so both the WASM
//! client and native tools can link it.
//!
//! ARCHITECTURE
//! ============
//! - `storage` abstracts the key/value store (`localStorage`, files, memory).
//! - `store` layers the init/login/logout lifecycle on top of a `Storage`.
//! - `guard` and `completion` are pure functions over the resulting state.
//! - `config` + `endpoints` centralize every backend URL.

pub mod completion;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod storage;
pub mod store;
pub mod types;

pub use error::{ApiError, StorageError};
pub use store::{Session, SessionStore};
pub use types::{UserRecord, UserType};
