//! `localStorage`-backed [`Storage`] for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate builds talk to `window.localStorage`. Server renders have no
//! browser storage: reads come back empty and writes are refused, which
//! keeps SSR output in the signed-out/loading state.

use ats_core::StorageError;
use ats_core::storage::Storage;

/// Zero-sized handle; the `Storage` object is looked up on every call so the
/// handle stays `Send + Sync` for reactive signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StorageError::Unavailable),
    }
}

#[cfg(feature = "hydrate")]
fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_owned(),
                reason: js_reason(&e),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: js_reason(&e),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| StorageError::Remove {
                key: key.to_owned(),
                reason: js_reason(&e),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
