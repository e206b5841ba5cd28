//! Key-value persistence behind a trait seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme flag is the only value the page persists. State code takes any
//! [`KeyValueStore`] so tests can substitute an in-memory map for the
//! browser's `localStorage`.

/// Minimal string-to-string store.
pub trait KeyValueStore {
    /// Read `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `key`. Failures are dropped; persistence is best-effort.
    fn set(&mut self, key: &str, value: &str);
}

/// `window.localStorage`. On non-browser builds every read is absent and
/// every write is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("localStorage read of {key} failed: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("localStorage write of {key} failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
