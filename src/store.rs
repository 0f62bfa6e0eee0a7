//! Persistence of column preferences.
//!
//! The view model only needs `get`/`set` on string keys. Values are JSON
//! arrays of header ids; anything unreadable counts as "nothing stored".

use std::collections::HashMap;

use crate::error::{Result, TableError};

/// Cookie expiry used for "never expires".
pub const PERSISTENT_EXPIRES: &str = "Fri, 31 Dec 9999 23:59:59 GMT";

/// String key/value persistence, last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store for tests, the CLI and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store keys for one table, namespaced by its cookie identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStateKeys {
    pub hidden: String,
    pub order: String,
}

impl ColumnStateKeys {
    #[must_use]
    pub fn new(identifier: &str) -> Self {
        Self {
            hidden: format!("{identifier}-hidden"),
            order: format!("{identifier}-order"),
        }
    }
}

/// Read a persisted id list. Missing, `null`, malformed or non-array values
/// yield `None`.
pub fn read_id_list<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Vec<String>> {
    let raw = store.get(key)?;
    match serde_json::from_str::<Option<Vec<String>>>(&raw) {
        Ok(ids) => ids,
        Err(e) => {
            tracing::debug!(key, error = %e, "ignoring unreadable persisted column state");
            None
        }
    }
}

/// Replace a persisted id list.
pub fn write_id_list<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    ids: &[String],
) -> Result<()> {
    let json = serde_json::to_string(ids)?;
    tracing::debug!(key, value = %json, "persisting column state");
    store.set(key, &json)
}

/// Find `key` in a `document.cookie` string (`a=1; b=2`) and percent-decode
/// its value. A bare `key` with no `=` reads as empty.
#[must_use]
pub fn lookup_cookie(cookies: &str, key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    cookies.split(';').map(str::trim_start).find_map(|pair| {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name != key {
            return None;
        }
        urlencoding::decode(value).ok().map(|v| v.into_owned())
    })
}

/// `document.cookie` assignment for a persistent, site-wide cookie.
#[must_use]
pub fn format_cookie(key: &str, value: &str) -> String {
    format!(
        "{key}={}; expires={PERSISTENT_EXPIRES}; path=/",
        urlencoding::encode(value)
    )
}

/// `document.cookie` backed store.
#[cfg(target_arch = "wasm32")]
pub struct CookieStore {
    document: web_sys::HtmlDocument,
}

#[cfg(target_arch = "wasm32")]
impl CookieStore {
    /// Store over the current window's document.
    pub fn new() -> Result<Self> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| TableError::Store("no document available".into()))?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| TableError::Store("document is not an HTML document".into()))?;
        Ok(Self { document })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let cookies = self.document.cookie().ok()?;
        lookup_cookie(&cookies, key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.document
            .set_cookie(&format_cookie(key, value))
            .map_err(|e| TableError::Store(format!("{e:?}")))
    }
}

/// Store that refuses writes; reads see nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(TableError::Store(format!("read-only store, cannot write {key}")))
    }
}
