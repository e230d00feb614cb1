//! Tab-scoped bearer-token storage contracts.

use std::{cell::RefCell, rc::Rc};

/// Host store for the single persisted session token.
///
/// Implementations are synchronous at the storage boundary; the browser
/// adapter wraps `sessionStorage`, which is tab-scoped: the token survives
/// page reloads but not new tabs or process restarts.
pub trait TokenStore {
    /// Reads the persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the write fails.
    fn save(&self, token: &str) -> Result<(), String>;

    /// Removes the persisted token. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable.
    fn clear(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Token store that persists nothing, for unsupported targets.
pub struct NoopTokenStore;

impl TokenStore for NoopTokenStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> Result<(), String> {
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory token slot used by tests.
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_token_store_round_trip_and_clear() {
        let store = MemoryTokenStore::default();
        let store_obj: &dyn TokenStore = &store;

        assert_eq!(store_obj.load(), None);
        store_obj.save("tok-1").expect("save");
        assert_eq!(store_obj.load(), Some("tok-1".to_string()));
        store_obj.clear().expect("clear");
        assert_eq!(store_obj.load(), None);
        store_obj.clear().expect("clear twice");
    }
}
