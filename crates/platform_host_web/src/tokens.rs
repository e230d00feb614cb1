//! `sessionStorage`-backed token store implementation.
//!
//! `sessionStorage` gives the token the exact lifetime the shell wants: it
//! survives page reloads within one tab and disappears with the tab.

use platform_host::TokenStore;

const TOKEN_KEY: &str = "driftdesk.auth_token.v1";

#[derive(Debug, Clone, Copy, Default)]
/// Browser token store backed by `window.sessionStorage`.
pub struct SessionStorageTokenStore;

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl TokenStore for SessionStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            session_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage =
                session_storage().ok_or_else(|| "sessionStorage unavailable".to_string())?;
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|e| format!("sessionStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage =
                session_storage().ok_or_else(|| "sessionStorage unavailable".to_string())?;
            storage
                .remove_item(TOKEN_KEY)
                .map_err(|e| format!("sessionStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(())
        }
    }
}
