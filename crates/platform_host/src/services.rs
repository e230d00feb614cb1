//! Host service bundle assembled by the entry layer and handed to the runtime.

use std::rc::Rc;

use crate::{
    directory::{AppDirectoryService, MemoryDirectoryService, NoopDirectoryService},
    query::{NoopQuerySink, QuerySink},
    session::{MemorySessionService, NoopSessionService, SessionService},
    tokens::{MemoryTokenStore, NoopTokenStore, TokenStore},
};

#[derive(Clone)]
/// The full set of host services the shell runtime depends on.
pub struct HostServices {
    /// Login and token validation backend.
    pub session: Rc<dyn SessionService>,
    /// Installed-app directory backend.
    pub directory: Rc<dyn AppDirectoryService>,
    /// Tab-scoped token persistence.
    pub tokens: Rc<dyn TokenStore>,
    /// Fallback sink for unmatched palette queries.
    pub query_sink: Rc<dyn QuerySink>,
}

impl HostServices {
    /// Bundle backed entirely by no-op services.
    pub fn noop() -> Self {
        Self {
            session: Rc::new(NoopSessionService),
            directory: Rc::new(NoopDirectoryService),
            tokens: Rc::new(NoopTokenStore),
            query_sink: Rc::new(NoopQuerySink),
        }
    }

    /// Bundle backed by in-memory services, for tests and non-wasm targets.
    pub fn memory() -> Self {
        Self {
            session: Rc::new(MemorySessionService::default()),
            directory: Rc::new(MemoryDirectoryService::default()),
            tokens: Rc::new(MemoryTokenStore::default()),
            query_sink: Rc::new(NoopQuerySink),
        }
    }
}
