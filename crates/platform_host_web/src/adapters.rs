//! Concrete browser adapter factory for runtime wiring.

use std::rc::Rc;

use platform_host::HostServices;

use crate::{ConsoleQuerySink, HttpDirectoryService, HttpSessionService, SessionStorageTokenStore};

/// Builds the browser-backed [`HostServices`] bundle the site entry hands to
/// the shell provider.
pub fn build_host_services() -> HostServices {
    HostServices {
        session: Rc::new(HttpSessionService),
        directory: Rc::new(HttpDirectoryService),
        tokens: Rc::new(SessionStorageTokenStore),
        query_sink: Rc::new(ConsoleQuerySink),
    }
}
