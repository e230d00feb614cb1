//! Host-side runtime helpers for executing reducer effects.
//!
//! Effect execution lives behind this typed boundary so the reducer stays a
//! pure transition function and the service stack can be swapped in tests.

mod boot;
mod directory_effects;
mod host_ui;
mod session_effects;

use std::rc::Rc;

use leptos::{logging, Callback};
use platform_host::{AppDirectoryService, HostServices, QuerySink, SessionService, TokenStore};

use crate::{
    reducer::{RuntimeEffect, ShellAction},
    runtime_context::ShellRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for shell runtime side effects.
pub struct ShellHostContext {
    services: HostServices,
}

impl ShellHostContext {
    /// Wraps the service bundle assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured session backend.
    pub fn session_service(&self) -> Rc<dyn SessionService> {
        self.services.session.clone()
    }

    /// Returns the configured app-directory backend.
    pub fn directory_service(&self) -> Rc<dyn AppDirectoryService> {
        self.services.directory.clone()
    }

    /// Returns the configured tab-scoped token store.
    pub fn token_store(&self) -> Rc<dyn TokenStore> {
        self.services.tokens.clone()
    }

    /// Returns the configured fallback query sink.
    pub fn query_sink(&self) -> Rc<dyn QuerySink> {
        self.services.query_sink.clone()
    }

    /// Installs the one-shot startup session check.
    ///
    /// No persisted token means no network call: the shell stays at the login
    /// gate. A persisted token is validated against the session service and
    /// any failure, including an unreachable service, fails closed.
    pub fn install_boot_check(&self, dispatch: Callback<ShellAction>) {
        boot::install_boot_check(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: ShellRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::Authenticate { username, password } => {
                session_effects::authenticate(self.clone(), runtime, username, password);
            }
            RuntimeEffect::PersistToken(token) => {
                if let Err(err) = self.token_store().save(&token) {
                    logging::warn!("persist session token failed: {err}");
                }
            }
            RuntimeEffect::ClearToken => {
                if let Err(err) = self.token_store().clear() {
                    logging::warn!("clear session token failed: {err}");
                }
            }
            RuntimeEffect::LoadAppDirectory { launch_default } => {
                directory_effects::load_directory(self.clone(), runtime, launch_default);
            }
            RuntimeEffect::StartDirectoryPolling => {
                directory_effects::start_polling(self.clone(), runtime);
            }
            RuntimeEffect::StopDirectoryPolling => {
                directory_effects::stop_polling(runtime);
            }
            RuntimeEffect::ForwardQuery(query) => {
                self.query_sink().submit(&query);
            }
            RuntimeEffect::FocusPaletteInput => {
                host_ui::focus_palette_input();
            }
        }
    }
}
