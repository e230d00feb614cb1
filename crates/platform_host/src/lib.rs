//! Typed host-domain contracts shared by the shell runtime and browser adapters.
//!
//! This crate is the API-first boundary for the shell's external collaborators. It
//! exposes the session, app-directory, token-storage, and query-sink service traits
//! together with in-memory implementations used by tests and non-wasm targets, while
//! the concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod directory;
pub mod query;
pub mod services;
pub mod session;
pub mod tokens;

pub use directory::{
    AppDirectoryFuture, AppDirectoryService, DirectoryError, DockAppRecord,
    MemoryDirectoryService, NoopDirectoryService,
};
pub use query::{NoopQuerySink, QuerySink, RecordingQuerySink};
pub use services::HostServices;
pub use session::{
    LoginOutcome, MemorySessionService, NoopSessionService, SessionError, SessionFuture,
    SessionIdentity, SessionService,
};
pub use tokens::{MemoryTokenStore, NoopTokenStore, TokenStore};
