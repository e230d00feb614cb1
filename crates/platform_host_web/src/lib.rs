//! Browser (`wasm32`) implementations of the [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer: `fetch`-backed
//! session and dock clients, a `sessionStorage` token store, and a console
//! query sink. Every adapter compiles on non-wasm targets with an inert
//! fallback so host-side test builds stay green.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod auth;
pub mod directory;
pub mod query;
pub mod tokens;

pub use adapters::build_host_services;
pub use auth::HttpSessionService;
pub use directory::HttpDirectoryService;
pub use query::ConsoleQuerySink;
pub use tokens::SessionStorageTokenStore;
