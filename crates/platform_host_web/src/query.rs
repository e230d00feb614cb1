//! Console-logging fallback query sink.
//!
//! The natural-language query backend is not implemented; this sink keeps the
//! palette's dispatch contract honest by logging what would be forwarded.

use platform_host::QuerySink;

#[derive(Debug, Clone, Copy, Default)]
/// Query sink that writes forwarded queries to the browser console.
pub struct ConsoleQuerySink;

impl QuerySink for ConsoleQuerySink {
    fn submit(&self, query: &str) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!("query sink: {query}").into());

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("query sink: {query}");
    }
}
