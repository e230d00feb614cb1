pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod palette;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod window_manager;

pub use components::ShellRoot;
pub use model::*;
pub use reducer::{reduce_shell, ReducerError, RuntimeEffect, ShellAction};
pub use runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};
