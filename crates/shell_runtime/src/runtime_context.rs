//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect
//! queue, and the host bootstrap wiring. UI composition stays in
//! [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::ShellHostContext,
    model::{InteractionState, ShellState},
    reducer::{reduce_shell, RuntimeEffect, ShellAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`]s.
pub struct ShellRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<ShellHostContext>,
    /// Reactive shell state signal.
    pub state: RwSignal<ShellState>,
    /// Reactive drag/pan gesture slot signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
    /// Handle of the active directory poll, cleared when the session ends.
    pub poll_interval: StoredValue<Option<IntervalHandle>>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: ShellRuntimeContext) {
    runtime.host.get_value().install_boot_check(runtime.dispatch);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components and runs the
/// startup session check.
pub fn ShellProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(ShellHostContext::new(host_services));
    let state = create_rw_signal(ShellState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let poll_interval = store_value(None::<IntervalHandle>);

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let mut gestures = interaction.get_untracked();
        let previous_shell = shell.clone();
        let previous_gestures = gestures.clone();

        match reduce_shell(&mut shell, &mut gestures, action) {
            Ok(new_effects) => {
                if shell != previous_shell {
                    state.set(shell);
                }
                if gestures != previous_gestures {
                    interaction.set(gestures);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("shell reducer error: {err}"),
        }
    });

    let runtime = ShellRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
        poll_interval,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
