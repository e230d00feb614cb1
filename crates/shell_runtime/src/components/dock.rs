use super::*;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <nav class="dock" aria-label="Installed apps">
            <For each=move || state.get().apps key=|app| app.id.clone() let:app>
                {{
                    let label = app.name.clone();
                    let icon = app.icon.clone();
                    let launch = move |_| runtime.dispatch_action(ShellAction::OpenApp(app.clone()));
                    view! {
                        <button class="dock-item" title=label.clone() on:click=launch>
                            <span class="dock-icon" aria-hidden="true">{icon}</span>
                            <span class="dock-label">{label}</span>
                        </button>
                    }
                }}
            </For>
        </nav>
    }
}
