use super::*;

#[component]
pub(super) fn PaletteOverlay() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let query = Signal::derive(move || state.get().palette.query.clone());
    let on_input = move |ev| {
        runtime.dispatch_action(ShellAction::SetPaletteQuery {
            query: event_target_value(&ev),
        });
    };
    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            runtime.dispatch_action(ShellAction::SubmitPalette);
        }
        "Escape" => {
            ev.prevent_default();
            runtime.dispatch_action(ShellAction::ClosePalette);
        }
        _ => {}
    };

    view! {
        <Show when=move || state.get().palette.active fallback=|| ()>
            <div class="palette-overlay">
                <input
                    id=PALETTE_INPUT_DOM_ID
                    class="palette-input"
                    type="text"
                    placeholder="Type an app name, or ask anything"
                    autocomplete="off"
                    aria-label="Command palette"
                    prop:value=query
                    on:input=on_input
                    on:keydown=on_keydown
                />
            </div>
        </Show>
    }
}
