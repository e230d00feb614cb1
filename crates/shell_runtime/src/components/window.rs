use super::*;
use crate::model::WindowId;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn ShellWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });
    let is_top = Signal::derive(move || runtime.state.get().top_window_id() == Some(window_id));

    let focus = move |ev: web_sys::PointerEvent| {
        // Window surfaces never start a canvas pan.
        ev.stop_propagation();
        if !is_top.get_untracked() {
            runtime.dispatch_action(ShellAction::FocusWindow { window_id });
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let close = move |_| runtime.dispatch_action(ShellAction::CloseWindow { window_id });

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
                );
                let focused_class = if is_top.get() { " focused" } else { "" };

                view! {
                    <section
                        class=format!("shell-window{}", focused_class)
                        style=style
                        on:pointerdown=focus
                        role="dialog"
                        aria-label=win.title.clone()
                    >
                        <header class="titlebar" on:pointerdown=begin_drag>
                            <span class="titlebar-title">{win.title.clone()}</span>
                            <button
                                class="titlebar-close"
                                aria-label="Close window"
                                on:pointerdown=move |ev: web_sys::PointerEvent| {
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                }
                                on:mousedown=move |ev| stop_mouse_event(&ev)
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    close(ev);
                                }
                            >
                                "×"
                            </button>
                        </header>
                        <div class="window-body">
                            <iframe src=win.launch_target.clone() title=win.title.clone()></iframe>
                        </div>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}
