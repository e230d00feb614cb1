//! Shell UI composition and pointer interaction surfaces.

mod dock;
mod login;
mod palette;
mod window;

use leptos::*;

use self::{dock::Dock, login::LoginGate, palette::PaletteOverlay, window::ShellWindow};
use crate::{model::PointerPosition, reducer::ShellAction};

pub use crate::runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};

/// DOM id of the palette input, shared with the host focus effect.
pub const PALETTE_INPUT_DOM_ID: &str = "palette-input";

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn is_palette_hotkey(ev: &web_sys::KeyboardEvent) -> bool {
    (ev.meta_key() || ev.ctrl_key()) && ev.code() == "Space"
}

fn end_active_pointer_interaction(runtime: ShellRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(ShellAction::EndDrag);
    }
    if interaction.panning.is_some() {
        runtime.dispatch_action(ShellAction::EndPan);
    }
}

#[component]
/// Renders the full shell: login gate, pannable canvas with windows, dock,
/// and the command palette overlay.
pub fn ShellRoot() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let hotkey_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        // No shell feature is usable before the session gate.
        if !runtime.state.get_untracked().session.is_authenticated() {
            return;
        }
        if is_palette_hotkey(&ev) {
            ev.prevent_default();
            runtime.dispatch_action(ShellAction::TogglePalette);
            return;
        }
        if ev.key() == "Escape" && runtime.state.get_untracked().palette.active {
            ev.prevent_default();
            runtime.dispatch_action(ShellAction::ClosePalette);
        }
    });
    on_cleanup(move || hotkey_listener.remove());

    // A pointer-up may never arrive when the tab loses focus mid-gesture;
    // release both slots on window blur.
    let blur_listener =
        window_event_listener(ev::blur, move |_| end_active_pointer_interaction(runtime));
    on_cleanup(move || blur_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(ShellAction::UpdateDrag { pointer });
        }
        if interaction.panning.is_some() {
            runtime.dispatch_action(ShellAction::UpdatePan { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    // Only pointer-downs that fall through to the canvas backdrop start a
    // pan; window surfaces stop propagation, so the gesture is routed to
    // exactly one controller at press time.
    let begin_pan = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        runtime.dispatch_action(ShellAction::BeginPan {
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    let authed = Signal::derive(move || state.get().session.is_authenticated());
    let panning = move || runtime.interaction.get().panning.is_some();
    let canvas_style = move || {
        let offset = state.get().canvas_offset;
        format!("transform:translate({}px,{}px);", offset.x, offset.y)
    };

    view! {
        <div
            class="shell-root"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <Show when=move || authed.get() fallback=|| view! { <LoginGate /> }>
                <div
                    id="canvas"
                    class="desktop-canvas"
                    class:panning=panning
                    on:pointerdown=begin_pan
                >
                    <div class="canvas-surface" style=canvas_style>
                        <For each=move || state.get().windows key=|win| win.id.0 let:win>
                            <ShellWindow window_id=win.id />
                        </For>
                    </div>
                </div>
                <Dock />
                <PaletteOverlay />
            </Show>
        </div>
    }
}
