#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
use crate::components::PALETTE_INPUT_DOM_ID;

pub(super) fn focus_palette_input() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        // The input mounts in the same tick this effect runs; defer one task.
        let callback = Closure::once_into_js(move || {
            let Some(element) = document.get_element_by_id(PALETTE_INPUT_DOM_ID) else {
                return;
            };
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
}
