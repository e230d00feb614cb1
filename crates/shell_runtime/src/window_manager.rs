//! Window lifecycle and stacking helpers used by the shell reducer.

use crate::model::{AppDescriptor, ShellState, WindowId, WindowRecord, WindowRect};

/// Horizontal origin of the spawn band.
const SPAWN_BAND_X: i32 = 120;
/// Vertical origin of the spawn band.
const SPAWN_BAND_Y: i32 = 80;
const SPAWN_BAND_WIDTH: u64 = 200;
const SPAWN_BAND_HEIGHT: u64 = 100;

/// Opens a window for `app`, or focuses the existing one when the app is
/// already open. Returns the id of the window that ended up on top.
pub fn open_or_focus(state: &mut ShellState, app: &AppDescriptor) -> WindowId {
    if let Some(window_id) = state.window_for_app(&app.id).map(|w| w.id) {
        focus_window(state, window_id);
        return window_id;
    }

    let window_id = next_window_id(state);
    let record = WindowRecord {
        id: window_id,
        app_id: app.id.clone(),
        title: app.name.clone(),
        launch_target: app.launch_target.clone(),
        rect: spawn_rect(window_id.0),
        z_index: 0,
    };
    state.windows.push(record);
    focus_window(state, window_id);
    window_id
}

/// Raises `window_id` by assigning the next value of the shared focus
/// counter. After the call its z strictly exceeds every z present before.
///
/// Returns `false` when the window does not exist (state unchanged).
pub fn focus_window(state: &mut ShellState, window_id: WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };
    state.next_z = state.next_z.saturating_add(1);
    state.windows[index].z_index = state.next_z;
    true
}

/// Removes a window by id. No-op when absent.
pub fn close_window(state: &mut ShellState, window_id: WindowId) {
    state.windows.retain(|w| w.id != window_id);
}

fn next_window_id(state: &mut ShellState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

/// Scatters successive windows inside a fixed band so they never stack at the
/// same point. Deterministic in the window id; the multipliers are coprime
/// with the band sizes to spread consecutive ids.
fn spawn_rect(seed: u64) -> WindowRect {
    let x = SPAWN_BAND_X + ((seed.wrapping_mul(53)) % SPAWN_BAND_WIDTH) as i32;
    let y = SPAWN_BAND_Y + ((seed.wrapping_mul(29)) % SPAWN_BAND_HEIGHT) as i32;
    WindowRect::at(x, y)
}
