//! Shell state model: windows, canvas, palette, session, and gesture slots.

/// Fixed width for freshly opened windows.
pub const DEFAULT_WINDOW_WIDTH: i32 = 900;
/// Fixed height for freshly opened windows.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

/// First z value handed out by the focus counter.
pub const INITIAL_Z: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
/// One launchable application as known to the shell. Snapshots are replaced
/// wholesale on every successful directory poll and read-only elsewhere.
pub struct AppDescriptor {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// URL the window body embeds, derived from the app id.
    pub launch_target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One open window. Owned by the shell state; the id is minted from a
/// monotonic counter and never reused within a session.
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: String,
    pub title: String,
    pub launch_target: String,
    pub rect: WindowRect,
    /// Stacking order from the shared focus counter. The highest value is the
    /// most recently focused or created window and renders topmost.
    pub z_index: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Translation applied to the desktop canvas transform.
pub struct CanvasOffset {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active titlebar drag. Position updates are computed from the absolute
/// pointer position against these start values, never from deltas.
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active canvas pan, same absolute-recompute scheme as [`DragSession`].
pub struct PanSession {
    pub pointer_start: PointerPosition,
    pub offset_start: CanvasOffset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer-gesture slots. At most one drag and one pan exist
/// system-wide; move events are inert while the matching slot is empty.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub panning: Option<PanSession>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Command palette overlay state.
pub struct PaletteState {
    pub active: bool,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    Authenticated { username: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authentication state. The bearer token itself lives in the host token
/// store, not here.
pub struct SessionState {
    pub phase: SessionPhase,
    /// Inline message shown on the login form after rejected credentials.
    pub login_error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Unauthenticated,
            login_error: None,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::Authenticated { username } => Some(username),
            SessionPhase::Unauthenticated => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The authoritative shell state. Mutated only through the reducer.
pub struct ShellState {
    pub next_window_id: u64,
    /// Monotonic focus counter backing window z assignment.
    pub next_z: u64,
    pub windows: Vec<WindowRecord>,
    pub canvas_offset: CanvasOffset,
    pub palette: PaletteState,
    pub session: SessionState,
    /// Installed-app snapshot from the directory service.
    pub apps: Vec<AppDescriptor>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_z: INITIAL_Z,
            windows: Vec::new(),
            canvas_offset: CanvasOffset::default(),
            palette: PaletteState::default(),
            session: SessionState::default(),
            apps: Vec::new(),
        }
    }
}

impl ShellState {
    /// Returns the topmost (most recently focused) window, if any.
    pub fn top_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }
}
