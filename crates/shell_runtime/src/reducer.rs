//! Reducer actions, side-effect intents, and transition logic for the shell.

use thiserror::Error;

use crate::{
    model::{
        AppDescriptor, CanvasOffset, DragSession, InteractionState, PaletteState, PanSession,
        PointerPosition, SessionPhase, SessionState, ShellState, WindowId,
    },
    palette::{self, BuiltinCommand, PaletteDispatch},
    registry, window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Open an app window, or focus it when already open.
    OpenApp(AppDescriptor),
    /// Raise a window to the top of the stack.
    FocusWindow { window_id: WindowId },
    /// Close a window by id. No-op when absent.
    CloseWindow { window_id: WindowId },
    /// Begin dragging a window from its titlebar.
    BeginDrag {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    /// Update an in-progress drag. Inert when no drag is active.
    UpdateDrag { pointer: PointerPosition },
    /// Release the drag slot. Safe no-op when nothing is active.
    EndDrag,
    /// Begin panning the canvas from its backdrop.
    BeginPan { pointer: PointerPosition },
    /// Update an in-progress pan. Inert when no pan is active.
    UpdatePan { pointer: PointerPosition },
    /// Release the pan slot. Safe no-op when nothing is active.
    EndPan,
    /// Toggle the command palette overlay.
    TogglePalette,
    /// Dismiss the palette without submitting.
    ClosePalette,
    /// Replace the palette query text.
    SetPaletteQuery { query: String },
    /// Submit the current palette query. The palette always deactivates.
    SubmitPalette,
    /// Submit login credentials.
    SubmitLogin { username: String, password: String },
    /// Credentials were accepted by the session service.
    LoginSucceeded { username: String, token: String },
    /// Credentials were rejected or the service was unreachable.
    LoginFailed { error: String },
    /// A persisted token was validated at startup.
    SessionValidated { username: String },
    /// The session ended: invalid token, failed validation, or logout.
    SessionInvalidated,
    /// A fresh installed-app snapshot arrived from the directory service.
    DirectoryLoaded { apps: Vec<AppDescriptor> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_shell`] for the host to execute.
pub enum RuntimeEffect {
    /// Post credentials to the session service.
    Authenticate { username: String, password: String },
    /// Persist the session token in the tab-scoped store.
    PersistToken(String),
    /// Remove the persisted session token.
    ClearToken,
    /// Fetch the installed-app list once; optionally auto-open the default
    /// app when the fresh snapshot contains it.
    LoadAppDirectory { launch_default: bool },
    /// Start the periodic directory reload.
    StartDirectoryPolling,
    /// Cancel the periodic directory reload.
    StopDirectoryPolling,
    /// Hand an unmatched palette query to the fallback sink.
    ForwardQuery(String),
    /// Move keyboard focus into the palette input.
    FocusPaletteInput,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing state that is not present.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`ShellAction`] to the shell state and collects resulting side
/// effects.
///
/// This function is the authoritative transition engine for window lifecycle,
/// z-ordering, pointer gestures, the command palette, and the session gate.
/// Network, storage, and timer work happens outside, driven by the returned
/// [`RuntimeEffect`] values; async completions re-enter as actions.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a
/// window that is not present.
pub fn reduce_shell(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    action: ShellAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::OpenApp(app) => {
            window_manager::open_or_focus(state, &app);
        }
        ShellAction::FocusWindow { window_id } => {
            if !window_manager::focus_window(state, window_id) {
                return Err(ReducerError::WindowNotFound);
            }
        }
        ShellAction::CloseWindow { window_id } => {
            window_manager::close_window(state, window_id);
        }
        ShellAction::BeginDrag { window_id, pointer } => {
            // One gesture at a time: a second pointer-down of either kind
            // while a slot is occupied is a no-op.
            if interaction.dragging.is_some() || interaction.panning.is_some() {
                return Ok(effects);
            }
            let rect_start = state
                .window(window_id)
                .ok_or(ReducerError::WindowNotFound)?
                .rect;
            window_manager::focus_window(state, window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        ShellAction::UpdateDrag { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let rect_start = session.rect_start;
                let window_id = session.window_id;
                let window = state
                    .windows
                    .iter_mut()
                    .find(|w| w.id == window_id)
                    .ok_or(ReducerError::WindowNotFound)?;
                window.rect.x = rect_start.x + dx;
                window.rect.y = rect_start.y + dy;
            }
        }
        ShellAction::EndDrag => {
            interaction.dragging = None;
        }
        ShellAction::BeginPan { pointer } => {
            if interaction.panning.is_some() || interaction.dragging.is_some() {
                return Ok(effects);
            }
            interaction.panning = Some(PanSession {
                pointer_start: pointer,
                offset_start: state.canvas_offset,
            });
        }
        ShellAction::UpdatePan { pointer } => {
            if let Some(session) = interaction.panning.as_ref() {
                state.canvas_offset = CanvasOffset {
                    x: session.offset_start.x + (pointer.x - session.pointer_start.x),
                    y: session.offset_start.y + (pointer.y - session.pointer_start.y),
                };
            }
        }
        ShellAction::EndPan => {
            interaction.panning = None;
        }
        ShellAction::TogglePalette => {
            if state.palette.active {
                state.palette = PaletteState::default();
            } else {
                state.palette = PaletteState {
                    active: true,
                    query: String::new(),
                };
                effects.push(RuntimeEffect::FocusPaletteInput);
            }
        }
        ShellAction::ClosePalette => {
            state.palette = PaletteState::default();
        }
        ShellAction::SetPaletteQuery { query } => {
            state.palette.query = query;
        }
        ShellAction::SubmitPalette => {
            let raw = std::mem::take(&mut state.palette.query);
            state.palette = PaletteState::default();
            match palette::resolve_query(&raw, &state.apps) {
                PaletteDispatch::Builtin(BuiltinCommand::SystemPanel) => {
                    window_manager::open_or_focus(state, &registry::system_panel_descriptor());
                }
                PaletteDispatch::Builtin(BuiltinCommand::Logout) => {
                    end_session(state, interaction, &mut effects);
                }
                PaletteDispatch::App(app) => {
                    window_manager::open_or_focus(state, &app);
                }
                PaletteDispatch::Forward(query) => {
                    effects.push(RuntimeEffect::ForwardQuery(query));
                }
            }
        }
        ShellAction::SubmitLogin { username, password } => {
            state.session.login_error = None;
            effects.push(RuntimeEffect::Authenticate { username, password });
        }
        ShellAction::LoginSucceeded { username, token } => {
            state.session = SessionState {
                phase: SessionPhase::Authenticated { username },
                login_error: None,
            };
            effects.push(RuntimeEffect::PersistToken(token));
            effects.push(RuntimeEffect::LoadAppDirectory {
                launch_default: true,
            });
            effects.push(RuntimeEffect::StartDirectoryPolling);
        }
        ShellAction::LoginFailed { error } => {
            state.session.login_error = Some(error);
        }
        ShellAction::SessionValidated { username } => {
            state.session = SessionState {
                phase: SessionPhase::Authenticated { username },
                login_error: None,
            };
            effects.push(RuntimeEffect::LoadAppDirectory {
                launch_default: true,
            });
            effects.push(RuntimeEffect::StartDirectoryPolling);
        }
        ShellAction::SessionInvalidated => {
            end_session(state, interaction, &mut effects);
        }
        ShellAction::DirectoryLoaded { apps } => {
            state.apps = apps;
        }
    }

    Ok(effects)
}

/// Demotes the shell to the login gate: windows and gesture slots are
/// discarded, the persisted token is cleared, and the directory poll stops.
fn end_session(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) {
    state.session = SessionState::default();
    state.windows.clear();
    state.palette = PaletteState::default();
    interaction.dragging = None;
    interaction.panning = None;
    effects.push(RuntimeEffect::ClearToken);
    effects.push(RuntimeEffect::StopDirectoryPolling);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::launch_target_for;

    fn app(id: &str, name: &str) -> AppDescriptor {
        AppDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            icon: String::new(),
            launch_target: launch_target_for(id),
        }
    }

    fn reduce(
        state: &mut ShellState,
        interaction: &mut InteractionState,
        action: ShellAction,
    ) -> Vec<RuntimeEffect> {
        reduce_shell(state, interaction, action).expect("reduce")
    }

    fn open(
        state: &mut ShellState,
        interaction: &mut InteractionState,
        id: &str,
        name: &str,
    ) -> WindowId {
        reduce(state, interaction, ShellAction::OpenApp(app(id, name)));
        state.window_for_app(id).expect("window").id
    }

    #[test]
    fn open_app_creates_one_window_and_puts_it_on_top() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let bio = open(&mut state, &mut interaction, "bio", "Bio");
        let mail = open(&mut state, &mut interaction, "mail", "Mail");

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.top_window_id(), Some(mail));
        let bio_window = state.window(bio).unwrap();
        assert_eq!(bio_window.title, "Bio");
        assert_eq!(bio_window.launch_target, "/apps/bio");
    }

    #[test]
    fn reopening_an_open_app_focuses_instead_of_duplicating() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let bio = open(&mut state, &mut interaction, "bio", "Bio");
        open(&mut state, &mut interaction, "mail", "Mail");
        let z_before: Vec<u64> = state.windows.iter().map(|w| w.z_index).collect();

        reduce(&mut state, &mut interaction, ShellAction::OpenApp(app("bio", "Bio")));

        let bio_count = state.windows.iter().filter(|w| w.app_id == "bio").count();
        assert_eq!(bio_count, 1);
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.top_window_id(), Some(bio));
        let bio_z = state.window(bio).unwrap().z_index;
        assert!(z_before.iter().all(|z| bio_z > *z));
    }

    #[test]
    fn focus_raises_above_every_previously_open_window() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "bio", "Bio");
        open(&mut state, &mut interaction, "mail", "Mail");
        open(&mut state, &mut interaction, "contacts", "Contacts");
        let z_before: Vec<u64> = state.windows.iter().map(|w| w.z_index).collect();

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::FocusWindow { window_id: first },
        );

        let focused_z = state.window(first).unwrap().z_index;
        assert!(z_before.iter().all(|z| focused_z > *z));

        let mut all_z: Vec<u64> = state.windows.iter().map(|w| w.z_index).collect();
        all_z.sort_unstable();
        all_z.dedup();
        assert_eq!(all_z.len(), state.windows.len(), "z values must be unique");
    }

    #[test]
    fn focusing_a_missing_window_is_an_error_and_leaves_state_alone() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "bio", "Bio");
        let before = state.clone();

        let result = reduce_shell(
            &mut state,
            &mut interaction,
            ShellAction::FocusWindow {
                window_id: WindowId(999),
            },
        );

        assert_eq!(result, Err(ReducerError::WindowNotFound));
        assert_eq!(state, before);
    }

    #[test]
    fn rapid_opens_mint_distinct_ids() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let mut ids = Vec::new();
        for n in 0..16 {
            ids.push(open(
                &mut state,
                &mut interaction,
                &format!("app-{n}"),
                &format!("App {n}"),
            ));
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn close_window_is_idempotent() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let bio = open(&mut state, &mut interaction, "bio", "Bio");
        open(&mut state, &mut interaction, "mail", "Mail");

        reduce(&mut state, &mut interaction, ShellAction::CloseWindow { window_id: bio });
        let after_first = state.windows.clone();
        reduce(&mut state, &mut interaction, ShellAction::CloseWindow { window_id: bio });

        assert_eq!(state.windows, after_first);
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn drag_moves_window_by_absolute_pointer_math() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "bio", "Bio");
        let start = state.window(win).unwrap().rect;

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: win,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::UpdateDrag {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );
        let moved = state.window(win).unwrap().rect;
        assert_eq!((moved.x, moved.y), (start.x + 25, start.y + 40));

        // Absolute recompute, not accumulated deltas: moving back near the
        // origin lands the window back near its start.
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::UpdateDrag {
                pointer: PointerPosition { x: 12, y: 13 },
            },
        );
        let moved = state.window(win).unwrap().rect;
        assert_eq!((moved.x, moved.y), (start.x + 2, start.y + 3));
    }

    #[test]
    fn drag_brings_window_to_front_on_start() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        let bio = open(&mut state, &mut interaction, "bio", "Bio");
        open(&mut state, &mut interaction, "mail", "Mail");

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: bio,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );

        assert_eq!(state.top_window_id(), Some(bio));
    }

    #[test]
    fn second_begin_drag_is_inert_while_one_is_active() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        let bio = open(&mut state, &mut interaction, "bio", "Bio");
        let mail = open(&mut state, &mut interaction, "mail", "Mail");

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: bio,
                pointer: PointerPosition { x: 1, y: 1 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: mail,
                pointer: PointerPosition { x: 9, y: 9 },
            },
        );

        let session = interaction.dragging.as_ref().expect("drag active");
        assert_eq!(session.window_id, bio);
    }

    #[test]
    fn pan_and_drag_are_mutually_exclusive() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        let bio = open(&mut state, &mut interaction, "bio", "Bio");

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: bio,
                pointer: PointerPosition { x: 1, y: 1 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginPan {
                pointer: PointerPosition { x: 2, y: 2 },
            },
        );
        assert!(interaction.panning.is_none());

        reduce(&mut state, &mut interaction, ShellAction::EndDrag);
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginPan {
                pointer: PointerPosition { x: 2, y: 2 },
            },
        );
        assert!(interaction.panning.is_some());
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: bio,
                pointer: PointerPosition { x: 3, y: 3 },
            },
        );
        assert!(interaction.dragging.is_none());
    }

    #[test]
    fn pointer_moves_after_release_are_inert() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "bio", "Bio");

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginDrag {
                window_id: win,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce(&mut state, &mut interaction, ShellAction::EndDrag);
        let rect_after_release = state.window(win).unwrap().rect;
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::UpdateDrag {
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        assert_eq!(state.window(win).unwrap().rect, rect_after_release);

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginPan {
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce(&mut state, &mut interaction, ShellAction::EndPan);
        let offset_after_release = state.canvas_offset;
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::UpdatePan {
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        assert_eq!(state.canvas_offset, offset_after_release);
    }

    #[test]
    fn releasing_without_an_active_gesture_is_a_safe_noop() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        reduce(&mut state, &mut interaction, ShellAction::EndDrag);
        reduce(&mut state, &mut interaction, ShellAction::EndPan);

        assert_eq!(interaction, InteractionState::default());
        assert_eq!(state, ShellState::default());
    }

    #[test]
    fn pan_recomputes_offset_from_absolute_pointer() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "bio", "Bio");
        let rect_before = state.window(win).unwrap().rect;

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::BeginPan {
                pointer: PointerPosition { x: 5, y: 5 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::UpdatePan {
                pointer: PointerPosition { x: 25, y: 35 },
            },
        );
        assert_eq!(state.canvas_offset, CanvasOffset { x: 20, y: 30 });

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::UpdatePan {
                pointer: PointerPosition { x: 6, y: 7 },
            },
        );
        assert_eq!(state.canvas_offset, CanvasOffset { x: 1, y: 2 });

        // Panning translates the canvas, never window coordinates.
        assert_eq!(state.window(win).unwrap().rect, rect_before);
    }

    #[test]
    fn palette_toggle_clears_query_and_requests_input_focus() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(&mut state, &mut interaction, ShellAction::TogglePalette);
        assert!(state.palette.active);
        assert_eq!(state.palette.query, "");
        assert!(effects.contains(&RuntimeEffect::FocusPaletteInput));

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::SetPaletteQuery {
                query: "half-typed".to_string(),
            },
        );
        reduce(&mut state, &mut interaction, ShellAction::TogglePalette);
        assert_eq!(state.palette, PaletteState::default());
    }

    #[test]
    fn palette_query_opens_the_matching_app_topmost() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::DirectoryLoaded {
                apps: vec![app("bio", "Bio"), app("mail", "Mail")],
            },
        );

        reduce(&mut state, &mut interaction, ShellAction::TogglePalette);
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::SetPaletteQuery {
                query: "bio".to_string(),
            },
        );
        let effects = reduce(&mut state, &mut interaction, ShellAction::SubmitPalette);

        let bio_windows: Vec<_> = state.windows.iter().filter(|w| w.app_id == "bio").collect();
        assert_eq!(bio_windows.len(), 1);
        assert_eq!(state.top_window_id(), Some(bio_windows[0].id));
        assert!(!state.palette.active);
        assert!(!effects
            .iter()
            .any(|e| matches!(e, RuntimeEffect::ForwardQuery(_))));
    }

    #[test]
    fn unmatched_palette_query_goes_to_the_fallback_sink() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::DirectoryLoaded {
                apps: vec![app("bio", "Bio")],
            },
        );

        reduce(&mut state, &mut interaction, ShellAction::TogglePalette);
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::SetPaletteQuery {
                query: "  What is my uptime? ".to_string(),
            },
        );
        let effects = reduce(&mut state, &mut interaction, ShellAction::SubmitPalette);

        assert!(state.windows.is_empty());
        assert!(!state.palette.active);
        assert_eq!(
            effects,
            vec![RuntimeEffect::ForwardQuery(
                "  What is my uptime? ".to_string()
            )]
        );
    }

    #[test]
    fn palette_system_builtin_opens_the_fixed_system_window() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        reduce(&mut state, &mut interaction, ShellAction::TogglePalette);
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::SetPaletteQuery {
                query: "SYSTEM".to_string(),
            },
        );
        reduce(&mut state, &mut interaction, ShellAction::SubmitPalette);

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].app_id, "system");
        assert_eq!(state.windows[0].launch_target, "/system");
    }

    #[test]
    fn palette_logout_builtin_ends_the_session() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::LoginSucceeded {
                username: "justin".to_string(),
                token: "tok-1".to_string(),
            },
        );
        open(&mut state, &mut interaction, "bio", "Bio");

        reduce(&mut state, &mut interaction, ShellAction::TogglePalette);
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::SetPaletteQuery {
                query: "logout".to_string(),
            },
        );
        let effects = reduce(&mut state, &mut interaction, ShellAction::SubmitPalette);

        assert!(!state.session.is_authenticated());
        assert!(state.windows.is_empty());
        assert!(effects.contains(&RuntimeEffect::ClearToken));
        assert!(effects.contains(&RuntimeEffect::StopDirectoryPolling));
    }

    #[test]
    fn submit_login_clears_stale_errors_and_requests_authentication() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        state.session.login_error = Some("Login failed".to_string());

        let effects = reduce(
            &mut state,
            &mut interaction,
            ShellAction::SubmitLogin {
                username: "justin".to_string(),
                password: "hunter2".to_string(),
            },
        );

        assert_eq!(state.session.login_error, None);
        assert_eq!(
            effects,
            vec![RuntimeEffect::Authenticate {
                username: "justin".to_string(),
                password: "hunter2".to_string(),
            }]
        );
    }

    #[test]
    fn login_success_persists_the_token_and_schedules_registry_work() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            ShellAction::LoginSucceeded {
                username: "justin".to_string(),
                token: "tok-1".to_string(),
            },
        );

        assert!(state.session.is_authenticated());
        assert_eq!(state.session.username(), Some("justin"));
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PersistToken("tok-1".to_string()),
                RuntimeEffect::LoadAppDirectory {
                    launch_default: true
                },
                RuntimeEffect::StartDirectoryPolling,
            ]
        );
    }

    #[test]
    fn login_failure_shows_an_inline_error_and_stays_unauthenticated() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            ShellAction::LoginFailed {
                error: "Auth service unreachable".to_string(),
            },
        );

        assert!(!state.session.is_authenticated());
        assert_eq!(
            state.session.login_error,
            Some("Auth service unreachable".to_string())
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn validated_boot_session_loads_the_registry_and_starts_polling() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            ShellAction::SessionValidated {
                username: "justin".to_string(),
            },
        );

        assert!(state.session.is_authenticated());
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::LoadAppDirectory {
                    launch_default: true
                },
                RuntimeEffect::StartDirectoryPolling,
            ]
        );
    }

    #[test]
    fn invalidated_session_clears_the_token_and_opens_no_windows() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(&mut state, &mut interaction, ShellAction::SessionInvalidated);

        assert!(!state.session.is_authenticated());
        assert_eq!(state.session.login_error, None);
        assert!(state.windows.is_empty());
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ClearToken,
                RuntimeEffect::StopDirectoryPolling,
            ]
        );
    }

    #[test]
    fn directory_snapshots_replace_the_registry_wholesale() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            ShellAction::DirectoryLoaded {
                apps: vec![app("bio", "Bio"), app("mail", "Mail")],
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            ShellAction::DirectoryLoaded {
                apps: vec![app("contacts", "Contacts")],
            },
        );

        assert_eq!(state.apps, vec![app("contacts", "Contacts")]);
    }
}
