use leptos::{logging, spawn_local};
use platform_host::SessionError;

use crate::{host::ShellHostContext, reducer::ShellAction, runtime_context::ShellRuntimeContext};

pub(super) fn authenticate(
    host: ShellHostContext,
    runtime: ShellRuntimeContext,
    username: String,
    password: String,
) {
    spawn_local(async move {
        match host.session_service().login(&username, &password).await {
            Ok(outcome) => runtime.dispatch_action(ShellAction::LoginSucceeded {
                username: outcome.username,
                token: outcome.token,
            }),
            Err(SessionError::Rejected(message)) => {
                runtime.dispatch_action(ShellAction::LoginFailed { error: message });
            }
            Err(err) => {
                logging::warn!("login request failed: {err}");
                runtime.dispatch_action(ShellAction::LoginFailed {
                    error: "Auth service unreachable".to_string(),
                });
            }
        }
    });
}
