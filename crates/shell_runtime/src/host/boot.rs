use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::ShellHostContext, reducer::ShellAction};

pub(super) fn install_boot_check(host: ShellHostContext, dispatch: Callback<ShellAction>) {
    create_effect(move |_| {
        let dispatch = dispatch;
        let host = host.clone();
        spawn_local(async move {
            // No stored token: stay at the gate without touching the network.
            let Some(token) = host.token_store().load() else {
                return;
            };

            match host.session_service().validate(&token).await {
                Ok(identity) => dispatch.call(ShellAction::SessionValidated {
                    username: identity.username,
                }),
                Err(err) => {
                    // Fail closed: an unreachable session service demotes the
                    // same way an expired token does.
                    logging::warn!("session validation failed: {err}");
                    dispatch.call(ShellAction::SessionInvalidated);
                }
            }
        });
    });
}
