use super::*;

#[component]
pub(super) fn LoginGate() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = Signal::derive(move || state.get().session.login_error.clone());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        runtime.dispatch_action(ShellAction::SubmitLogin {
            username: username.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <form class="login-gate" on:submit=submit>
            <h1>"Sign in"</h1>
            <input
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=username
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                autocomplete="current-password"
                prop:value=password
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some() fallback=|| ()>
                <p class="login-error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <button type="submit">"Sign in"</button>
        </form>
    }
}
