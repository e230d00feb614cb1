use leptos::*;
use leptos_meta::*;

use platform_host_web::build_host_services;
use shell_runtime::{ShellProvider, ShellRoot};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Driftdesk" />
        <Meta name="description" content="A pannable desktop-style shell for the browser." />

        <main class="site-root">
            <ShellEntry />
        </main>
    }
}

#[component]
pub fn ShellEntry() -> impl IntoView {
    view! {
        <ShellProvider host_services=build_host_services()>
            <ShellRoot />
        </ShellProvider>
    }
}
