use leptos::{logging, set_interval_with_handle, spawn_local};

use crate::{
    host::ShellHostContext, reducer::ShellAction, registry, runtime_context::ShellRuntimeContext,
};

pub(super) fn load_directory(
    host: ShellHostContext,
    runtime: ShellRuntimeContext,
    launch_default: bool,
) {
    spawn_local(async move {
        let records = match host.directory_service().installed_apps().await {
            Ok(records) => records,
            Err(err) => {
                // Stale-but-available beats empty: the previous snapshot stays.
                logging::warn!("app directory load failed: {err}");
                return;
            }
        };

        let apps = registry::build_descriptors(records);
        let default_app = launch_default
            .then(|| apps.iter().find(|app| app.id == registry::DEFAULT_APP_ID).cloned())
            .flatten();

        runtime.dispatch_action(ShellAction::DirectoryLoaded { apps });
        if let Some(app) = default_app {
            runtime.dispatch_action(ShellAction::OpenApp(app));
        }
    });
}

pub(super) fn start_polling(host: ShellHostContext, runtime: ShellRuntimeContext) {
    // Replace rather than stack: a re-login must not leave two intervals.
    stop_polling(runtime);

    let interval = set_interval_with_handle(
        move || load_directory(host.clone(), runtime, false),
        registry::DIRECTORY_REFRESH_PERIOD,
    );
    match interval {
        Ok(handle) => runtime.poll_interval.set_value(Some(handle)),
        Err(err) => logging::warn!("directory polling install failed: {err:?}"),
    }
}

pub(super) fn stop_polling(runtime: ShellRuntimeContext) {
    if let Some(handle) = runtime.poll_interval.get_value() {
        handle.clear();
        runtime.poll_interval.set_value(None);
    }
}
