//! Installed-app registry snapshots and launch-target derivation.

use std::time::Duration;

use platform_host::DockAppRecord;

use crate::model::AppDescriptor;

/// App opened automatically after a session is established, when installed.
pub const DEFAULT_APP_ID: &str = "bio";

/// Period of the background directory reload while a session is active.
pub const DIRECTORY_REFRESH_PERIOD: Duration = Duration::from_secs(10);

/// Derives the URL a window embeds for an installed app.
pub fn launch_target_for(app_id: &str) -> String {
    format!("/apps/{app_id}")
}

/// Builds the shell's descriptor snapshot from dock records, preserving the
/// service's ordering (palette matching is first-match-in-list-order).
pub fn build_descriptors(records: Vec<DockAppRecord>) -> Vec<AppDescriptor> {
    records
        .into_iter()
        .map(|record| {
            let launch_target = launch_target_for(&record.id);
            AppDescriptor {
                id: record.id,
                name: record.name,
                icon: record.icon,
                launch_target,
            }
        })
        .collect()
}

/// Descriptor for the reserved system status window opened by the palette's
/// `system` built-in. Not part of the installed-app registry.
pub fn system_panel_descriptor() -> AppDescriptor {
    AppDescriptor {
        id: "system".to_string(),
        name: "System".to_string(),
        icon: "system".to_string(),
        launch_target: "/system".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> DockAppRecord {
        DockAppRecord {
            id: id.to_string(),
            name: name.to_string(),
            icon: String::new(),
        }
    }

    #[test]
    fn descriptors_derive_launch_targets_from_ids_in_order() {
        let descriptors = build_descriptors(vec![record("bio", "Bio"), record("mail", "Mail")]);
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].id, "bio");
        assert_eq!(descriptors[0].launch_target, "/apps/bio");
        assert_eq!(descriptors[1].launch_target, "/apps/mail");
    }

    #[test]
    fn system_panel_is_not_an_installed_app_target() {
        let panel = system_panel_descriptor();
        assert_eq!(panel.launch_target, "/system");
        assert_ne!(panel.launch_target, launch_target_for(&panel.id));
    }
}
