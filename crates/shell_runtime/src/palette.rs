//! Command palette query resolution.
//!
//! Matching order is fixed: built-in literal commands, then a case-insensitive
//! exact name match against the installed-app snapshot (first match in list
//! order wins), then the fallback query sink.

use crate::model::AppDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Reserved palette commands resolved before the app registry is consulted.
pub enum BuiltinCommand {
    /// Open the fixed system status window.
    SystemPanel,
    /// End the current session and return to the login gate.
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of resolving one submitted palette query.
pub enum PaletteDispatch {
    Builtin(BuiltinCommand),
    /// Launch (or refocus) an installed app.
    App(AppDescriptor),
    /// Nothing matched; the raw query text goes to the fallback sink.
    Forward(String),
}

/// Resolves a submitted query against built-ins and the app snapshot.
pub fn resolve_query(raw: &str, apps: &[AppDescriptor]) -> PaletteDispatch {
    let normalized = raw.trim().to_lowercase();

    match normalized.as_str() {
        "system" => return PaletteDispatch::Builtin(BuiltinCommand::SystemPanel),
        "logout" => return PaletteDispatch::Builtin(BuiltinCommand::Logout),
        _ => {}
    }

    if let Some(app) = apps.iter().find(|app| app.name.to_lowercase() == normalized) {
        return PaletteDispatch::App(app.clone());
    }

    PaletteDispatch::Forward(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{build_descriptors, launch_target_for};
    use platform_host::DockAppRecord;

    fn apps() -> Vec<AppDescriptor> {
        build_descriptors(vec![
            DockAppRecord {
                id: "bio".to_string(),
                name: "Bio".to_string(),
                icon: String::new(),
            },
            DockAppRecord {
                id: "mail".to_string(),
                name: "Mail".to_string(),
                icon: String::new(),
            },
            DockAppRecord {
                id: "mail2".to_string(),
                name: "Mail".to_string(),
                icon: String::new(),
            },
        ])
    }

    #[test]
    fn queries_match_names_ignoring_case_and_surrounding_whitespace() {
        let apps = apps();
        let PaletteDispatch::App(app) = resolve_query("  BIO ", &apps) else {
            panic!("expected app dispatch");
        };
        assert_eq!(app.id, "bio");
        assert_eq!(app.launch_target, launch_target_for("bio"));
    }

    #[test]
    fn first_name_match_in_list_order_wins() {
        let PaletteDispatch::App(app) = resolve_query("mail", &apps()) else {
            panic!("expected app dispatch");
        };
        assert_eq!(app.id, "mail");
    }

    #[test]
    fn builtins_shadow_same_named_registry_apps() {
        let mut apps = apps();
        apps.insert(
            0,
            AppDescriptor {
                id: "impostor".to_string(),
                name: "System".to_string(),
                icon: String::new(),
                launch_target: launch_target_for("impostor"),
            },
        );
        assert_eq!(
            resolve_query("System", &apps),
            PaletteDispatch::Builtin(BuiltinCommand::SystemPanel)
        );
        assert_eq!(
            resolve_query(" logout", &apps),
            PaletteDispatch::Builtin(BuiltinCommand::Logout)
        );
    }

    #[test]
    fn unmatched_queries_forward_the_raw_text() {
        assert_eq!(
            resolve_query("  What is my uptime? ", &apps()),
            PaletteDispatch::Forward("  What is my uptime? ".to_string())
        );
    }
}
