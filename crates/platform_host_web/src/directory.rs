//! `fetch`-backed app-directory (dock) client.

use platform_host::{AppDirectoryFuture, AppDirectoryService, DirectoryError, DockAppRecord};

#[cfg(target_arch = "wasm32")]
const DOCK_APPS_ENDPOINT: &str = "/dock/apps";

#[derive(Debug, Clone, Copy, Default)]
/// Browser client for the dock service's installed-app listing.
pub struct HttpDirectoryService;

#[cfg(target_arch = "wasm32")]
impl HttpDirectoryService {
    async fn installed_apps_inner() -> Result<Vec<DockAppRecord>, DirectoryError> {
        let response = gloo_net::http::Request::get(DOCK_APPS_ENDPOINT)
            .send()
            .await
            .map_err(|err| DirectoryError::Unreachable(err.to_string()))?;
        if !response.ok() {
            return Err(DirectoryError::Unreachable(format!(
                "dock responded with status {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|err| DirectoryError::Decode(err.to_string()))
    }
}

impl AppDirectoryService for HttpDirectoryService {
    fn installed_apps(&self) -> AppDirectoryFuture<'_, Result<Vec<DockAppRecord>, DirectoryError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(Self::installed_apps_inner())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::pin(async {
                Err(DirectoryError::Unreachable(
                    "browser fetch unavailable off wasm32".to_string(),
                ))
            })
        }
    }
}
