//! `fetch`-backed session service client.

use platform_host::{LoginOutcome, SessionError, SessionFuture, SessionIdentity, SessionService};

#[cfg(target_arch = "wasm32")]
const AUTH_ENDPOINT: &str = "/auth";
#[cfg(target_arch = "wasm32")]
const ME_ENDPOINT: &str = "/me";

#[cfg(target_arch = "wasm32")]
#[derive(Debug, serde::Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, serde::Deserialize)]
struct AuthResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, serde::Deserialize)]
struct MeResponse {
    username: String,
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser session client speaking the auth service's JSON contract.
pub struct HttpSessionService;

#[cfg(target_arch = "wasm32")]
impl HttpSessionService {
    async fn login_inner(username: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        let body = serde_json::to_string(&AuthRequest { username, password })
            .map_err(|err| SessionError::Decode(err.to_string()))?;
        let response = gloo_net::http::Request::post(AUTH_ENDPOINT)
            .header("content-type", "application/json")
            .body(body)
            .map_err(|err| SessionError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(|err| SessionError::Unreachable(err.to_string()))?;

        let ok = response.ok();
        let payload: AuthResponse = response
            .json()
            .await
            .map_err(|err| SessionError::Decode(err.to_string()))?;
        if !ok || !payload.success {
            return Err(SessionError::Rejected(
                payload.error.unwrap_or_else(|| "Login failed".to_string()),
            ));
        }
        match (payload.token, payload.username) {
            (Some(token), Some(username)) => Ok(LoginOutcome { username, token }),
            _ => Err(SessionError::Decode(
                "auth response missing token or username".to_string(),
            )),
        }
    }

    async fn validate_inner(token: &str) -> Result<SessionIdentity, SessionError> {
        let response = gloo_net::http::Request::get(ME_ENDPOINT)
            .header("authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|err| SessionError::Unreachable(err.to_string()))?;
        if !response.ok() {
            return Err(SessionError::InvalidToken);
        }
        let payload: MeResponse = response
            .json()
            .await
            .map_err(|err| SessionError::Decode(err.to_string()))?;
        Ok(SessionIdentity {
            username: payload.username,
        })
    }
}

impl SessionService for HttpSessionService {
    fn login<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> SessionFuture<'a, Result<LoginOutcome, SessionError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(Self::login_inner(username, password))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (username, password);
            Box::pin(async {
                Err(SessionError::Unreachable(
                    "browser fetch unavailable off wasm32".to_string(),
                ))
            })
        }
    }

    fn validate<'a>(
        &'a self,
        token: &'a str,
    ) -> SessionFuture<'a, Result<SessionIdentity, SessionError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(Self::validate_inner(token))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
            Box::pin(async {
                Err(SessionError::Unreachable(
                    "browser fetch unavailable off wasm32".to_string(),
                ))
            })
        }
    }
}
