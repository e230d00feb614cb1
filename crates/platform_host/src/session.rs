//! Session service contracts for login and bearer-token validation.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

/// Object-safe boxed future used by [`SessionService`] async methods.
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful login payload returned by the session service.
pub struct LoginOutcome {
    /// Account name confirmed by the service.
    pub username: String,
    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identity resolved from a previously issued bearer token.
pub struct SessionIdentity {
    /// Account name the token belongs to.
    pub username: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Session service failures, split so callers can distinguish rejected
/// credentials from expired tokens and transport problems.
pub enum SessionError {
    /// Credentials were understood and refused.
    #[error("{0}")]
    Rejected(String),
    /// The presented bearer token is expired or unknown.
    #[error("session token rejected")]
    InvalidToken,
    /// The session service could not be reached.
    #[error("session service unreachable: {0}")]
    Unreachable(String),
    /// The service answered with a payload that could not be decoded.
    #[error("session response malformed: {0}")]
    Decode(String),
}

/// Host service for establishing and validating sessions.
pub trait SessionService {
    /// Posts credentials and returns the issued token on success.
    fn login<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> SessionFuture<'a, Result<LoginOutcome, SessionError>>;

    /// Validates a persisted bearer token and returns the owning identity.
    fn validate<'a>(
        &'a self,
        token: &'a str,
    ) -> SessionFuture<'a, Result<SessionIdentity, SessionError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Session service that treats every call as unreachable, for unsupported
/// targets and baseline tests.
pub struct NoopSessionService;

impl SessionService for NoopSessionService {
    fn login<'a>(
        &'a self,
        _username: &'a str,
        _password: &'a str,
    ) -> SessionFuture<'a, Result<LoginOutcome, SessionError>> {
        Box::pin(async { Err(SessionError::Unreachable("no session backend".to_string())) })
    }

    fn validate<'a>(
        &'a self,
        _token: &'a str,
    ) -> SessionFuture<'a, Result<SessionIdentity, SessionError>> {
        Box::pin(async { Err(SessionError::Unreachable("no session backend".to_string())) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory session service with a fixed account table and prefix-encoded
/// tokens, used by tests and non-wasm wiring.
pub struct MemorySessionService {
    accounts: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionService {
    /// Registers an account the service will accept.
    pub fn with_account(self, username: &str, password: &str) -> Self {
        self.accounts
            .borrow_mut()
            .insert(username.to_string(), password.to_string());
        self
    }

    fn token_for(username: &str) -> String {
        format!("session-{username}")
    }
}

impl SessionService for MemorySessionService {
    fn login<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> SessionFuture<'a, Result<LoginOutcome, SessionError>> {
        Box::pin(async move {
            match self.accounts.borrow().get(username) {
                Some(stored) if stored == password => Ok(LoginOutcome {
                    username: username.to_string(),
                    token: Self::token_for(username),
                }),
                _ => Err(SessionError::Rejected("invalid credentials".to_string())),
            }
        })
    }

    fn validate<'a>(
        &'a self,
        token: &'a str,
    ) -> SessionFuture<'a, Result<SessionIdentity, SessionError>> {
        Box::pin(async move {
            let username = token
                .strip_prefix("session-")
                .ok_or(SessionError::InvalidToken)?;
            if self.accounts.borrow().contains_key(username) {
                Ok(SessionIdentity {
                    username: username.to_string(),
                })
            } else {
                Err(SessionError::InvalidToken)
            }
        })
    }
}
