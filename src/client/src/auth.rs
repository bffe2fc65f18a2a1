//! Access to the authentication state of the current user.
//!
//! The client never stores credentials itself. Before each request it asks a
//! [`Session`] whether the user is logged in, and if so, for the token to send
//! along.

use std::sync::{PoisonError, RwLock};

/// The authentication state consulted before every outbound request.
///
/// Both methods are called synchronously, on each request, so that logging in
/// or out takes effect on the very next call.
pub trait Session: Send + Sync {
    /// Returns `true` if a session is currently authenticated.
    fn is_logged_in(&self) -> bool {
        self.access_token().is_some()
    }

    /// The bearer token of the current session, if any.
    fn access_token(&self) -> Option<String>;
}

/// A session that keeps its access token in memory.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RwLock<Option<String>>,
}

impl MemorySession {
    /// Create a new, logged out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the access token, replacing any existing one.
    pub fn login<T: Into<String>>(&self, token: T) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Forget the access token.
    pub fn logout(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Session for MemorySession {
    fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
